//! Message-carrying error types.
//!
//! Each type pairs a free-form message with the source location of the
//! constructor call, and only differs in its display prefix and meaning.

macro_rules! message_error {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
        #[display("{}: {} at line {} in {}", $prefix, message, line, file)]
        pub struct $name {
            /// What went wrong
            pub message: String,
            /// Line number where the error occurred
            pub line: u32,
            /// File where the error occurred
            pub file: &'static str,
        }

        impl $name {
            /// Create the error with `message` at the caller's location.
            #[track_caller]
            pub fn new(message: impl Into<String>) -> Self {
                let location = std::panic::Location::caller();
                Self {
                    message: message.into(),
                    line: location.line(),
                    file: location.file(),
                }
            }
        }
    };
}

message_error!(
    /// The HTTP client could not be built or a connection failed before any
    /// response arrived.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenewright_error::HttpError;
    ///
    /// let err = HttpError::new("Connection refused");
    /// assert!(err.to_string().starts_with("HTTP Error: Connection refused"));
    /// ```
    HttpError,
    "HTTP Error"
);

message_error!(
    /// JSON serialization or deserialization failed.
    JsonError,
    "JSON Error"
);

message_error!(
    /// The service answered but the answer is unusable, e.g. no choice
    /// carried text.
    BackendError,
    "Backend Error"
);

message_error!(
    /// Configuration could not be read, parsed or applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenewright_error::ConfigError;
    ///
    /// let err = ConfigError::new("Missing [client] table");
    /// assert!(err.message.contains("[client]"));
    /// ```
    ConfigError,
    "Configuration Error"
);

message_error!(
    /// A completion that could not be read as an array of scene strings.
    ///
    /// The acquirer answers it with a corrective turn; it never leaves a
    /// transcript request.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenewright_error::FormatError;
    ///
    /// let err = FormatError::new("expected `[` at line 1 column 1");
    /// assert!(format!("{}", err).contains("Format Error"));
    /// ```
    FormatError,
    "Format Error"
);
