//! Test utilities for transcript acquisition tests.
//!
//! This module provides a scripted driver and a recording completion log.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockDriver, MockResponse, RecordingLog};
