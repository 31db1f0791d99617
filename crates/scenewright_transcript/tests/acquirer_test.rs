// Transcript acquisition against a scripted driver.
//
// Covers the retry loop end to end without network access: prompt contents,
// both parsing tiers, the temperature ramp, exhaustion and service failures.

mod test_utils;

use scenewright_core::Role;
use scenewright_error::{ScenewrightErrorKind, ServerErrorKind, TranscriptErrorKind};
use scenewright_transcript::{
    AcquisitionOutcome, CORRECTIVE_INSTRUCTION, Interpreter, MAX_ATTEMPTS, ParseTier,
    StrictParser, TranscriptAcquirer, temperature,
};
use std::sync::Arc;
use test_utils::{MockDriver, MockResponse, RecordingLog};

const MALFORMED: &str = "I think the scenes should be: first, second.";

fn acquirer(driver: &Arc<MockDriver>) -> TranscriptAcquirer {
    TranscriptAcquirer::new(driver.clone())
}

#[tokio::test]
async fn system_turn_contains_emotion_verbatim() {
    let driver = Arc::new(MockDriver::repeating(r#"["scene"]"#, 1));
    let emotion = "overwhelmed, a little scared of calculus";

    acquirer(&driver)
        .generate("What is a limit?", emotion)
        .await
        .unwrap();

    let requests = driver.requests();
    let system = &requests[0].messages[0];
    assert_eq!(system.role, Role::System);
    assert!(system.content.contains(emotion));
}

#[tokio::test]
async fn first_request_is_system_then_user() {
    let driver = Arc::new(MockDriver::repeating(r#"["scene"]"#, 1));

    acquirer(&driver)
        .generate("Why do magnets attract?", "curious")
        .await
        .unwrap();

    let messages = &driver.requests()[0].messages;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].content, "Why do magnets attract?");
    assert_eq!(
        driver.requests()[0].model.as_deref(),
        Some("mock-model")
    );
}

#[tokio::test]
async fn strict_parse_succeeds_on_first_attempt_at_zero_temperature() {
    let driver = Arc::new(MockDriver::repeating(r#"["a scene", "another scene"]"#, 1));

    let acquisition = acquirer(&driver)
        .acquire("Photosynthesis", "happy")
        .await
        .unwrap();

    assert_eq!(acquisition.transcript().scenes(), ["a scene", "another scene"]);
    assert_eq!(
        *acquisition.outcome(),
        AcquisitionOutcome::Succeeded {
            attempt: 0,
            tier: ParseTier::Strict
        }
    );
    assert_eq!(driver.call_count(), 1);
    assert_eq!(driver.temperatures(), vec![0.0]);
}

#[tokio::test]
async fn salvage_success_returns_the_parsed_scenes() {
    let driver = Arc::new(MockDriver::repeating(
        r#"Sure! Here you go: ["scene one", "scene two"] Hope that helps!"#,
        1,
    ));

    let acquisition = acquirer(&driver)
        .acquire("Prime numbers", "bored")
        .await
        .unwrap();

    assert_eq!(acquisition.transcript().scenes(), ["scene one", "scene two"]);
    assert_eq!(
        *acquisition.outcome(),
        AcquisitionOutcome::Succeeded {
            attempt: 0,
            tier: ParseTier::Salvage
        }
    );
    assert_eq!(driver.call_count(), 1);
}

#[tokio::test]
async fn salvage_recovers_array_with_inner_brackets() {
    let driver = Arc::new(MockDriver::repeating(
        r#"Scenes follow. [  "Use [brackets] carefully", "second scene"]"#,
        1,
    ));

    let transcript = acquirer(&driver)
        .generate("Regular expressions", "nervous")
        .await
        .unwrap();

    assert_eq!(
        transcript.scenes(),
        ["Use [brackets] carefully", "second scene"]
    );
}

#[tokio::test]
async fn code_fences_are_stripped_before_parsing() {
    let driver = Arc::new(MockDriver::repeating(
        "```python\n[\"fenced scene\"]\n```",
        1,
    ));
    let log = Arc::new(RecordingLog::default());

    let acquisition = acquirer(&driver)
        .with_log(log.clone())
        .acquire("Recursion", "confused")
        .await
        .unwrap();

    assert_eq!(acquisition.transcript().scenes(), ["fenced scene"]);
    assert_eq!(*acquisition.outcome(), AcquisitionOutcome::Succeeded {
        attempt: 0,
        tier: ParseTier::Strict,
    });
    assert_eq!(log.records(), vec![(0, "[\"fenced scene\"]".to_string())]);
}

#[tokio::test]
async fn temperatures_ramp_until_a_completion_parses() {
    for k in 0..MAX_ATTEMPTS {
        let mut responses = vec![MockResponse::text(MALFORMED); k];
        responses.push(MockResponse::text(r#"["finally"]"#));
        let driver = Arc::new(MockDriver::new_sequence(responses));

        let acquisition = acquirer(&driver)
            .acquire("Gravity", "determined")
            .await
            .unwrap();

        let expected: Vec<f32> = (0..=k).map(temperature).collect();
        let sent = driver.temperatures();
        assert_eq!(sent, expected);
        assert!(sent.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(acquisition.transcript().scenes(), ["finally"]);
        assert_eq!(acquisition.outcome().invocations(), k + 1);
    }
}

#[tokio::test]
async fn temperature_values_match_rounded_ratio() {
    let driver = Arc::new(MockDriver::repeating(MALFORMED, MAX_ATTEMPTS));

    acquirer(&driver).acquire("Entropy", "sad").await.unwrap();

    assert_eq!(driver.temperatures(), vec![0.0, 0.2, 0.4, 0.6, 0.8]);
}

#[tokio::test]
async fn failed_attempts_append_assistant_and_corrective_turns() {
    let driver = Arc::new(MockDriver::new_sequence(vec![
        MockResponse::text(MALFORMED),
        MockResponse::text(r#"["fixed"]"#),
    ]));

    let acquisition = acquirer(&driver)
        .acquire("Osmosis", "calm")
        .await
        .unwrap();

    let second = &driver.requests()[1].messages;
    assert_eq!(second.len(), 4);
    assert_eq!(second[2].role, Role::Assistant);
    assert_eq!(second[2].content, MALFORMED);
    assert_eq!(second[3].role, Role::User);
    assert_eq!(second[3].content, CORRECTIVE_INSTRUCTION);

    // The successful completion is recorded too.
    let conversation = acquisition.conversation();
    assert_eq!(conversation.len(), 5);
    assert_eq!(conversation.last().map(|m| m.role), Some(Role::Assistant));
    assert_eq!(conversation.count(Role::System), 1);
}

#[tokio::test]
async fn exhaustion_makes_exactly_five_calls_and_returns_empty() {
    // A sixth scripted response would parse; it must never be requested.
    let mut responses = vec![MockResponse::text(MALFORMED); MAX_ATTEMPTS];
    responses.push(MockResponse::text(r#"["too late"]"#));
    let driver = Arc::new(MockDriver::new_sequence(responses));

    let acquisition = acquirer(&driver)
        .acquire("Black holes", "anxious")
        .await
        .unwrap();

    assert_eq!(driver.call_count(), MAX_ATTEMPTS);
    assert!(acquisition.transcript().is_empty());
    assert_eq!(
        *acquisition.outcome(),
        AcquisitionOutcome::Exhausted {
            attempts: MAX_ATTEMPTS
        }
    );
    assert_eq!(
        acquisition.conversation().count(Role::User),
        1 + MAX_ATTEMPTS - 1
    );
}

#[tokio::test]
async fn generate_returns_empty_transcript_on_exhaustion() {
    let driver = Arc::new(MockDriver::repeating("no brackets at all", MAX_ATTEMPTS));

    let transcript = acquirer(&driver)
        .generate("Topology", "tired")
        .await
        .unwrap();

    assert!(transcript.is_empty());
}

#[tokio::test]
async fn service_error_propagates_without_retry() {
    let driver = Arc::new(MockDriver::new_sequence(vec![
        MockResponse::Error(ServerErrorKind::Api {
            status: 401,
            message: "invalid api key".to_string(),
        }),
        MockResponse::text(r#"["unreachable"]"#),
    ]));

    let err = acquirer(&driver)
        .generate("Algebra", "frustrated")
        .await
        .unwrap_err();

    assert_eq!(driver.call_count(), 1);
    assert!(err.is_service_error());
    assert!(matches!(err.kind(), ScenewrightErrorKind::Server(_)));
}

#[tokio::test]
async fn service_error_after_format_failure_stops_the_loop() {
    let driver = Arc::new(MockDriver::new_sequence(vec![
        MockResponse::text(MALFORMED),
        MockResponse::Error(ServerErrorKind::Http("connection reset".to_string())),
        MockResponse::text(r#"["unreachable"]"#),
    ]));

    let result = acquirer(&driver).generate("Calculus", "stressed").await;

    assert!(result.is_err());
    assert_eq!(driver.call_count(), 2);
}

#[tokio::test]
async fn response_without_text_is_an_error() {
    let driver = Arc::new(MockDriver::new_sequence(vec![MockResponse::Empty]));

    let err = acquirer(&driver)
        .generate("Optics", "curious")
        .await
        .unwrap_err();

    match err.kind() {
        ScenewrightErrorKind::Transcript(e) => {
            assert_eq!(e.kind, TranscriptErrorKind::MissingText(0))
        }
        other => panic!("unexpected error kind: {other}"),
    }
}

#[tokio::test]
async fn empty_topic_is_rejected_before_any_call() {
    let driver = Arc::new(MockDriver::repeating(r#"["scene"]"#, 1));

    let err = acquirer(&driver).generate("   ", "happy").await.unwrap_err();

    assert_eq!(driver.call_count(), 0);
    assert!(matches!(err.kind(), ScenewrightErrorKind::Transcript(_)));
}

#[tokio::test]
async fn every_completion_reaches_the_log() {
    let driver = Arc::new(MockDriver::new_sequence(vec![
        MockResponse::text(MALFORMED),
        MockResponse::text(r#"["ok"]"#),
    ]));
    let log = Arc::new(RecordingLog::default());

    acquirer(&driver)
        .with_log(log.clone())
        .generate("Waves", "excited")
        .await
        .unwrap();

    assert_eq!(
        log.records(),
        vec![
            (0, MALFORMED.to_string()),
            (1, r#"["ok"]"#.to_string())
        ]
    );
}

#[tokio::test]
async fn custom_interpreter_and_model_are_used() {
    let driver = Arc::new(MockDriver::new_sequence(vec![
        MockResponse::text(r#"Here: ["salvageable"]"#),
        MockResponse::text(r#"["strict"]"#),
    ]));

    let transcript = acquirer(&driver)
        .with_interpreter(Interpreter::new(vec![Box::new(StrictParser)]))
        .with_model("override-model")
        .generate("Sets", "neutral")
        .await
        .unwrap();

    assert_eq!(transcript.scenes(), ["strict"]);
    assert_eq!(driver.call_count(), 2);
    assert!(driver
        .requests()
        .iter()
        .all(|r| r.model.as_deref() == Some("override-model")));
}

#[tokio::test]
async fn concurrent_requests_keep_separate_conversations() {
    let driver = Arc::new(MockDriver::repeating(r#"["scene"]"#, 2));
    let acquirer = acquirer(&driver);

    let (first, second) = tokio::join!(
        acquirer.acquire("Topic A", "happy"),
        acquirer.acquire("Topic B", "sad")
    );

    assert_eq!(first.unwrap().conversation().len(), 3);
    assert_eq!(second.unwrap().conversation().len(), 3);
    assert_eq!(driver.call_count(), 2);
}
