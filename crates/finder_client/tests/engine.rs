use std::time::{Duration, Instant};

use finder_client::{ClientSettings, EngineEvent, EngineHandle};
use finder_core::{update, Algorithm, AppState, Effect, Msg, QueryOutcome};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn next_event(engine: &EngineHandle) -> EngineEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = engine.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "engine produced no event");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test]
async fn engine_round_trip_feeds_back_into_state() {
    finder_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/find_similar_items/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "algorithm_used": "hss", "results": [1, 2, 3] })),
        )
        .mount(&server)
        .await;
    let engine = EngineHandle::new(&ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
    .expect("engine");

    let (state, _) = update(AppState::new(), Msg::TargetItemChanged("Pump".to_string()));
    let (state, _) = update(state, Msg::AlgorithmSelected(Some(Algorithm::Hss)));
    let (state, effects) = update(state, Msg::SubmitClicked);
    for effect in effects {
        match effect {
            Effect::SendQuery {
                submission_id,
                request,
            } => engine.submit(submission_id, request),
        }
    }

    let EngineEvent::QueryCompleted {
        submission_id,
        outcome,
    } = next_event(&engine).await;
    assert_eq!(submission_id, 1);

    let (state, _) = update(
        state,
        Msg::QueryCompleted {
            submission_id,
            outcome,
        },
    );
    assert!(!state.is_submitting());
    assert_eq!(
        state.outcome().payload().map(|p| p.results.clone()),
        Some(json!([1, 2, 3]))
    );
}

#[tokio::test]
async fn engine_reports_remote_failures_as_outcomes() {
    finder_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "item not found" })))
        .mount(&server)
        .await;
    let engine = EngineHandle::new(&ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
    .expect("engine");

    let request = finder_core::build_request(&finder_core::QueryDraft {
        target_item: "Ghost".to_string(),
        algorithm: Some(Algorithm::Hybrid),
        ..Default::default()
    })
    .expect("valid");
    engine.submit(9, request);

    let event = next_event(&engine).await;
    assert_eq!(
        event,
        EngineEvent::QueryCompleted {
            submission_id: 9,
            outcome: QueryOutcome::Failure("item not found".to_string()),
        }
    );
}
