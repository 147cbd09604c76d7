use std::time::{Duration, Instant};

use pantry_engine::{ClientSettings, EngineEvent, EngineHandle, RecommendRequest};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn wait_for_event(handle: &EngineHandle) -> EngineEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = handle.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "timed out waiting for engine event");
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn completion_carries_dispatch_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "recipe_name": "Pasta",
                "ingredients": "tomato, pasta, garlic",
                "similarity": 0.842,
            }],
        })))
        .mount(&server)
        .await;

    let handle = EngineHandle::new(ClientSettings::new(server.uri()));
    handle.dispatch(
        7,
        RecommendRequest {
            pantry: "tomato".to_string(),
            top_k: 3,
        },
    );

    let EngineEvent::DispatchCompleted {
        dispatch_id,
        result,
    } = wait_for_event(&handle).await;
    assert_eq!(dispatch_id, 7);
    let results = result.expect("dispatch ok");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].recipe_name, "Pasta");
}

#[tokio::test(flavor = "multi_thread")]
async fn overlapping_dispatches_both_complete() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    let handle = EngineHandle::new(ClientSettings::new(server.uri()));
    let request = RecommendRequest {
        pantry: "tomato".to_string(),
        top_k: 5,
    };
    handle.dispatch(1, request.clone());
    handle.dispatch(2, request);

    let mut seen = Vec::new();
    for _ in 0..2 {
        let EngineEvent::DispatchCompleted { dispatch_id, .. } = wait_for_event(&handle).await;
        seen.push(dispatch_id);
    }
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2]);
}
