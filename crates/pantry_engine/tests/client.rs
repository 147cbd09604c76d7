use pantry_engine::{
    ClientSettings, HttpRecommendClient, RecommendClient, RecommendError, RecommendRequest,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> RecommendRequest {
    RecommendRequest {
        pantry: "tomato, pasta, garlic".to_string(),
        top_k: 5,
    }
}

#[tokio::test]
async fn posts_json_body_and_parses_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "pantry": "tomato, pasta, garlic",
            "top_k": 5,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "recipe_name": "Pasta",
                "ingredients": "tomato, pasta, garlic",
                "similarity": 0.842,
            }],
        })))
        .mount(&server)
        .await;

    let client = HttpRecommendClient::new(ClientSettings::new(server.uri()));
    let results = client.recommend(&request()).await.expect("recommend ok");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].recipe_name, "Pasta");
    assert_eq!(results[0].ingredients, "tomato, pasta, garlic");
    assert!((results[0].similarity - 0.842).abs() < 1e-9);
}

#[tokio::test]
async fn non_2xx_status_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = HttpRecommendClient::new(ClientSettings::new(server.uri()));
    let err = client.recommend(&request()).await.unwrap_err();

    assert_eq!(err, RecommendError::Api(500));
    assert_eq!(err.to_string(), "API 500");
}

#[tokio::test]
async fn all_failure_statuses_are_treated_uniformly() {
    for status in [400u16, 404, 503] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/recommend"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let client = HttpRecommendClient::new(ClientSettings::new(server.uri()));
        let err = client.recommend(&request()).await.unwrap_err();
        assert_eq!(err, RecommendError::Api(status));
    }
}

#[tokio::test]
async fn missing_results_key_degrades_to_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = HttpRecommendClient::new(ClientSettings::new(server.uri()));
    let results = client.recommend(&request()).await.expect("recommend ok");

    assert!(results.is_empty());
}

#[tokio::test]
async fn unknown_response_fields_are_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "recipe_name": "Soup",
                "ingredients": "tomato",
                "similarity": 0.25,
                "rank": 1,
            }],
            "model_version": "tfidf-2024",
        })))
        .mount(&server)
        .await;

    let client = HttpRecommendClient::new(ClientSettings::new(server.uri()));
    let results = client.recommend(&request()).await.expect("recommend ok");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].recipe_name, "Soup");
}

#[tokio::test]
async fn non_json_success_body_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = HttpRecommendClient::new(ClientSettings::new(server.uri()));
    let err = client.recommend(&request()).await.unwrap_err();

    assert!(matches!(err, RecommendError::Transport(_)));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_handled() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    let base = format!("{}/", server.uri());
    let client = HttpRecommendClient::new(ClientSettings::new(base));
    let results = client.recommend(&request()).await.expect("recommend ok");

    assert!(results.is_empty());
}

#[tokio::test]
async fn invalid_base_url_is_rejected_before_sending() {
    let client = HttpRecommendClient::new(ClientSettings::new("not a url"));
    let err = client.recommend(&request()).await.unwrap_err();

    assert!(matches!(err, RecommendError::InvalidBaseUrl(_)));
}
