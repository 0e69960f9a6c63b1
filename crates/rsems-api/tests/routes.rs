use aws_sdk_s3::config::{BehaviorVersion, Region};
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use jsonwebtoken::{EncodingKey, Header, encode};
use rsems_api::config::ApiConfig;
use rsems_api::middleware::auth::AuthUser;
use rsems_api::state::AppState;
use serde::Serialize;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

const SECRET: &str = "test-secret";

// No request in this file reaches the bucket: every case is rejected before
// any storage call, so an unconfigured client is enough.
fn test_app() -> Router {
    let config = ApiConfig::from_lookup(|key| match key {
        "RSEMS_JWT_SECRET" => Some(SECRET.to_string()),
        _ => None,
    })
    .unwrap();

    let s3 = aws_sdk_s3::Client::from_conf(
        aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build(),
    );

    rsems_api::app(AppState::new(s3, &config))
}

#[derive(Serialize)]
struct TestClaims {
    sub: Uuid,
    aud: String,
    exp: u64,
}

fn token_for(sub: Uuid, secret: &str) -> String {
    let exp = jiff::Timestamp::now().as_second() as u64 + 3600;
    encode(
        &Header::default(),
        &TestClaims {
            sub,
            aud: "authenticated".to_string(),
            exp,
        },
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_needs_no_token() {
    let response = test_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn protected_routes_reject_missing_token() {
    let response = test_app()
        .oneshot(Request::get("/worklist").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "missing bearer token");
}

#[tokio::test]
async fn token_signed_with_other_secret_is_rejected() {
    let token = token_for(Uuid::new_v4(), "some-other-secret");
    let response = test_app()
        .oneshot(post_json("/logs", Some(&token), json!({"symptoms": []})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn empty_submission_is_a_validation_error() {
    let token = token_for(Uuid::new_v4(), SECRET);
    let response = test_app()
        .oneshot(post_json("/logs", Some(&token), json!({"symptoms": []})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No symptoms selected");
}

#[tokio::test]
async fn out_of_range_severity_is_refused() {
    let token = token_for(Uuid::new_v4(), SECRET);
    let body = json!({
        "symptoms": [
            {"symptom_id": 1, "symptom_name": "Nausea", "severity": 2},
            {"symptom_id": 2, "symptom_name": "Fever", "severity": 7}
        ]
    });
    let response = test_app()
        .oneshot(post_json("/logs", Some(&token), body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains("Fever"));
    assert!(error.contains("outside range"));
}

#[tokio::test]
async fn blank_profile_name_is_rejected() {
    let token = token_for(Uuid::new_v4(), SECRET);
    let request = Request::builder()
        .method("PUT")
        .uri("/profile")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(
            json!({"full_name": "  ", "cancer_type": "Cervical"}).to_string(),
        ))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn entry_without_severity_is_a_bad_request() {
    let token = token_for(Uuid::new_v4(), SECRET);
    let body = json!({
        "symptoms": [{"symptom_id": 1, "symptom_name": "Nausea"}]
    });
    let response = test_app()
        .oneshot(post_json("/logs", Some(&token), body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains("severity"), "{error}");
}

#[tokio::test]
async fn non_integer_severity_is_a_bad_request() {
    let token = token_for(Uuid::new_v4(), SECRET);
    for severity in [json!(2.5), json!("3"), json!(null)] {
        let body = json!({
            "symptoms": [{"symptom_id": 1, "symptom_name": "Nausea", "severity": severity}]
        });
        let response = test_app()
            .oneshot(post_json("/logs", Some(&token), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "severity {severity}");
        assert!(body_json(response).await["error"].is_string());
    }
}

#[tokio::test]
async fn malformed_body_without_content_type_is_a_bad_request() {
    let token = token_for(Uuid::new_v4(), SECRET);
    let request = Request::builder()
        .method("POST")
        .uri("/logs")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from("{\"symptoms\": ["))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn future_log_date_is_refused() {
    let token = token_for(Uuid::new_v4(), SECRET);
    let body = json!({
        "symptoms": [{"symptom_id": 1, "symptom_name": "Fatigue", "severity": 1}],
        "log_date": "2999-01-01"
    });
    let response = test_app()
        .oneshot(post_json("/logs", Some(&token), body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains("after today"), "{error}");
}

#[tokio::test]
async fn authenticated_response_carries_caller_for_audit() {
    let caller = Uuid::new_v4();
    let token = token_for(caller, SECRET);
    let response = test_app()
        .oneshot(post_json("/logs", Some(&token), json!({"symptoms": []})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let user = response.extensions().get::<AuthUser>().unwrap();
    assert_eq!(user.id, caller);
}

#[tokio::test]
async fn rejected_token_leaves_no_caller_on_response() {
    let response = test_app()
        .oneshot(Request::get("/logs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.extensions().get::<AuthUser>().is_none());
}
