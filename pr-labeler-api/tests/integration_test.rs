use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pr_labeler_api::{create_router, AppState};
use pr_labeler_compiler::ConfigLoader;
use pr_labeler_dispatch::RecordingTrigger;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt; // for oneshot

const LABELER_CONFIG: &str = include_str!("../../config/labeler.yml");

fn app_with_trigger(trigger: Arc<RecordingTrigger>) -> Router {
    let config = ConfigLoader::new()
        .parse_yaml(LABELER_CONFIG)
        .expect("bundled config must load");
    create_router(Arc::new(AppState::with_trigger(config, trigger)))
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = app_with_trigger(Arc::new(RecordingTrigger::new()));
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_evaluate_pull_request() {
    let app = app_with_trigger(Arc::new(RecordingTrigger::new()));

    let (status, body) = send(
        &app,
        post_json(
            "/api/evaluate",
            json!({
                "title": "fix(turbo-ignore): respect fallback",
                "authorLogin": "sokra",
                "authorCompany": "@vercel",
                "changedFilePaths": [
                    "packages/turbo-ignore/src/index.ts",
                    ".github/workflows/test.yml"
                ],
                "fileOwners": {
                    "packages/turbo-ignore/src/index.ts": ["@vercel/turbo-oss"]
                }
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let labels: Vec<&str> = body["labels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l.as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec![
            "area: ci",
            "created-by: turbopack",
            "created-by: vercel",
            "owned-by: turborepo",
            "pkg: turbo-ignore",
        ]
    );
}

#[tokio::test]
async fn test_evaluate_outside_contributor() {
    let app = app_with_trigger(Arc::new(RecordingTrigger::new()));

    let (status, body) = send(
        &app,
        post_json(
            "/api/evaluate",
            json!({
                "title": "docs: fix typo",
                "authorLogin": "someoneelse",
                "changedFilePaths": ["docs/pages/repo/index.mdx"]
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let labels = body["labels"].as_array().unwrap();
    assert!(labels.contains(&json!("needs: triage")));
    assert!(labels.contains(&json!("area: docs")));
    assert!(!labels.contains(&json!("created-by: turbopack")));
}

#[tokio::test]
async fn test_evaluate_rejects_non_object_context() {
    let app = app_with_trigger(Arc::new(RecordingTrigger::new()));
    let (status, body) = send(&app, post_json("/api/evaluate", json!(["not", "an", "object"]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_evaluate_rejects_malformed_context() {
    let app = app_with_trigger(Arc::new(RecordingTrigger::new()));
    let (status, body) = send(
        &app,
        post_json("/api/evaluate", json!({ "changedFilePaths": 42 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "evaluation_error");
}

#[tokio::test]
async fn test_list_rules_and_settings() {
    let app = app_with_trigger(Arc::new(RecordingTrigger::new()));

    let (status, rules) = send(&app, get("/api/rules")).await;
    assert_eq!(status, StatusCode::OK);
    let first = &rules.as_array().unwrap()[0];
    assert_eq!(first["label"], "owned-by: turborepo");
    assert_eq!(first["condition"], "AND");
    assert_eq!(first["predicates"], json!(["isAnyFileOwnedByMatch"]));

    let (status, settings) = send(&app, get("/api/settings")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(settings["codeOwnersPath"], ".github/CODEOWNERS");
}

#[tokio::test]
async fn test_dispatch_publish_event() {
    let trigger = Arc::new(RecordingTrigger::new());
    let app = app_with_trigger(trigger.clone());

    let (status, body) = send(
        &app,
        post_json("/api/events/onPublish", json!({ "packages": ["turbo"] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["event"], "onPublish");
    assert_eq!(body["workflows"], json!(["bench-turborepo.yml"]));
    assert_eq!(trigger.workflows(), vec!["bench-turborepo.yml"]);
}

#[tokio::test]
async fn test_dispatch_failure_is_reported() {
    let trigger = Arc::new(RecordingTrigger::new());
    trigger.fail_workflow("bench-turborepo.yml");
    let app = app_with_trigger(trigger.clone());

    let (status, body) = send(
        &app,
        post_json("/api/events/onPublish", json!({ "packages": ["turbo"] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "dispatch_error");
    assert!(body["message"].as_str().unwrap().contains("bench-turborepo.yml"));
}

#[tokio::test]
async fn test_plan_does_not_trigger() {
    let trigger = Arc::new(RecordingTrigger::new());
    let app = app_with_trigger(trigger.clone());

    let (status, body) = send(&app, get("/api/events/onPublish/plan?packages=turbo,docs")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["workflows"], json!(["bench-turborepo.yml"]));

    let (_, body) = send(&app, get("/api/events/onPublish/plan?packages=docs")).await;
    assert_eq!(body["workflows"], json!([]));

    let (_, body) = send(&app, get("/api/events/onMerge/plan")).await;
    assert_eq!(body["workflows"], json!([]));

    assert!(trigger.requests().is_empty());
}
