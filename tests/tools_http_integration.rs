//! Integration tests for the tools HTTP endpoints.
//!
//! These tests verify:
//! 1. Tool discovery lists every facility tool
//! 2. Invocations return the tool result with tracking metadata
//! 3. Unknown tools and bad parameters map to 404 and 400

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use soberbookings::adapters::http::{api_router, ToolsAppState, WebhookAppState};
use soberbookings::adapters::{
    FacilityToolExecutor, InMemoryLogSink, LoggingFacilityEventHandler, StaticWebhookSecret,
};
use soberbookings::application::NotionWebhookDispatcher;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    let log = Arc::new(InMemoryLogSink::new());
    let dispatcher = NotionWebhookDispatcher::new(
        Arc::new(StaticWebhookSecret::new("unused")),
        Arc::new(LoggingFacilityEventHandler::new(log.clone())),
        log,
    );

    api_router(
        WebhookAppState::new(Arc::new(dispatcher)),
        ToolsAppState::new(Arc::new(FacilityToolExecutor::new())),
    )
}

fn invoke(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/tools/invoke")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Discovery
// =============================================================================

#[tokio::test]
async fn lists_all_facility_tools() {
    let response = app()
        .oneshot(Request::builder().uri("/api/tools").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["count"], 3);
    let names: Vec<&str> = json["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["search_facilities", "verify_insurance", "intake_assessment"]
    );
}

// =============================================================================
// Invocation
// =============================================================================

#[tokio::test]
async fn search_facilities_returns_listing() {
    let response = app()
        .oneshot(invoke(json!({
            "tool_name": "search_facilities",
            "parameters": { "query": "detox", "insurance": "Aetna" }
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["tool_name"], "search_facilities");
    assert!(!json["invocation_id"].as_str().unwrap().is_empty());
    assert!(json["error"].is_null());
    assert_eq!(json["result"].as_array().unwrap().len(), 2);
    assert_eq!(json["result"][1]["name"], "Serenity Treatment Center");
}

#[tokio::test]
async fn verify_insurance_echoes_policy() {
    let response = app()
        .oneshot(invoke(json!({
            "tool_name": "verify_insurance",
            "parameters": { "provider": "Blue Cross", "policy_number": "BC-77" }
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["result"]["provider"], "Blue Cross");
    assert_eq!(json["result"]["policy_number"], "BC-77");
    assert_eq!(json["result"]["out_of_pocket_max"], "$5,000 per year");
}

#[tokio::test]
async fn intake_assessment_returns_recommendation() {
    let response = app()
        .oneshot(invoke(json!({
            "tool_name": "intake_assessment",
            "parameters": {
                "name": "Alex",
                "age": 29,
                "substance": "opioids",
                "usage_frequency": "weekly",
                "previous_treatment": true
            }
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["result"]["risk_level"], "Moderate");
    assert_eq!(
        json["result"]["recommended_care"],
        json!(["Intensive Outpatient", "Individual Therapy"])
    );
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn unknown_tool_is_not_found() {
    let response = app()
        .oneshot(invoke(json!({ "tool_name": "book_bed", "parameters": {} })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = json_body(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Tool not found");
}

#[tokio::test]
async fn missing_parameter_is_bad_request() {
    let response = app()
        .oneshot(invoke(json!({
            "tool_name": "verify_insurance",
            "parameters": { "provider": "Cigna" }
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("Invalid parameters for verify_insurance"));
}
