//! Counter coverage through the `/metrics` endpoint.
//!
//! Kept in its own test binary because the Prometheus recorder is installed
//! process-wide.

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use metrics_exporter_prometheus::PrometheusBuilder;
use tower::ServiceExt;

use teen_health_client::config::Config;
use teen_health_client::http_client::ReqwestGuidanceClient;
use teen_health_server::{AppState, app};

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::ACCEPT, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

#[tokio::test]
async fn submissions_and_guidance_sources_are_counted() {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("install recorder");

    // no API key: guidance comes from the fallback without a network call
    let client = ReqwestGuidanceClient::new(&Config::default());
    let router = app(AppState::new(Arc::new(client)).with_metrics(handle));

    let resp = router
        .clone()
        .oneshot(post_form("age=15&height=160&weight=50&gender=male"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = router
        .clone()
        .oneshot(post_form("age=25&height=160&weight=50&gender=male"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = router
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains(r#"assessments_total{outcome="accepted"} 1"#), "{text}");
    assert!(text.contains(r#"assessments_total{outcome="rejected"} 1"#), "{text}");
    assert!(text.contains(r#"guidance_generated_total{source="fallback"} 1"#), "{text}");
    assert!(!text.contains(r#"source="ai""#), "{text}");
}
