//! Web front end: one form route that turns measurements into BMI and guidance.

use std::sync::Arc;

use axum::{
    Form, Json, Router, debug_handler,
    extract::{State, rejection::FormRejection},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use teen_health_client::observability::Health;
use teen_health_client::{BmiResult, GuidanceClient, GuidanceContext, GuidanceRecord, Measurement};
use tracing::info;

pub mod error;
pub mod form;
pub mod render;

use error::FormError;
use form::AssessmentForm;
use render::{PageState, render_page};

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub guidance: Arc<dyn GuidanceClient>,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(guidance: Arc<dyn GuidanceClient>) -> Self {
        Self {
            guidance,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Final payload of a successful submission.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Assessment {
    pub measurement: Measurement,
    pub bmi: BmiResult,
    pub guidance: GuidanceRecord,
}

/// Compute BMI and fetch guidance for a validated measurement.
pub async fn assess(client: &dyn GuidanceClient, measurement: Measurement) -> Assessment {
    let ctx = GuidanceContext::assess(measurement);
    info!(
        age = ctx.measurement.age,
        gender = %ctx.measurement.gender,
        bmi = ctx.bmi.value,
        category = %ctx.bmi.category,
        "generating guidance"
    );
    let guidance = client.generate(&ctx).await;
    Assessment {
        measurement: ctx.measurement,
        bmi: ctx.bmi,
        guidance,
    }
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

fn reject(err: FormError, json: bool) -> Response {
    metrics::counter!("assessments_total", "outcome" => "rejected").increment(1);
    info!(reason = %err, "submission rejected");
    if json {
        err.into_response()
    } else {
        (
            err.status(),
            Html(render_page(PageState::Rejected(&err.to_string()))),
        )
            .into_response()
    }
}

#[debug_handler]
async fn show_form() -> Html<String> {
    Html(render_page(PageState::Empty))
}

#[debug_handler]
async fn submit_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<AssessmentForm>, FormRejection>,
) -> Response {
    let json = wants_json(&headers);
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            info!(%rejection, "unreadable form body");
            return reject(FormError::InvalidNumber, json);
        }
    };
    let measurement = match form.validate() {
        Ok(m) => m,
        Err(e) => return reject(e, json),
    };

    let assessment = assess(state.guidance.as_ref(), measurement).await;
    metrics::counter!("assessments_total", "outcome" => "accepted").increment(1);

    if json {
        Json(assessment).into_response()
    } else {
        Html(render_page(PageState::Done(&assessment))).into_response()
    }
}

#[debug_handler]
async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health::readiness(state.guidance.as_ref()))
}

#[debug_handler]
async fn metrics_endpoint(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "metrics recorder not installed").into_response(),
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .route("/health", get(health))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use teen_health_client::{BmiCategory, FallbackGuidanceClient, fallback_guidance};

    #[tokio::test]
    async fn assess_combines_bmi_and_guidance() {
        let m = Measurement {
            age: 16,
            gender: "male".into(),
            height_cm: 175.0,
            weight_kg: 70.0,
        };
        let a = assess(&FallbackGuidanceClient, m.clone()).await;
        assert_eq!(a.measurement, m);
        assert_eq!(a.bmi.value, 22.9);
        assert_eq!(a.bmi.category, BmiCategory::HealthyWeight);
        assert_eq!(a.guidance, fallback_guidance());
    }

    #[test]
    fn wants_json_reads_accept_header() {
        let mut headers = HeaderMap::new();
        assert!(!wants_json(&headers));
        headers.insert(header::ACCEPT, "text/html".parse().unwrap());
        assert!(!wants_json(&headers));
        headers.insert(
            header::ACCEPT,
            "application/json, text/plain".parse().unwrap(),
        );
        assert!(wants_json(&headers));
    }
}
