//! `GuidanceClient` trait, BMI domain types and a reqwest-based Groq client.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub mod bmi;
pub mod config;
pub mod guidance;
pub mod http_client;
pub mod middleware;
pub mod observability;
pub mod prompt;
pub mod utils;

pub use bmi::{BmiCategory, BmiResult, calculate_bmi};
pub use guidance::{
    ActivityPlan, GuidanceRecord, HydrationPlan, NutritionPlan, SleepPlan, WeeklyPlan,
    fallback_guidance,
};

#[derive(Debug, Error)]
pub enum GuidanceError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API key not configured")]
    MissingCredential,
    #[error("completion service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("completion response contained no text")]
    EmptyResponse,
    #[error("no JSON object found in completion text")]
    NoJsonObject,
    #[error("guidance JSON did not match the expected shape: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(String),
}

/// One submitted set of measurements. Lives for a single request.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Measurement {
    pub age: u8,
    pub gender: String,
    pub height_cm: f64,
    pub weight_kg: f64,
}

/// Everything the guidance prompt is built from.
#[derive(Clone, Debug, PartialEq)]
pub struct GuidanceContext {
    pub measurement: Measurement,
    pub bmi: BmiResult,
}

impl GuidanceContext {
    /// Compute BMI and category for an already validated measurement.
    pub fn assess(measurement: Measurement) -> Self {
        let bmi = BmiResult::compute(&measurement);
        Self { measurement, bmi }
    }
}

/// Which source produced the record handed back by [`GuidanceClient::generate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuidanceSource {
    Ai,
    Fallback,
}

impl GuidanceSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuidanceSource::Ai => "ai",
            GuidanceSource::Fallback => "fallback",
        }
    }
}

/// Produces health guidance for one assessment.
///
/// Implementations never fail: any problem reaching or parsing the remote
/// service is absorbed by returning [`fallback_guidance`].
#[async_trait]
pub trait GuidanceClient: Send + Sync + 'static {
    async fn generate(&self, ctx: &GuidanceContext) -> GuidanceRecord;

    /// Whether a remote service is configured at all.
    fn is_configured(&self) -> bool {
        false
    }
}

/// Always answers with the static fallback record.
#[derive(Clone, Copy, Debug, Default)]
pub struct FallbackGuidanceClient;

#[async_trait]
impl GuidanceClient for FallbackGuidanceClient {
    async fn generate(&self, _ctx: &GuidanceContext) -> GuidanceRecord {
        fallback_guidance()
    }
}
