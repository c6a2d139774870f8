//! HTTP client for Groq's OpenAI-compatible chat completions endpoint.
//!
//! This module provides a reqwest-based implementation of the [`GuidanceClient`](crate::GuidanceClient) trait.

use crate::config::Config;
use crate::prompt::{SYSTEM_PROMPT, build_guidance_prompt};
use crate::utils::extract_json_object;
use crate::{
    GuidanceClient, GuidanceContext, GuidanceError, GuidanceRecord, GuidanceSource,
    fallback_guidance,
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [CompletionMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionResponseMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionResponseMessage {
    content: Option<String>,
}

/// Guidance client backed by the Groq API using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestGuidanceClient {
    base_url: String,
    api_key: Option<SecretString>,
    model: String,
    temperature: f32,
    max_tokens: u32,
    json_mode: bool,
    client: reqwest::Client,
}

impl ReqwestGuidanceClient {
    /// Create a new client instance.
    ///
    /// A `None` credential is accepted: every call then short-circuits to the
    /// fallback record without touching the network.
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "falling back to default reqwest client");
                reqwest::Client::new()
            });
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            json_mode: config.json_mode,
            client,
        }
    }

    /// Single attempt at getting a parsed record from the service.
    pub async fn request_guidance(
        &self,
        ctx: &GuidanceContext,
    ) -> Result<GuidanceRecord, GuidanceError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(GuidanceError::MissingCredential)?;

        let prompt = build_guidance_prompt(ctx);
        let body = CompletionRequest {
            model: &self.model,
            messages: [
                CompletionMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                CompletionMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            response_format: self.json_mode.then_some(ResponseFormat {
                kind: "json_object",
            }),
        };

        let url = format!("{}/chat/completions", self.base_url);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(GuidanceError::Status {
                status: status.as_u16(),
                body: text.chars().take(256).collect(),
            });
        }

        let payload: CompletionResponse = resp.json().await?;
        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(GuidanceError::EmptyResponse)?;

        parse_guidance(&content)
    }
}

/// Parse the first brace-delimited span of a completion into a record.
pub fn parse_guidance(text: &str) -> Result<GuidanceRecord, GuidanceError> {
    let span = extract_json_object(text).ok_or(GuidanceError::NoJsonObject)?;
    Ok(serde_json::from_str(span)?)
}

fn record_source(source: GuidanceSource) {
    metrics::counter!("guidance_generated_total", "source" => source.as_str()).increment(1);
}

#[async_trait]
impl GuidanceClient for ReqwestGuidanceClient {
    async fn generate(&self, ctx: &GuidanceContext) -> GuidanceRecord {
        match self.request_guidance(ctx).await {
            Ok(record) => {
                info!(model = %self.model, "AI guidance generated");
                record_source(GuidanceSource::Ai);
                record
            }
            Err(e) => {
                warn!(error = %e, "error generating AI guidance; using fallback guidance");
                record_source(GuidanceSource::Fallback);
                fallback_guidance()
            }
        }
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Measurement, fallback_guidance};

    fn ctx() -> GuidanceContext {
        GuidanceContext::assess(Measurement {
            age: 15,
            gender: "female".into(),
            height_cm: 165.0,
            weight_kg: 55.0,
        })
    }

    #[tokio::test]
    async fn missing_key_short_circuits() {
        let client = ReqwestGuidanceClient::new(&Config::default());
        assert!(!client.is_configured());
        let err = client.request_guidance(&ctx()).await.unwrap_err();
        assert!(matches!(err, GuidanceError::MissingCredential));
        assert_eq!(client.generate(&ctx()).await, fallback_guidance());
    }

    #[test]
    fn new_trims_trailing_slash() {
        let cfg = Config {
            base_url: "http://localhost/v1/".into(),
            ..Config::default()
        };
        let client = ReqwestGuidanceClient::new(&cfg);
        assert_eq!(client.base_url, "http://localhost/v1");
    }

    #[test]
    fn parse_guidance_tolerates_prose() {
        let json = serde_json::to_string(&fallback_guidance()).unwrap();
        let text = format!("Here you go!\n{json}\nLet me know if you need more.");
        assert_eq!(parse_guidance(&text).unwrap(), fallback_guidance());
    }

    #[test]
    fn parse_guidance_error_kinds() {
        assert!(matches!(
            parse_guidance("no json here"),
            Err(GuidanceError::NoJsonObject)
        ));
        assert!(matches!(
            parse_guidance("{not: valid}"),
            Err(GuidanceError::Parse(_))
        ));
        assert!(matches!(
            parse_guidance(r#"{"explanation": "only this"}"#),
            Err(GuidanceError::Parse(_))
        ));
    }

    #[test]
    fn request_body_shape() {
        let body = CompletionRequest {
            model: "m",
            messages: [
                CompletionMessage {
                    role: "system",
                    content: "s",
                },
                CompletionMessage {
                    role: "user",
                    content: "u",
                },
            ],
            temperature: 0.7,
            max_tokens: 2500,
            response_format: None,
        };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["messages"][0]["role"], "system");
        assert_eq!(v["messages"][1]["content"], "u");
        assert_eq!(v["max_tokens"], 2500);
        assert!(v.get("response_format").is_none());
    }
}
