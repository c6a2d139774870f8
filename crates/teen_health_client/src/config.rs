use crate::GuidanceError;
use secrecy::SecretString;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 2500;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Value shipped in templates that users are expected to replace.
const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

/// Key baked in at compile time, used when the environment has none.
const BUILD_TIME_API_KEY: Option<&str> = option_env!("GROQ_API_KEY");

#[derive(Clone, Debug)]
pub struct Config {
    /// `None` means guidance always comes from the fallback table.
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
    /// Ask the service for `response_format: json_object`.
    pub json_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            json_mode: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, GuidanceError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests and keeps
    /// `from_env()` small and safe.
    pub fn from_env_with<F>(get: F) -> Result<Self, GuidanceError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        Self::from_sources(get, BUILD_TIME_API_KEY)
    }

    /// Resolve configuration from a variable lookup plus the compiled-in key.
    /// The runtime `GROQ_API_KEY` wins over `compiled_key`.
    pub fn from_sources<F>(mut get: F, compiled_key: Option<&str>) -> Result<Self, GuidanceError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let api_key = get("GROQ_API_KEY")
            .or_else(|| compiled_key.map(str::to_owned))
            .filter(|k| usable_key(k))
            .map(|k| SecretString::new(k.into()));

        let base_url = get("GROQ_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let model = get("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into());
        let temperature =
            parse_or("GUIDANCE_TEMPERATURE", get("GUIDANCE_TEMPERATURE"), DEFAULT_TEMPERATURE)?;
        let max_tokens =
            parse_or("GUIDANCE_MAX_TOKENS", get("GUIDANCE_MAX_TOKENS"), DEFAULT_MAX_TOKENS)?;
        let timeout_secs = parse_or(
            "GUIDANCE_TIMEOUT_SECS",
            get("GUIDANCE_TIMEOUT_SECS"),
            DEFAULT_TIMEOUT_SECS,
        )?;
        let json_mode = get("GUIDANCE_JSON_MODE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            api_key,
            base_url,
            model,
            temperature,
            max_tokens,
            timeout: Duration::from_secs(timeout_secs),
            json_mode,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

fn usable_key(k: &str) -> bool {
    let k = k.trim();
    !k.is_empty() && k != PLACEHOLDER_API_KEY
}

fn parse_or<T: std::str::FromStr>(
    name: &str,
    raw: Option<String>,
    default: T,
) -> Result<T, GuidanceError> {
    match raw {
        None => Ok(default),
        Some(s) => s
            .trim()
            .parse()
            .map_err(|_| GuidanceError::Config(format!("{name} is not a valid number: {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn from_sources_uses_defaults() {
        let cfg = Config::from_sources(|_| None, None).expect("cfg");
        assert!(!cfg.has_api_key());
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.model, "llama-3.1-8b-instant");
        assert_eq!(cfg.temperature, 0.7);
        assert_eq!(cfg.max_tokens, 2500);
        assert_eq!(cfg.timeout, Duration::from_secs(30));
        assert!(!cfg.json_mode);
    }

    #[test]
    fn env_key_wins_over_compiled_key() {
        let get = |k: &str| match k {
            "GROQ_API_KEY" => Some("from-env".into()),
            _ => None,
        };
        let cfg = Config::from_sources(get, Some("compiled")).expect("cfg");
        assert_eq!(cfg.api_key.unwrap().expose_secret(), "from-env");
    }

    #[test]
    fn compiled_key_used_when_env_unset() {
        let cfg = Config::from_sources(|_| None, Some("compiled")).expect("cfg");
        assert_eq!(cfg.api_key.unwrap().expose_secret(), "compiled");
    }

    #[test]
    fn placeholder_and_blank_keys_count_as_missing() {
        let get = |k: &str| match k {
            "GROQ_API_KEY" => Some("your_api_key_here".into()),
            _ => None,
        };
        assert!(!Config::from_sources(get, None).unwrap().has_api_key());
        let blank = |k: &str| match k {
            "GROQ_API_KEY" => Some("   ".into()),
            _ => None,
        };
        assert!(!Config::from_sources(blank, None).unwrap().has_api_key());
    }

    #[test]
    fn from_env_reads_overrides() {
        let get = |k: &str| match k {
            "GROQ_BASE_URL" => Some("http://localhost:9999".into()),
            "GROQ_MODEL" => Some("llama-3.3-70b-versatile".into()),
            "GUIDANCE_TEMPERATURE" => Some("0.2".into()),
            "GUIDANCE_MAX_TOKENS" => Some("800".into()),
            "GUIDANCE_TIMEOUT_SECS" => Some("5".into()),
            "GUIDANCE_JSON_MODE" => Some("true".into()),
            _ => None,
        };
        let cfg = Config::from_sources(get, None).expect("cfg");
        assert_eq!(cfg.base_url, "http://localhost:9999");
        assert_eq!(cfg.model, "llama-3.3-70b-versatile");
        assert_eq!(cfg.temperature, 0.2);
        assert_eq!(cfg.max_tokens, 800);
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert!(cfg.json_mode);
    }

    #[test]
    fn malformed_number_is_a_config_error() {
        let get = |k: &str| match k {
            "GUIDANCE_MAX_TOKENS" => Some("lots".into()),
            _ => None,
        };
        let err = Config::from_sources(get, None).unwrap_err();
        assert!(matches!(err, GuidanceError::Config(_)));
    }
}
