use std::env;
use std::str::FromStr;

use super::models::EngineMode;

pub const DEFAULT_INFERENCE_BASE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_SUMMARIZER_MODEL: &str = "sshleifer/distilbart-cnn-12-6";
pub const DEFAULT_GENERATOR_MODEL: &str = "google/flan-t5-small";
pub const DEFAULT_MAX_INPUT_CHARS: usize = 4000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub hf_token: Option<String>,
    pub inference_base_url: String,
    pub summarizer_model: String,
    pub generator_model: String,
    pub max_input_chars: usize,
    pub default_mode: EngineMode,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hf_token: None,
            inference_base_url: DEFAULT_INFERENCE_BASE_URL.to_string(),
            summarizer_model: DEFAULT_SUMMARIZER_MODEL.to_string(),
            generator_model: DEFAULT_GENERATOR_MODEL.to_string(),
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            default_mode: EngineMode::Fast,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let max_input_chars = parse_positive(get("BRIEF_MAX_INPUT_CHARS"), "BRIEF_MAX_INPUT_CHARS")?
            .unwrap_or(defaults.max_input_chars);
        let request_timeout_secs =
            parse_positive(get("BRIEF_REQUEST_TIMEOUT_SECS"), "BRIEF_REQUEST_TIMEOUT_SECS")?
                .unwrap_or(defaults.request_timeout_secs);
        let default_mode = match get("BRIEF_DEFAULT_MODE") {
            Some(raw) => {
                EngineMode::from_str(&raw).map_err(|e| format!("BRIEF_DEFAULT_MODE: {}", e))?
            }
            None => defaults.default_mode,
        };

        Ok(Self {
            hf_token: get("HF_TOKEN"),
            inference_base_url: get("BRIEF_INFERENCE_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.inference_base_url),
            summarizer_model: get("BRIEF_SUMMARIZER_MODEL").unwrap_or(defaults.summarizer_model),
            generator_model: get("BRIEF_GENERATOR_MODEL").unwrap_or(defaults.generator_model),
            max_input_chars,
            default_mode,
            request_timeout_secs,
        })
    }
}

fn parse_positive<T>(raw: Option<String>, key: &str) -> Result<Option<T>, String>
where
    T: FromStr + PartialOrd + Default,
    T::Err: std::fmt::Display,
{
    let Some(raw) = raw else {
        return Ok(None);
    };
    let value: T = raw
        .trim()
        .parse()
        .map_err(|e| format!("{}: {}", key, e))?;
    if value <= T::default() {
        return Err(format!("{}: must be greater than zero", key));
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from(&[]).unwrap();
        assert!(config.hf_token.is_none());
        assert_eq!(config.inference_base_url, DEFAULT_INFERENCE_BASE_URL);
        assert_eq!(config.max_input_chars, DEFAULT_MAX_INPUT_CHARS);
        assert_eq!(config.default_mode, EngineMode::Fast);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("HF_TOKEN", "hf_abc"),
            ("BRIEF_INFERENCE_BASE_URL", "http://localhost:9000/models/"),
            ("BRIEF_MAX_INPUT_CHARS", "120"),
            ("BRIEF_DEFAULT_MODE", "summarization-only"),
            ("BRIEF_GENERATOR_MODEL", "google/flan-t5-base"),
        ])
        .unwrap();
        assert_eq!(config.hf_token.as_deref(), Some("hf_abc"));
        assert_eq!(config.inference_base_url, "http://localhost:9000/models");
        assert_eq!(config.max_input_chars, 120);
        assert_eq!(config.default_mode, EngineMode::SummarizationOnly);
        assert_eq!(config.generator_model, "google/flan-t5-base");
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let config = config_from(&[("HF_TOKEN", "   ")]).unwrap();
        assert!(config.hf_token.is_none());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = config_from(&[("BRIEF_MAX_INPUT_CHARS", "0")]).unwrap_err();
        assert!(err.contains("BRIEF_MAX_INPUT_CHARS"));

        let err = config_from(&[("BRIEF_MAX_INPUT_CHARS", "lots")]).unwrap_err();
        assert!(err.contains("BRIEF_MAX_INPUT_CHARS"));

        let err = config_from(&[("BRIEF_DEFAULT_MODE", "turbo")]).unwrap_err();
        assert!(err.contains("BRIEF_DEFAULT_MODE"));
    }
}
