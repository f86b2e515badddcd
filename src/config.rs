use std::time::Duration;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OpenRouter API key, sent as a bearer token
    pub openrouter_api_key: String,

    /// Chat-completion endpoint
    #[serde(default = "default_openrouter_api_url")]
    pub openrouter_api_url: String,

    /// Model identifier sent with every completion request
    #[serde(default = "default_openrouter_model")]
    pub openrouter_model: String,

    /// Upper bound on a single upstream call, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Serve an offline pick when the upstream body cannot be decoded,
    /// instead of reporting the error
    #[serde(default)]
    pub degrade_on_malformed: bool,

    /// Seed for the offline fallback picker; OS entropy when unset
    #[serde(default)]
    pub fallback_seed: Option<u64>,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_openrouter_api_url() -> String {
    "https://openrouter.ai/api/v1/chat/completions".to_string()
}

fn default_openrouter_model() -> String {
    "meta-llama/llama-3.3-70b-instruct:free".to_string()
}

fn default_request_timeout_secs() -> u64 {
    20
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let vars = vec![("OPENROUTER_API_KEY".to_string(), "sk-test".to_string())];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.openrouter_api_key, "sk-test");
        assert_eq!(
            config.openrouter_api_url,
            "https://openrouter.ai/api/v1/chat/completions"
        );
        assert_eq!(config.openrouter_model, "meta-llama/llama-3.3-70b-instruct:free");
        assert_eq!(config.request_timeout(), Duration::from_secs(20));
        assert!(!config.degrade_on_malformed);
        assert_eq!(config.fallback_seed, None);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_overrides() {
        let vars = vec![
            ("OPENROUTER_API_KEY".to_string(), "sk-test".to_string()),
            ("REQUEST_TIMEOUT_SECS".to_string(), "5".to_string()),
            ("DEGRADE_ON_MALFORMED".to_string(), "true".to_string()),
            ("FALLBACK_SEED".to_string(), "42".to_string()),
            ("PORT".to_string(), "8080".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert!(config.degrade_on_malformed);
        assert_eq!(config.fallback_seed, Some(42));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_missing_api_key_rejected() {
        let vars: Vec<(String, String)> = vec![];
        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }
}
