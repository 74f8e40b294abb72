//! Environment-driven configuration.
//!
//! Missing credentials degrade functionality (the affected collaborator is
//! skipped and the fallback answers instead) — they never prevent startup.

use std::env;

/// Application-level constants
pub const APP_NAME: &str = "Swasthya Health Assistant Backend";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MedlinePlus health topics API.
pub const DEFAULT_HEALTH_API_BASE_URL: &str = "https://api.nlm.nih.gov/medlineplus/v2/";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info"
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Credential for the answer-generation collaborator. Absent ⇒ every
    /// query is answered by the fallback responder.
    pub openai_api_key: Option<String>,
    /// Credential for the reference-data collaborator. Absent ⇒ the
    /// MedlinePlus lookup is disabled.
    pub health_api_key: Option<String>,
    pub health_api_base_url: String,
    /// CORS origin allow-list. `["*"]` means any origin.
    pub allowed_origins: Vec<String>,
    pub bind_addr: String,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        let openai_api_key = non_empty_var("OPENAI_API_KEY");
        if openai_api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY not found. AI responses will use fallback system.");
        }

        let health_api_key = non_empty_var("HEALTH_API_KEY");
        if health_api_key.is_none() {
            tracing::warn!("HEALTH_API_KEY not found. External health APIs will be disabled.");
        }

        Self {
            openai_api_key,
            health_api_key,
            health_api_base_url: non_empty_var("HEALTH_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_HEALTH_API_BASE_URL.to_string()),
            allowed_origins: parse_origins(
                &non_empty_var("ALLOWED_ORIGINS").unwrap_or_else(|| "*".to_string()),
            ),
            bind_addr: non_empty_var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Split a comma-separated origin list, dropping empty segments.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_origins_splits_and_trims() {
        let origins = parse_origins("https://a.example, https://b.example ,https://c.example");
        assert_eq!(
            origins,
            vec![
                "https://a.example".to_string(),
                "https://b.example".to_string(),
                "https://c.example".to_string(),
            ]
        );
    }

    #[test]
    fn parse_origins_wildcard() {
        assert_eq!(parse_origins("*"), vec!["*".to_string()]);
    }

    #[test]
    fn parse_origins_drops_empty_segments() {
        assert_eq!(parse_origins("https://a.example,,"), vec!["https://a.example".to_string()]);
    }

    #[test]
    fn default_base_url_points_at_medlineplus() {
        assert!(DEFAULT_HEALTH_API_BASE_URL.contains("medlineplus"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
