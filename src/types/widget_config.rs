use serde::Deserialize;
use validator::Validate;

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Host-facing configuration for one widget instance.
///
/// `autocomplete_identifier` namespaces the output keys so a page embedding
/// several widgets can tell their fields apart; it is required and checked at
/// construction, never deferred to query time.
#[derive(Clone, Debug, Validate, Deserialize)]
pub struct WidgetConfig {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub autocomplete_identifier: String,

    /// Optional ISO country code restricting predictions.
    pub country: Option<String>,

    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl WidgetConfig {
    pub fn new(autocomplete_identifier: &str) -> Self {
        WidgetConfig {
            autocomplete_identifier: autocomplete_identifier.to_string(),
            country: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::Invalid(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<validator::ValidationErrors> for ConfigError {
    fn from(e: validator::ValidationErrors) -> Self {
        ConfigError::Invalid(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty_identifier() {
        let config = WidgetConfig::new("billing");
        assert!(config.validate().is_ok());
        assert_eq!(config.debounce_ms, 300);
    }

    #[test]
    fn rejects_empty_identifier() {
        let config = WidgetConfig::new("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn debounce_defaults_when_omitted_from_json() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{"autocomplete_identifier":"shipping","country":"gb"}"#)
                .unwrap();
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.country.as_deref(), Some("gb"));
    }
}
