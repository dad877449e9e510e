//! Widget configuration.
//!
//! Values are resolved in layers, later layers winning:
//!
//! 1. built-in defaults
//! 2. a host query string (`?url=...&model=...&token=...`)
//! 3. `CHAT_WIDGET_URL`, `CHAT_WIDGET_MODEL`, `CHAT_WIDGET_TOKEN`
//! 4. command line flags
//!
//! Empty values never override an earlier layer.

use crate::error::ConfigError;
use crate::models::StreamRequest;

pub const DEFAULT_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_PLACEHOLDER: &str = "Ask a question...";
pub const DEFAULT_TITLE: &str = "Powered By Helix";

pub const ENV_URL: &str = "CHAT_WIDGET_URL";
pub const ENV_MODEL: &str = "CHAT_WIDGET_MODEL";
pub const ENV_TOKEN: &str = "CHAT_WIDGET_TOKEN";

/// Fully resolved widget configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub url: String,
    pub model: String,
    pub bearer_token: Option<String>,
    pub placeholder: String,
    pub title: String,
}

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub query_string: Option<String>,
    pub url: Option<String>,
    pub model: Option<String>,
    pub token: Option<String>,
    pub placeholder: Option<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            bearer_token: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl std::fmt::Debug for WidgetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetConfig")
            .field("url", &self.url)
            .field("model", &self.model)
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "<redacted>"))
            .field("placeholder", &self.placeholder)
            .field("title", &self.title)
            .finish()
    }
}

fn set_if_present(slot: &mut String, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *slot = value.to_string();
    }
}

fn set_token_if_present(slot: &mut Option<String>, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *slot = Some(value.to_string());
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

impl WidgetConfig {
    /// Resolve all layers in order.
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(query) = overrides.query_string.as_deref() {
            config.apply_query_string(query)?;
        }
        config.apply_env();
        config.apply_overrides(overrides);
        tracing::debug!("Resolved config: {:?}", config);
        Ok(config)
    }

    /// Apply `url`, `model` and `token` from a query string.
    ///
    /// A leading `?` is optional. Unknown keys are ignored; values are
    /// percent-decoded, with `+` read as a space.
    pub fn apply_query_string(&mut self, query: &str) -> Result<(), ConfigError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let spaced = raw.replace('+', " ");
            let value = urlencoding::decode(&spaced).map_err(|e| ConfigError::InvalidQueryString {
                key: key.to_string(),
                message: e.to_string(),
            })?;
            match key {
                "url" => set_if_present(&mut self.url, Some(&value)),
                "model" => set_if_present(&mut self.model, Some(&value)),
                "token" => set_token_if_present(&mut self.bearer_token, Some(&value)),
                _ => tracing::debug!("Ignoring query parameter {}", key),
            }
        }
        Ok(())
    }

    pub fn apply_env(&mut self) {
        set_if_present(&mut self.url, env_var(ENV_URL).as_deref());
        set_if_present(&mut self.model, env_var(ENV_MODEL).as_deref());
        set_token_if_present(&mut self.bearer_token, env_var(ENV_TOKEN).as_deref());
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        set_if_present(&mut self.url, overrides.url.as_deref());
        set_if_present(&mut self.model, overrides.model.as_deref());
        set_token_if_present(&mut self.bearer_token, overrides.token.as_deref());
        set_if_present(&mut self.placeholder, overrides.placeholder.as_deref());
    }

    /// The bearer token, or [`ConfigError::MissingToken`].
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        self.bearer_token.as_deref().ok_or(ConfigError::MissingToken)
    }

    /// Build the request for one query.
    pub fn request(&self, query: &str) -> StreamRequest {
        StreamRequest::new(&self.url, &self.model, query)
            .with_bearer_token(self.bearer_token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(ENV_URL);
        std::env::remove_var(ENV_MODEL);
        std::env::remove_var(ENV_TOKEN);
    }

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.url, "https://api.openai.com/v1/chat/completions");
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.bearer_token, None);
        assert_eq!(config.placeholder, "Ask a question...");
        assert_eq!(config.title, "Powered By Helix");
    }

    #[test]
    fn test_query_string_is_percent_decoded() {
        let mut config = WidgetConfig::default();
        config
            .apply_query_string("?url=http%3A%2F%2Flocalhost%3A8080%2Fv1&model=my+model&token=abc")
            .unwrap();
        assert_eq!(config.url, "http://localhost:8080/v1");
        assert_eq!(config.model, "my model");
        assert_eq!(config.bearer_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_query_string_empty_values_do_not_override() {
        let mut config = WidgetConfig::default();
        config.apply_query_string("url=&token=&theme=dark").unwrap();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.bearer_token, None);
    }

    #[test]
    fn test_query_string_invalid_utf8() {
        let mut config = WidgetConfig::default();
        let err = config.apply_query_string("token=%FF%FE").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidQueryString { ref key, .. } if key == "token"));
    }

    #[test]
    #[serial]
    fn test_layers_later_wins() {
        clear_env();
        std::env::set_var(ENV_MODEL, "env-model");
        std::env::set_var(ENV_TOKEN, "env-token");

        let overrides = ConfigOverrides {
            query_string: Some("?url=http://query&model=query-model&token=query-token".to_string()),
            token: Some("flag-token".to_string()),
            placeholder: Some("Search docs".to_string()),
            ..Default::default()
        };
        let config = WidgetConfig::resolve(&overrides).unwrap();
        clear_env();

        assert_eq!(config.url, "http://query");
        assert_eq!(config.model, "env-model");
        assert_eq!(config.bearer_token.as_deref(), Some("flag-token"));
        assert_eq!(config.placeholder, "Search docs");
    }

    #[test]
    #[serial]
    fn test_empty_env_does_not_override() {
        clear_env();
        std::env::set_var(ENV_URL, "");

        let config = WidgetConfig::resolve(&ConfigOverrides::default()).unwrap();
        clear_env();

        assert_eq!(config.url, DEFAULT_URL);
        assert!(matches!(config.require_token(), Err(ConfigError::MissingToken)));
    }

    #[test]
    fn test_request_carries_token() {
        let config = WidgetConfig {
            bearer_token: Some("secret".to_string()),
            ..Default::default()
        };
        let request = config.request("hello");
        assert_eq!(request.url, DEFAULT_URL);
        assert_eq!(
            request.headers().get("Authorization"),
            Some(&"Bearer secret".to_string())
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = WidgetConfig {
            bearer_token: Some("secret".to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
