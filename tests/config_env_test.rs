//! WidgetConfig resolution from the environment.

use chat_widget::config::{
    ConfigOverrides, WidgetConfig, DEFAULT_MODEL, ENV_MODEL, ENV_TOKEN, ENV_URL,
};
use chat_widget::error::ConfigError;
use serial_test::serial;

fn clear_env() {
    for name in [ENV_URL, ENV_MODEL, ENV_TOKEN] {
        std::env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_env_overrides_query_string() {
    clear_env();
    std::env::set_var(ENV_URL, "http://env.example/v1/chat/completions");

    let overrides = ConfigOverrides {
        query_string: Some("url=http%3A%2F%2Fquery.example&token=qs".to_string()),
        ..Default::default()
    };
    let config = WidgetConfig::resolve(&overrides).unwrap();
    clear_env();

    assert_eq!(config.url, "http://env.example/v1/chat/completions");
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.require_token(), Ok("qs"));
}

#[test]
#[serial]
fn test_flags_override_env() {
    clear_env();
    std::env::set_var(ENV_TOKEN, "from-env");

    let overrides = ConfigOverrides {
        token: Some("from-flag".to_string()),
        model: Some("gpt-4".to_string()),
        ..Default::default()
    };
    let config = WidgetConfig::resolve(&overrides).unwrap();
    clear_env();

    assert_eq!(config.bearer_token.as_deref(), Some("from-flag"));
    assert_eq!(config.model, "gpt-4");
}

#[test]
#[serial]
fn test_missing_token() {
    clear_env();
    let config = WidgetConfig::resolve(&ConfigOverrides::default()).unwrap();
    assert_eq!(config.require_token(), Err(ConfigError::MissingToken));
    assert_eq!(
        ConfigError::MissingToken.to_string(),
        "please include a token via --token, CHAT_WIDGET_TOKEN or ?token=XXX"
    );
}
