use prayer_night_bot::config::{Config, DEFAULT_PRAYER_API_BASE_URL};
use std::env;
use std::sync::Mutex;
use std::time::Duration;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

const OPTIONAL_VARS: [&str; 4] = [
    "HTTP_PORT",
    "PRAYER_API_BASE_URL",
    "PRAYER_CALCULATION_METHOD",
    "PRAYER_API_TIMEOUT_SECS",
];

fn clear_env() {
    env::remove_var("TELEGRAM_BOT_TOKEN");
    for var in OPTIONAL_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("HTTP_PORT", "8080");
    env::set_var("PRAYER_API_BASE_URL", "https://prayer.example/v1/");
    env::set_var("PRAYER_CALCULATION_METHOD", "4");
    env::set_var("PRAYER_API_TIMEOUT_SECS", "3");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.prayer_api_base_url, "https://prayer.example/v1");
    assert_eq!(config.calculation_method, 4);
    assert_eq!(config.request_timeout, Duration::from_secs(3));

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "required_token");
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.prayer_api_base_url, DEFAULT_PRAYER_API_BASE_URL);
    assert_eq!(config.calculation_method, 5);
    assert_eq!(config.request_timeout, Duration::from_secs(10));

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));
}

#[test]
fn test_config_blank_token_rejected() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "");
    assert!(Config::from_env().is_err());

    env::set_var("TELEGRAM_BOT_TOKEN", "   ");
    assert!(Config::from_env().is_err());

    clear_env();
}

#[test]
fn test_config_invalid_numbers() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

    env::set_var("HTTP_PORT", "invalid_port");
    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("Invalid HTTP_PORT"));
    env::remove_var("HTTP_PORT");

    env::set_var("PRAYER_CALCULATION_METHOD", "egyptian");
    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("Invalid PRAYER_CALCULATION_METHOD"));
    env::remove_var("PRAYER_CALCULATION_METHOD");

    env::set_var("PRAYER_API_TIMEOUT_SECS", "-5");
    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("Invalid PRAYER_API_TIMEOUT_SECS"));

    env::set_var("PRAYER_API_TIMEOUT_SECS", "0");
    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("greater than zero"));

    clear_env();
}

#[test]
fn test_config_whitespace_handling() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "  token_with_spaces  ");
    env::set_var("HTTP_PORT", "  3000  ");
    env::set_var("PRAYER_API_BASE_URL", "   ");
    env::set_var("PRAYER_CALCULATION_METHOD", " 3 ");

    let config = Config::from_env().unwrap();

    // The token is passed through untouched
    assert_eq!(config.telegram_bot_token, "  token_with_spaces  ");
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.prayer_api_base_url, DEFAULT_PRAYER_API_BASE_URL);
    assert_eq!(config.calculation_method, 3);

    clear_env();
}
