use crate::app_config::AppConfig;
use crate::money::Money;
use crate::ConfigError;

/// Category page exercised by the original purchase workflow: Men's
/// Fragrance Sets on the automation test store.
const DEFAULT_CATEGORY_URL: &str =
    "https://automationteststore.com/index.php?rt=product/category&path=58_59";

const DEFAULT_USER_AGENT: &str = concat!("storecheck/", env!("CARGO_PKG_VERSION"));

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any `STORECHECK_*` value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if any `STORECHECK_*` value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_money = |var: &str, default: &str| -> Result<Money, ConfigError> {
        let raw = or_default(var, default);
        Money::parse(&raw).map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    Ok(AppConfig {
        category_url: or_default("STORECHECK_CATEGORY_URL", DEFAULT_CATEGORY_URL),
        user_agent: or_default("STORECHECK_USER_AGENT", DEFAULT_USER_AGENT),
        request_timeout_secs: parse_u64("STORECHECK_REQUEST_TIMEOUT_SECS", "30")?,
        max_retries: parse_u32("STORECHECK_MAX_RETRIES", "3")?,
        retry_backoff_base_secs: parse_u64("STORECHECK_RETRY_BACKOFF_BASE_SECS", "1")?,
        flat_shipping: parse_money("STORECHECK_FLAT_SHIPPING", "2.00")?,
        default_quantity: parse_u32("STORECHECK_DEFAULT_QUANTITY", "2")?,
        log_level: or_default("STORECHECK_LOG_LEVEL", "info"),
    })
}
