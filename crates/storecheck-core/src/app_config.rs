use crate::money::Money;

/// Runtime configuration for a storecheck run, sourced from `STORECHECK_*`
/// environment variables. Every field has a default; see [`crate::config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Category listing page to scan for the cheapest in-stock product.
    pub category_url: String,
    /// `User-Agent` sent with category page requests.
    pub user_agent: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Retry attempts after the first failure for transient HTTP errors.
    pub max_retries: u32,
    /// Base delay in seconds for exponential backoff: `base * 2^attempt`.
    pub retry_backoff_base_secs: u64,
    /// Flat, quantity-independent shipping surcharge.
    pub flat_shipping: Money,
    /// Quantity the purchase workflow updates the cart to.
    pub default_quantity: u32,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}
