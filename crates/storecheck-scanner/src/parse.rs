//! Price and availability extraction from listing-cell text.
//!
//! Listing cells render the price somewhere inside a free-form text block,
//! so extraction is pattern-based and best-effort: no match means the entry
//! is skipped by the scan, never an error. See [`crate::scan`] for how these
//! compose into the cheapest-product selection.

use std::sync::OnceLock;

use regex::Regex;

use storecheck_core::Money;

/// First `$`-anchored amount in the text: one or more digits, optionally a
/// decimal point and more digits. `"$24.99"`, `"$5"` and the degenerate
/// `"$25."` all match; a bare `$` does not.
fn price_regex() -> &'static Regex {
    static PRICE_RE: OnceLock<Regex> = OnceLock::new();
    PRICE_RE.get_or_init(|| Regex::new(r"\$(\d+\.?\d*)").expect("valid regex"))
}

/// Extracts the first price from a listing cell's text.
///
/// Returns `None` when no currency pattern matches; the candidate is then
/// skipped entirely rather than reported.
#[must_use]
pub fn extract_price(text: &str) -> Option<Money> {
    let captures = price_regex().captures(text)?;
    Money::parse(&captures[1]).ok()
}

/// Returns `true` when the cell text carries the out-of-stock marker,
/// matched case-insensitively anywhere in the block.
#[must_use]
pub fn is_out_of_stock(text: &str) -> bool {
    text.to_lowercase().contains("out of stock")
}
