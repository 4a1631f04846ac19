//! Reconciliation of derived totals against rendered page text.
//!
//! The cart and checkout pages are verified the way the original workflow
//! does it: the expected amount, formatted exactly as the storefront formats
//! prices, must appear somewhere in the page's text. Arithmetic lives in
//! [`storecheck_core`]; this module only checks presence.

use storecheck_core::{CartQuote, CheckoutQuote, Money};

use crate::error::ScanError;

/// Returns `true` when the formatted amount appears anywhere in the page
/// text.
#[must_use]
pub fn page_lists_amount(page_text: &str, amount: Money) -> bool {
    page_text.contains(&amount.to_string())
}

/// Verifies the cart page shows the expected subtotal for the quoted
/// quantity.
///
/// # Errors
///
/// Returns [`ScanError::AmountMissing`] when the formatted subtotal is not
/// present.
pub fn verify_cart_pricing(page_text: &str, quote: &CartQuote) -> Result<(), ScanError> {
    require_amount(page_text, quote.subtotal)
}

/// Verifies the checkout summary shows both the flat shipping amount and
/// the final total.
///
/// # Errors
///
/// Returns [`ScanError::AmountMissing`] naming the first absent amount.
pub fn verify_checkout_total(page_text: &str, checkout: &CheckoutQuote) -> Result<(), ScanError> {
    require_amount(page_text, checkout.shipping)?;
    require_amount(page_text, checkout.total)
}

fn require_amount(page_text: &str, amount: Money) -> Result<(), ScanError> {
    if page_lists_amount(page_text, amount) {
        Ok(())
    } else {
        Err(ScanError::AmountMissing {
            expected: amount.to_string(),
        })
    }
}
