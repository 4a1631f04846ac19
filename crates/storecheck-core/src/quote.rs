//! Workflow state for a selected product as it moves toward checkout.
//!
//! The scan produces a [`Selection`]; applying a quantity produces a
//! [`CartQuote`]; applying the flat shipping surcharge produces a
//! [`CheckoutQuote`]. Each step returns a new value instead of mutating
//! shared state, so every stage of the workflow can be inspected after the
//! fact.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// The product chosen by the catalog scan: the cheapest in-stock entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Display name, or a positional `"Product {N}"` placeholder when the
    /// listing carried no label text.
    pub name: String,
    /// Unit price at cent precision.
    pub price: Money,
    /// Target of the product link, when the listing entry carried one.
    pub link: Option<String>,
}

impl Selection {
    /// Derives the expected cart line for `quantity` units of this product.
    #[must_use]
    pub fn quote(&self, quantity: u32) -> CartQuote {
        CartQuote {
            selection: self.clone(),
            quantity,
            subtotal: self.price.mul_quantity(quantity),
        }
    }
}

/// A cart line: the selection at a given quantity with its derived subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartQuote {
    pub selection: Selection,
    pub quantity: u32,
    pub subtotal: Money,
}

impl CartQuote {
    /// Applies the flat shipping surcharge to produce the final total the
    /// checkout page is expected to display.
    #[must_use]
    pub fn with_shipping(&self, shipping: Money) -> CheckoutQuote {
        CheckoutQuote {
            quote: self.clone(),
            shipping,
            total: self.subtotal + shipping,
        }
    }
}

/// The order total after the flat shipping surcharge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutQuote {
    pub quote: CartQuote,
    pub shipping: Money,
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(price: &str) -> Selection {
        Selection {
            name: "Dakar Deluxe Gift Set".to_owned(),
            price: Money::parse(price).expect("valid price"),
            link: Some("index.php?rt=product/product&product_id=68".to_owned()),
        }
    }

    #[test]
    fn quote_multiplies_unit_price_by_quantity() {
        let quote = selection("$24.99").quote(2);
        assert_eq!(quote.quantity, 2);
        assert_eq!(quote.subtotal.to_string(), "$49.98");
    }

    #[test]
    fn quote_for_single_unit_equals_unit_price() {
        let quote = selection("$24.99").quote(1);
        assert_eq!(quote.subtotal, quote.selection.price);
    }

    #[test]
    fn with_shipping_adds_flat_surcharge() {
        let shipping = Money::parse("2.00").unwrap();
        let checkout = selection("$24.99").quote(2).with_shipping(shipping);
        assert_eq!(checkout.total.to_string(), "$51.98");
        assert_eq!(checkout.shipping.to_string(), "$2.00");
    }

    #[test]
    fn steps_do_not_mutate_earlier_state() {
        let sel = selection("$24.99");
        let quote = sel.quote(2);
        let _checkout = quote.with_shipping(Money::parse("2.00").unwrap());
        assert_eq!(sel.price.to_string(), "$24.99");
        assert_eq!(quote.subtotal.to_string(), "$49.98");
    }

    #[test]
    fn serde_roundtrip_checkout_quote() {
        let checkout = selection("$9.99")
            .quote(3)
            .with_shipping(Money::parse("2.00").unwrap());
        let json = serde_json::to_string(&checkout).expect("serialization failed");
        let decoded: CheckoutQuote = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded, checkout);
        assert_eq!(decoded.total.to_string(), "$31.97");
    }
}
