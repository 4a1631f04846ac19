//! Raw listing-entry shape handed over by an acquisition adapter.
//!
//! ## Observed shape from the live category pages (automationteststore.com)
//!
//! Each product cell carries an anchor with the product name, an `href` to
//! the detail page, and surrounding text that mixes the name, the price
//! (`"$24.99"`) and an optional `"Out of Stock"` badge into one block.
//! Nothing is guaranteed: anchors can be empty, hrefs can be missing on
//! malformed markup, and the price may be absent or replaced by free text
//! (`"Price on request"`). The scan treats every irregularity as a soft
//! skip, so this type performs no validation of its own.

/// One product cell from a category listing, as captured by an adapter
/// (HTML parsing, a browser snapshot, or a test fixture).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Visible text of the product link. May be empty; the scan substitutes
    /// a positional `"Product {N}"` placeholder for the winner if so.
    pub label: String,

    /// Target of the product link, when present in the markup.
    pub href: Option<String>,

    /// Full text of the enclosing listing cell: name, price and stock badge
    /// run together. Used only for extraction, never retained.
    pub container_text: String,
}

impl RawEntry {
    /// Convenience constructor for adapters and tests.
    #[must_use]
    pub fn new(label: impl Into<String>, href: Option<String>, container_text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href,
            container_text: container_text.into(),
        }
    }
}
