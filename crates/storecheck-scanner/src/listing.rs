//! HTML adapter: category page markup → [`RawEntry`] snapshot.
//!
//! The storefront renders each product as an `a.prdocutname` anchor (the
//! class name is the storefront's own typo) inside a listing cell that also
//! holds the price and the stock badge. This module only acquires raw text
//! per entry; deciding availability, parsing prices and picking the minimum
//! is [`crate::scan`]'s job.

use scraper::{ElementRef, Html, Selector};

use crate::types::RawEntry;

/// Class names that mark the enclosing listing cell in the storefront's
/// grid and list layouts.
const CONTAINER_CLASSES: [&str; 2] = ["thumbnail", "fixed_wrapper"];

/// Extracts one [`RawEntry`] per product anchor, in document order.
///
/// For each anchor the enclosing cell is the nearest ancestor carrying a
/// known container class, falling back to the grandparent element and, for
/// a detached anchor, to the anchor itself. Malformed cells are not
/// validated here; they simply yield entries the scan will skip.
#[must_use]
pub fn extract_entries(html: &str) -> Vec<RawEntry> {
    let document = Html::parse_document(html);
    let anchors = Selector::parse("a.prdocutname").expect("valid selector");

    document
        .select(&anchors)
        .map(|anchor| {
            let label = collapse_whitespace(&anchor.text().collect::<String>());
            let href = anchor.value().attr("href").map(ToOwned::to_owned);
            let container_text = container_for(anchor).map_or_else(
                || label.clone(),
                |cell| collapse_whitespace(&cell.text().collect::<String>()),
            );
            RawEntry {
                label,
                href,
                container_text,
            }
        })
        .collect()
}

/// Nearest ancestor element with a container class, else the grandparent.
fn container_for(anchor: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let mut grandparent = None;
    for (hops, element) in anchor.ancestors().filter_map(ElementRef::wrap).enumerate() {
        if has_container_class(element) {
            return Some(element);
        }
        if hops == 1 {
            grandparent = Some(element);
        }
    }
    grandparent
}

fn has_container_class(element: ElementRef<'_>) -> bool {
    element
        .value()
        .classes()
        .any(|class| CONTAINER_CLASSES.contains(&class))
}

/// Rendered text comes through with layout whitespace; fold every run of
/// whitespace into a single space so substring checks behave like a
/// person reading the page.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <div class="row">
          <div class="col-md-3">
            <div class="thumbnail">
              <a class="prdocutname" href="index.php?rt=product/product&product_id=68">
                Dakar
                Deluxe Gift Set
              </a>
              <div class="price">$24.99</div>
            </div>
          </div>
          <div class="col-md-3">
            <div class="fixed_wrapper">
              <a class="prdocutname" href="index.php?rt=product/product&product_id=69">Eau de Parfum</a>
              <div class="price">$31.50</div>
              <span class="badge">Out of Stock</span>
            </div>
          </div>
        </div>
    "#;

    #[test]
    fn extracts_one_entry_per_anchor_in_document_order() {
        let entries = extract_entries(LISTING);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "Dakar Deluxe Gift Set");
        assert_eq!(entries[1].label, "Eau de Parfum");
    }

    #[test]
    fn container_text_joins_name_price_and_badge() {
        let entries = extract_entries(LISTING);
        assert_eq!(entries[0].container_text, "Dakar Deluxe Gift Set $24.99");
        assert_eq!(
            entries[1].container_text,
            "Eau de Parfum $31.50 Out of Stock"
        );
    }

    #[test]
    fn hrefs_are_preserved() {
        let entries = extract_entries(LISTING);
        assert_eq!(
            entries[0].href.as_deref(),
            Some("index.php?rt=product/product&product_id=68")
        );
    }

    #[test]
    fn label_whitespace_is_collapsed() {
        let entries = extract_entries(LISTING);
        assert_eq!(entries[0].label, "Dakar Deluxe Gift Set");
    }

    #[test]
    fn missing_href_yields_none() {
        let html = r#"<div class="thumbnail"><a class="prdocutname">Orphan</a> $5.00</div>"#;
        let entries = extract_entries(html);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].href.is_none());
        assert_eq!(entries[0].container_text, "Orphan $5.00");
    }

    #[test]
    fn falls_back_to_grandparent_without_container_class() {
        let html = r#"
            <div>
              <span>Budget Set $3.25</span>
              <p><a class="prdocutname" href="p">Budget Set</a></p>
            </div>
        "#;
        let entries = extract_entries(html);
        assert_eq!(entries.len(), 1);
        // Grandparent <div> text includes the sibling price span.
        assert_eq!(entries[0].container_text, "Budget Set $3.25 Budget Set");
    }

    #[test]
    fn anchors_outside_any_listing_cell_still_yield_entries() {
        let html = r#"<a class="prdocutname" href="p">Lone Product</a>"#;
        let entries = extract_entries(html);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Lone Product");
    }

    #[test]
    fn unrelated_anchors_are_ignored() {
        let html = r#"
            <a href="cart">Cart</a>
            <div class="thumbnail"><a class="prdocutname" href="p">Real Product</a> $7.00</div>
        "#;
        let entries = extract_entries(html);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Real Product");
    }

    #[test]
    fn empty_document_yields_no_entries() {
        assert!(extract_entries("").is_empty());
    }
}
