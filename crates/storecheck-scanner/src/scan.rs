//! Cheapest in-stock product selection over a listing snapshot.

use storecheck_core::Selection;

use crate::error::ScanError;
use crate::parse::{extract_price, is_out_of_stock};
use crate::types::RawEntry;

/// Selects the cheapest in-stock, price-bearing entry from a listing
/// snapshot.
///
/// Single pass in document order. Out-of-stock entries and entries whose
/// text yields no parseable price are skipped silently — a noisy catalog
/// must not abort the scan as long as one usable entry exists. The running
/// minimum is replaced only on a strictly smaller price, so the first entry
/// wins any exact tie.
///
/// The function is pure over the snapshot: scanning the same entries twice
/// yields an identical result.
///
/// # Errors
///
/// Returns [`ScanError::NoCandidates`] when the listing is empty, every
/// entry is out of stock, or no entry's text yields a price. This must
/// propagate and fail the enclosing run; it is never retried here.
pub fn select_cheapest(entries: &[RawEntry]) -> Result<Selection, ScanError> {
    let mut best: Option<Selection> = None;

    for (index, entry) in entries.iter().enumerate() {
        if is_out_of_stock(&entry.container_text) {
            tracing::debug!(position = index + 1, "skipping out-of-stock entry");
            continue;
        }

        let Some(price) = extract_price(&entry.container_text) else {
            tracing::debug!(position = index + 1, "skipping entry with no parseable price");
            continue;
        };

        let is_cheaper = best.as_ref().is_none_or(|current| price < current.price);
        if is_cheaper {
            let name = display_name(entry, index);
            tracing::debug!(%name, price = %price, "new cheapest candidate");
            best = Some(Selection {
                name,
                price,
                link: entry.href.clone(),
            });
        }
    }

    match best {
        Some(selection) => {
            tracing::info!(
                name = %selection.name,
                price = %selection.price,
                "selected cheapest available product"
            );
            Ok(selection)
        }
        None => Err(ScanError::NoCandidates {
            scanned: entries.len(),
        }),
    }
}

/// Trimmed label text, or a positional placeholder when the label is empty.
/// Positions are 1-based to match how a person counts cards on the page.
fn display_name(entry: &RawEntry, index: usize) -> String {
    let trimmed = entry.label.trim();
    if trimmed.is_empty() {
        format!("Product {}", index + 1)
    } else {
        trimmed.to_owned()
    }
}
