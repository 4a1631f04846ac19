pub mod client;
pub mod error;
pub mod listing;
pub mod parse;
pub mod reconcile;
pub mod scan;
pub mod types;

mod retry;

pub use client::CategoryClient;
pub use error::ScanError;
pub use listing::extract_entries;
pub use scan::select_cheapest;
pub use types::RawEntry;
