/// dirstats core — tree building, size aggregation, and ranking.
///
/// This crate contains all of the disk usage logic with zero presentation
/// dependencies. Byte formatting lives here too so any frontend renders
/// sizes the same way.
///
/// # Modules
///
/// - [`model`] — Owned file tree nodes with memoised aggregate sizes.
/// - [`scanner`] — Breadth-first tree building with progress reporting.
/// - [`analysis`] — Top-N selection and the largest folders/files report.
/// - [`error`] — Errors that abort a scan.
pub mod analysis;
pub mod error;
pub mod model;
pub mod scanner;

pub use error::ScanError;
pub use model::{Listing, Node};
pub use scanner::{build_tree, TreeBuilder};
