/// Data model for the dirstats file tree.
///
/// Re-exports the owned node type and supporting types.
pub mod node;
pub mod size;

pub use node::{Descendants, Listing, Node};
