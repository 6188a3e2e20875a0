/// Scan progress reporting — lightweight messages handed to the caller's
/// progress sink while the tree is being built.

use std::path::PathBuf;
use std::time::Duration;

/// Progress updates emitted by [`TreeBuilder`](super::TreeBuilder).
///
/// The tree itself is only handed back once the build finishes; these
/// messages carry paths and counters for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanProgress {
    /// A directory is about to be enumerated.
    Enumerating { path: PathBuf },
    /// A whole level has been enumerated. `directories` is the size of the
    /// next frontier, i.e. how many directories were found at `depth + 1`.
    Level { depth: usize, directories: usize },
    /// A directory below the root refused enumeration. Its node is kept
    /// with no children and the scan carries on.
    Denied { path: PathBuf, message: String },
    /// The build finished.
    Complete {
        duration: Duration,
        files: u64,
        directories: u64,
        denied: u64,
    },
}
