/// Scanner module — builds the file tree for a root directory.
///
/// The walk is breadth-first and single-threaded: every directory in the
/// current frontier is enumerated once before any directory of the next
/// level is touched. Progress is reported through an optional callback so
/// a frontend can print something between levels.
pub mod breadth_first;
pub mod progress;

use crate::error::ScanError;
use crate::model::Node;
use progress::ScanProgress;
use std::path::Path;

/// Boxed progress sink. Borrows from the caller for `'a`.
type ProgressSink<'a> = Box<dyn FnMut(&ScanProgress) + 'a>;

/// Configures and runs a tree build.
///
/// ```no_run
/// use dirstats_core::TreeBuilder;
///
/// let root = TreeBuilder::new()
///     .on_progress(|event| eprintln!("{event:?}"))
///     .build("/var/log")?;
/// println!("{}", root.aggregate_size());
/// # Ok::<(), dirstats_core::ScanError>(())
/// ```
#[derive(Default)]
pub struct TreeBuilder<'a> {
    progress: Option<ProgressSink<'a>>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive [`ScanProgress`] events while the tree is built.
    pub fn on_progress(mut self, sink: impl FnMut(&ScanProgress) + 'a) -> Self {
        self.progress = Some(Box::new(sink));
        self
    }

    /// Build the full tree under `root`.
    ///
    /// Fails if the root cannot be stat'ed or enumerated, or if any
    /// directory below it fails for a reason other than a permission
    /// denial. Denied directories are kept with no children and marked
    /// [`Listing::Denied`](crate::model::Listing::Denied).
    pub fn build(mut self, root: impl AsRef<Path>) -> Result<Node, ScanError> {
        let mut emit = |event: ScanProgress| {
            if let Some(sink) = self.progress.as_mut() {
                sink(&event);
            }
        };
        breadth_first::build(root.as_ref(), &mut emit)
    }
}

/// Build the tree under `root` without progress reporting.
pub fn build_tree(root: impl AsRef<Path>) -> Result<Node, ScanError> {
    TreeBuilder::new().build(root)
}
