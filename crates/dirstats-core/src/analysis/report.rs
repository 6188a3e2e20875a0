/// Largest-folders / largest-files report over a built tree.
///
/// Gathers the two rankings a disk usage summary shows: the immediate
/// subdirectories of the root by aggregate size, and every file anywhere
/// below the root by its own size.
use crate::analysis::top_entries::select_top;
use crate::model::{Listing, Node};
use chrono::{DateTime, Local};
use serde::Serialize;

/// One line of a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    /// Directory name for subfolders, full path for files.
    pub label: String,
    /// Size in bytes.
    pub size: u64,
}

/// Summary of a scanned tree.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Full path of the scanned root.
    pub root: String,
    /// Aggregate size of the root.
    pub total_size: u64,
    pub files: u64,
    pub directories: u64,
    /// Largest immediate subdirectories of the root, descending.
    pub largest_subfolders: Vec<RankedEntry>,
    /// Largest files anywhere below the root, descending.
    pub largest_files: Vec<RankedEntry>,
    /// Directories whose contents could not be read. Their sizes in this
    /// report only include the directory entry itself.
    pub denied: Vec<String>,
    pub generated_at: DateTime<Local>,
}

impl Report {
    /// Build a report keeping at most `count` entries per ranking.
    pub fn from_tree(root: &Node, count: usize) -> Self {
        Self {
            root: root.full_path().to_string_lossy().into_owned(),
            total_size: root.aggregate_size(),
            files: root.file_count(),
            directories: root.dir_count(),
            largest_subfolders: ranked(select_top(subfolder_sizes(root), count)),
            largest_files: ranked(select_top(file_sizes(root), count)),
            denied: denied_directories(root),
            generated_at: Local::now(),
        }
    }
}

fn ranked(pairs: Vec<(String, u64)>) -> Vec<RankedEntry> {
    pairs
        .into_iter()
        .map(|(label, size)| RankedEntry { label, size })
        .collect()
}

/// `(name, aggregate size)` for each immediate subdirectory, in child order.
pub fn subfolder_sizes(root: &Node) -> Vec<(String, u64)> {
    root.children()
        .iter()
        .filter(|child| child.is_dir())
        .map(|dir| (dir.name().to_string(), dir.aggregate_size()))
        .collect()
}

/// `(full path, own size)` for every non-directory below `root`,
/// depth-first in child order.
pub fn file_sizes(root: &Node) -> Vec<(String, u64)> {
    root.descendants()
        .filter(|node| !node.is_dir())
        .map(|file| (file.full_path().to_string_lossy().into_owned(), file.own_size()))
        .collect()
}

/// Full paths of every directory that refused enumeration.
pub fn denied_directories(root: &Node) -> Vec<String> {
    std::iter::once(root)
        .chain(root.descendants())
        .filter(|node| node.listing() == Listing::Denied)
        .map(|node| node.full_path().to_string_lossy().into_owned())
        .collect()
}
