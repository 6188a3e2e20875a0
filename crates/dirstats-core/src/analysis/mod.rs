/// Analysis modules — ranking and reporting over a built tree.

pub mod report;
pub mod top_entries;

pub use report::{denied_directories, file_sizes, subfolder_sizes, RankedEntry, Report};
pub use top_entries::select_top;
