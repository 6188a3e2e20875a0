/// Errors that abort a scan.
///
/// Permission denials below the root never show up here: the scanner
/// recovers from those locally and marks the directory as denied.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root could not be stat'ed or enumerated.
    #[error("cannot read root directory {}: {source}", path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory below the root failed to enumerate for a reason other
    /// than a permission denial.
    #[error("failed to enumerate {}: {source}", path.display())]
    Enumerate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An entry was listed but could not be stat'ed.
    #[error("failed to read metadata for {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Underlying I/O error.
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Root { source, .. }
            | Self::Enumerate { source, .. }
            | Self::Metadata { source, .. } => source,
        }
    }

    /// `true` when the filesystem refused access.
    pub fn is_permission_denied(&self) -> bool {
        self.io_error().kind() == io::ErrorKind::PermissionDenied
    }

    /// Path the failing operation was applied to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Root { path, .. } | Self::Enumerate { path, .. } | Self::Metadata { path, .. } => {
                path
            }
        }
    }
}
