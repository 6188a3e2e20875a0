/// Level-by-level directory walker.
///
/// The frontier is a worklist of mutable borrows into the tree being
/// built, paired with the real filesystem path of each directory. A level
/// is enumerated to exhaustion, the subdirectories it produced become the
/// next frontier, and the walk stops once a level yields no directories.
/// Nothing recurses, so tree depth never touches the call stack.
use crate::error::ScanError;
use crate::model::Node;
use crate::scanner::progress::ScanProgress;
use compact_str::CompactString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Entries of one directory, ready to attach to its node.
struct DirContents {
    /// Every entry in enumeration order.
    nodes: Vec<Node>,
    /// Real paths of the directory entries among `nodes`, in the same order.
    dir_paths: Vec<PathBuf>,
}

#[derive(Default)]
struct Counters {
    files: u64,
    directories: u64,
    denied: u64,
}

/// Build the tree under `root_path`, reporting through `emit`.
pub fn build(
    root_path: &Path,
    emit: &mut dyn FnMut(ScanProgress),
) -> Result<Node, ScanError> {
    let start = Instant::now();
    info!("Starting scan of {}", root_path.display());

    let mut root = root_node(root_path)?;
    let mut counters = Counters::default();

    {
        let mut frontier: Vec<(&mut Node, PathBuf)> = vec![(&mut root, root_path.to_path_buf())];
        let mut depth = 0;

        while !frontier.is_empty() {
            let mut next = Vec::new();

            for (dir, path) in frontier {
                emit(ScanProgress::Enumerating { path: path.clone() });

                match list_directory(&path) {
                    Ok(contents) => {
                        for node in &contents.nodes {
                            if node.is_dir() {
                                counters.directories += 1;
                            } else {
                                counters.files += 1;
                            }
                        }
                        dir.set_listed(contents.nodes);
                        let subdirs = dir
                            .children_mut()
                            .into_iter()
                            .flat_map(|children| children.iter_mut())
                            .filter(|child| child.is_dir());
                        next.extend(subdirs.zip(contents.dir_paths));
                    }
                    // The root was named by the operator; nothing below it
                    // is allowed to hide a failure there.
                    Err(err) if depth == 0 => return Err(into_root_error(err)),
                    Err(err) if err.is_permission_denied() => {
                        warn!("Skipping {}: {}", path.display(), err.io_error());
                        counters.denied += 1;
                        dir.set_denied();
                        emit(ScanProgress::Denied {
                            message: err.io_error().to_string(),
                            path,
                        });
                    }
                    Err(err) => return Err(err),
                }
            }

            debug!("Level {depth} done, {} directories queued", next.len());
            emit(ScanProgress::Level {
                depth,
                directories: next.len(),
            });

            frontier = next;
            depth += 1;
        }
    }

    let duration = start.elapsed();
    info!(
        "Scan complete: {} files, {} directories, {} denied in {duration:?}",
        counters.files, counters.directories, counters.denied
    );
    emit(ScanProgress::Complete {
        duration,
        files: counters.files,
        directories: counters.directories,
        denied: counters.denied,
    });

    Ok(root)
}

/// Create the root node. Follows symlinks: the root is whatever the
/// operator pointed at.
fn root_node(path: &Path) -> Result<Node, ScanError> {
    let meta = fs::metadata(path).map_err(|source| ScanError::Root {
        path: path.to_path_buf(),
        source,
    })?;

    let (parent, name) = match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => (parent.to_path_buf(), name.to_string_lossy()),
        // `/`, `.`, `..` and friends have no final segment; keep them whole.
        _ => (PathBuf::new(), path.to_string_lossy()),
    };
    Ok(Node::directory(CompactString::new(name), parent, meta.len()))
}

/// Enumerate one directory. The listing handle is released on return.
///
/// Entries are stat'ed without following symlinks, so a link reports its
/// own size and is never treated as a directory. Any failure, including
/// one part-way through, fails the whole listing: a directory's children
/// are either all present or not attached at all.
fn list_directory(path: &Path) -> Result<DirContents, ScanError> {
    let enumerate_err = |source| ScanError::Enumerate {
        path: path.to_path_buf(),
        source,
    };

    let mut contents = DirContents {
        nodes: Vec::new(),
        dir_paths: Vec::new(),
    };

    for entry in fs::read_dir(path).map_err(enumerate_err)? {
        let entry = entry.map_err(enumerate_err)?;
        let entry_path = entry.path();
        let meta = fs::symlink_metadata(&entry_path).map_err(|source| ScanError::Metadata {
            path: entry_path.clone(),
            source,
        })?;

        let name = CompactString::new(entry.file_name().to_string_lossy());
        if meta.file_type().is_dir() {
            contents.nodes.push(Node::directory(name, path, meta.len()));
            contents.dir_paths.push(entry_path);
        } else {
            contents.nodes.push(Node::file(name, path, meta.len()));
        }
    }

    Ok(contents)
}

/// Re-label a failed root enumeration as a root error.
fn into_root_error(err: ScanError) -> ScanError {
    match err {
        ScanError::Enumerate { path, source } => ScanError::Root { path, source },
        other => other,
    }
}
