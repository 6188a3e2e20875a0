/// A single file or directory in the scanned tree.
///
/// Every directory owns its children outright, so the whole tree is freed
/// when the root is dropped. There are no back-pointers: a node knows the
/// path of the directory that contains it, which is all the reporting layer
/// needs to rebuild full paths.
use compact_str::CompactString;
use std::cell::Cell;
use std::path::{Path, PathBuf};

/// Enumeration state of a directory node.
///
/// Keeping `Denied` separate from `Listed` lets callers tell an empty
/// directory apart from one whose contents could not be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Listing {
    /// Not enumerated yet.
    Pending,
    /// Enumerated successfully. `children` holds every entry found.
    Listed,
    /// Enumeration was refused by the filesystem. `children` is empty and
    /// the aggregate size undercounts whatever lives below.
    Denied,
}

/// A file or directory with its own size and, for directories, its
/// children in the order they were enumerated.
#[derive(Debug, Clone)]
pub struct Node {
    /// Final path segment only.
    name: CompactString,

    /// Path of the containing directory. `parent_path / name` is the full path.
    parent_path: PathBuf,

    /// Determined without following symlinks, so a link to a directory is a leaf.
    is_dir: bool,

    /// Size the filesystem reports for this entry itself.
    /// For directories this is the directory entry's own size, not the total.
    own_size: u64,

    /// Always empty for non-directories.
    children: Vec<Node>,

    /// Memoised aggregate size. Set by the first `aggregate_size` call and
    /// left alone until `clear_cache`, even if `children` changes.
    cached_size: Cell<Option<u64>>,

    listing: Listing,
}

impl Node {
    /// Create a file (or any other non-directory entry, symlinks included).
    pub fn file(name: impl Into<CompactString>, parent_path: impl Into<PathBuf>, own_size: u64) -> Self {
        Self {
            name: name.into(),
            parent_path: parent_path.into(),
            is_dir: false,
            own_size,
            children: Vec::new(),
            cached_size: Cell::new(None),
            listing: Listing::Listed,
        }
    }

    /// Create a directory that has not been enumerated yet.
    pub fn directory(
        name: impl Into<CompactString>,
        parent_path: impl Into<PathBuf>,
        own_size: u64,
    ) -> Self {
        Self {
            name: name.into(),
            parent_path: parent_path.into(),
            is_dir: true,
            own_size,
            children: Vec::new(),
            cached_size: Cell::new(None),
            listing: Listing::Pending,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    #[inline]
    pub fn parent_path(&self) -> &Path {
        &self.parent_path
    }

    /// Full path of this entry.
    pub fn full_path(&self) -> PathBuf {
        self.parent_path.join(self.name.as_str())
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    #[inline]
    pub fn own_size(&self) -> u64 {
        self.own_size
    }

    #[inline]
    pub fn listing(&self) -> Listing {
        self.listing
    }

    /// Children in enumeration order.
    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Mutable access to the children of a directory; `None` for files.
    ///
    /// Changing the children does not touch the memoised size. Call
    /// [`Node::clear_cache`] afterwards to see the change.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        if self.is_dir {
            Some(&mut self.children)
        } else {
            None
        }
    }

    /// Record the outcome of enumerating this directory.
    pub(crate) fn set_listed(&mut self, children: Vec<Node>) {
        debug_assert!(self.is_dir, "only directories can be listed");
        self.children = children;
        self.listing = Listing::Listed;
    }

    pub(crate) fn set_denied(&mut self) {
        debug_assert!(self.is_dir, "only directories can be denied");
        self.children.clear();
        self.listing = Listing::Denied;
    }

    /// Own size plus the aggregate size of every child, computed once.
    ///
    /// Files always answer with their own size. Directories answer from the
    /// memo when it is set; otherwise the subtree is folded post-order on an
    /// explicit stack, so arbitrarily deep trees cannot overflow the call
    /// stack. Every directory completed along the way has its memo filled,
    /// and any directory that already has one is not descended into.
    pub fn aggregate_size(&self) -> u64 {
        if let Some(size) = self.settled_size() {
            return size;
        }

        let mut stack = vec![Frame::new(self)];
        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            if let Some(child) = node.children.get(frame.next) {
                frame.next += 1;
                match child.settled_size() {
                    Some(size) => frame.total += size,
                    None => stack.push(Frame::new(child)),
                }
                continue;
            }

            // All children folded.
            let total = frame.total;
            node.cached_size.set(Some(total));
            stack.pop();
            match stack.last_mut() {
                Some(parent) => parent.total += total,
                None => return total,
            }
        }

        self.own_size
    }

    /// The memoised aggregate size, if one has been computed.
    #[inline]
    pub fn cached_size(&self) -> Option<u64> {
        self.cached_size.get()
    }

    /// Forget the memoised size of this node only. Descendants keep theirs.
    pub fn clear_cache(&self) {
        self.cached_size.set(None);
    }

    /// Forget the memoised size of this node and every descendant.
    pub fn clear_cache_recursive(&self) {
        self.clear_cache();
        for node in self.descendants() {
            node.clear_cache();
        }
    }

    /// Every node below this one, pre-order, children in stored order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Number of non-directory descendants.
    pub fn file_count(&self) -> u64 {
        self.descendants().filter(|n| !n.is_dir).count() as u64
    }

    /// Number of directory descendants (the node itself is not counted).
    pub fn dir_count(&self) -> u64 {
        self.descendants().filter(|n| n.is_dir).count() as u64
    }

    /// Size that needs no further folding: own size for files, the memo for
    /// directories.
    #[inline]
    fn settled_size(&self) -> Option<u64> {
        if self.is_dir {
            self.cached_size.get()
        } else {
            Some(self.own_size)
        }
    }
}

impl Drop for Node {
    // Unlink children onto a heap worklist so dropping a very deep tree does
    // not recurse once per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// One directory being folded by [`Node::aggregate_size`].
struct Frame<'a> {
    node: &'a Node,
    next: usize,
    total: u64,
}

impl<'a> Frame<'a> {
    fn new(node: &'a Node) -> Self {
        Self {
            node,
            next: 0,
            total: node.own_size,
        }
    }
}

/// Pre-order iterator returned by [`Node::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
