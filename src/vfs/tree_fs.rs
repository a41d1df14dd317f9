//! This module provides a virtual filesystem (VFS) implementation that stores the directory tree in memory.

use std::fmt;

use snafu::ensure;
use tracing::debug;

use crate::core::{AlreadyExistsSnafu, NotADirectorySnafu, NotAFileSnafu, NotFoundSnafu, Result};
use crate::vfs::node::{Children, Node};

/// A virtual file system (VFS) implementation that keeps the whole directory
/// hierarchy in memory as a recursive tree of typed nodes.
///
/// `TreeFS` provides a POSIX-like file system interface where all data is kept
/// in-process, allowing operations such as file creation, directory traversal,
/// path resolution and content access without touching the host filesystem.
///
/// ### Internal state
///
/// * `root` - The single tree root, always a `Node::Directory`. Every lookup
///   starts here, and the store never hands out references into the tree.
///   - Constructed empty by `new()`, pre-seeded by `with_root()`, replaced
///     wholesale by `reset()`.
///
/// ### Path handling
///
/// Paths are plain strings using `/` as separator, regardless of platform.
/// Splitting on `/` and discarding empty segments yields the lookup sequence,
/// so `/a/b`, `a/b`, `a//b` and `a/b/` all address the same node, and the
/// empty path addresses the root. Segment names are opaque: `.` and `..` have
/// no special meaning, and there is no current-directory state.
///
/// ### Invariants
///
/// 1. **Root existence**: The root is always present and always a directory.
/// 2. **Strict hierarchy**: Every node except the root has exactly one parent;
///    files never have children (the node type makes this unrepresentable).
/// 3. **Name uniqueness**: Children are keyed by name within their directory.
/// 4. **Ordering**: Child names are kept sorted, so listings are deterministic.
///
/// ### Lifecycle
///
/// - On creation the tree holds only the empty root directory.
/// - `mkdir()`, `touch()` and `append()` grow the tree; missing parent
///   directories spring into existence as needed.
/// - `reset()` swaps in a caller-supplied tree, dropping the old one.
///
/// ### Thread Safety
///
/// This struct is **not thread-safe by default**. If concurrent access is
/// required, wrap it in a synchronization primitive (e.g., `Arc<Mutex<TreeFS>>`
/// or `RwLock<TreeFS>`) at the application level and hold the lock across each
/// whole operation.
///
/// ### Example
///
/// ```
/// use treefs::TreeFS;
///
/// let mut fs = TreeFS::new();
///
/// fs.mkdir("/docs", false)?;
/// fs.append("/docs/note.txt", "Hello")?;
///
/// assert_eq!(fs.read("/docs/note.txt")?, "Hello");
/// assert_eq!(fs.ls("/docs")?, vec!["note.txt"]);
/// # Ok::<(), treefs::FsError>(())
/// ```
pub struct TreeFS {
    root: Node, // always a `Node::Directory`
}

/// Splits a path into its non-empty `/`-separated segments.
/// Runs of separators collapse, so the empty path yields no segments at all.
fn segments(path: &str) -> impl DoubleEndedIterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

impl TreeFS {
    /// Creates a new `TreeFS` instance.
    /// The tree starts as a root directory with no children.
    pub fn new() -> Self {
        TreeFS { root: Node::dir() }
    }

    /// Creates a `TreeFS` instance holding a pre-built tree under the root.
    pub fn with_root(children: Children) -> Self {
        TreeFS {
            root: Node::Directory { children },
        }
    }

    /// Walks the tree from the root along `path`'s segments.
    ///
    /// Returns `None` when a segment is missing or a file shows up before the
    /// final segment. The empty path resolves to the root itself.
    fn resolve(&self, path: &str) -> Option<&Node> {
        segments(path).try_fold(&self.root, |node, name| match node {
            Node::Directory { children } => children.get(name),
            Node::File { .. } => None,
        })
    }

    /// Walks `names` from the root, creating missing directories along the
    /// way, and returns the children of the final directory.
    ///
    /// Fails with `NotADirectory` when a file occupies any segment of the
    /// walk. A blocking file implies every segment before it already existed,
    /// so the failure leaves the tree untouched.
    fn ensure_dirs(&mut self, names: &[&str], path: &str) -> Result<&mut Children> {
        let mut node = &mut self.root;
        for &name in names {
            match node {
                Node::Directory { children } => {
                    node = children.entry(name.to_string()).or_insert_with(Node::dir);
                }
                Node::File { .. } => return NotADirectorySnafu { path }.fail(),
            }
        }
        match node {
            Node::Directory { children } => Ok(children),
            Node::File { .. } => NotADirectorySnafu { path }.fail(),
        }
    }

    /// Lists the entry at `path` (shallow listing).
    ///
    /// For a directory this returns the names of its **immediate children**,
    /// in ascending lexicographic order. It does *not* recurse into
    /// subdirectories. For a file it returns the file's own name as the single
    /// element, the way POSIX `ls` treats a file argument.
    ///
    /// # Arguments
    /// * `path` - path to the entry to list (must exist).
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Bare child names (directories and files mixed,
    ///   without markers), or the file's own name.
    /// * `Err(FsError::NotFound)` - If the path does not resolve.
    ///
    /// # Example
    /// ```
    /// use treefs::TreeFS;
    ///
    /// let mut fs = TreeFS::new();
    /// fs.mkdir("/docs/subdir", false)?;
    /// fs.touch("/docs/document.txt")?;
    ///
    /// assert_eq!(fs.ls("/docs")?, vec!["document.txt", "subdir"]);
    /// assert_eq!(fs.ls("/docs/document.txt")?, vec!["document.txt"]);
    /// # Ok::<(), treefs::FsError>(())
    /// ```
    ///
    /// # Notes
    /// - **Ordering:** Names compare byte-wise, so the order is case-sensitive
    ///   (`"B"` sorts before `"a"`).
    /// - **No hidden entries:** Every child is reported; the store keeps no
    ///   bookkeeping entries to skip.
    pub fn ls<P: AsRef<str>>(&self, path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        match self.resolve(path) {
            Some(Node::Directory { children }) => Ok(children.keys().cloned().collect()),
            Some(Node::File { .. }) => {
                let name = segments(path).next_back().unwrap(); // safe unwrap(): a file resolved, so the path has segments
                Ok(vec![name.to_string()])
            }
            None => NotFoundSnafu { path }.fail(),
        }
    }

    /// Creates a directory and all its missing parents.
    ///
    /// With `exists_ok` set, a path that is already occupied (by a directory
    /// *or* a file) is left exactly as it is and the call succeeds; without
    /// it, the call fails with `AlreadyExists`. The root always exists.
    ///
    /// A file occupying one of the parent segments fails the call with
    /// `NotADirectory` and creates nothing.
    pub fn mkdir<P: AsRef<str>>(&mut self, path: P, exists_ok: bool) -> Result<()> {
        let path = path.as_ref();
        if self.resolve(path).is_some() {
            ensure!(exists_ok, AlreadyExistsSnafu { path });
            return Ok(());
        }

        let names: Vec<&str> = segments(path).collect();
        self.ensure_dirs(&names, path)?;
        debug!("created directory {}", path);
        Ok(())
    }

    /// Creates a new empty file at `path`, creating missing parent
    /// directories along the way.
    ///
    /// Unlike `append()`, this is a strict creation: it fails with
    /// `AlreadyExists` when the path is already occupied by a file or a
    /// directory (the root included).
    pub fn touch<P: AsRef<str>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        ensure!(self.resolve(path).is_none(), AlreadyExistsSnafu { path });

        let names: Vec<&str> = segments(path).collect();
        match names.split_last() {
            Some((name, parents)) => {
                let children = self.ensure_dirs(parents, path)?;
                children.insert((*name).to_string(), Node::file(""));
                debug!("created file {}", path);
                Ok(())
            }
            // no segments means the root, which always exists
            None => AlreadyExistsSnafu { path }.fail(),
        }
    }

    /// Reads the entire contents of a file into a string.
    ///
    /// # Returns
    /// * `Ok(String)` - File content; empty for a file that has never been
    ///   written to.
    /// * `Err(FsError::NotFound)` - If no *file* lives at `path`. A directory
    ///   has no readable content, so reading one reports it as missing rather
    ///   than as a type mismatch.
    pub fn read<P: AsRef<str>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        match self.resolve(path) {
            Some(Node::File { content }) => Ok(content.clone()),
            Some(Node::Directory { .. }) | None => NotFoundSnafu { path }.fail(),
        }
    }

    /// Appends `content` to the file at `path`, creating the file (and any
    /// missing parent directories) first if nothing lives there.
    ///
    /// # Returns
    /// * `Ok(())` - If the append succeeded.
    /// * `Err(FsError::NotAFile)` - If `path` points at a directory.
    /// * `Err(FsError::NotADirectory)` - If a file occupies one of the parent
    ///   segments.
    ///
    /// # Behavior
    /// - **Appends only**: Existing content is preserved; new text is added at
    ///   the end.
    /// - **Creates on demand**: A missing file springs into existence holding
    ///   exactly `content`.
    pub fn append<P: AsRef<str>>(&mut self, path: P, content: &str) -> Result<()> {
        let path = path.as_ref();
        let names: Vec<&str> = segments(path).collect();
        match names.split_last() {
            Some((name, parents)) => {
                let children = self.ensure_dirs(parents, path)?;
                let node = children
                    .entry((*name).to_string())
                    .or_insert_with(|| Node::file(""));
                match node {
                    Node::File { content: existing } => {
                        existing.push_str(content);
                        debug!("appended {} bytes to {}", content.len(), path);
                        Ok(())
                    }
                    Node::Directory { .. } => NotAFileSnafu { path }.fail(),
                }
            }
            // the empty path is the root directory
            None => NotAFileSnafu { path }.fail(),
        }
    }

    /// Replaces the whole tree with a caller-supplied structure.
    ///
    /// Taking a `Children` map rather than a `Node` keeps the root a
    /// directory, so the replacement cannot fail.
    pub fn reset(&mut self, root: Children) {
        debug!("state reset with {} top-level entries", root.len());
        self.root = Node::Directory { children: root };
    }
}

impl Default for TreeFS {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the tree as an indented listing: the root as `/`, directories with
/// a trailing `/`, files with their content length in bytes.
impl fmt::Display for TreeFS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/")?;
        fmt_node(f, &self.root, 1)
    }
}

fn fmt_node(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
    if let Node::Directory { children } = node {
        for (name, child) in children {
            match child {
                Node::Directory { .. } => {
                    writeln!(f, "{:indent$}{}/", "", name, indent = depth * 2)?;
                    fmt_node(f, child, depth + 1)?;
                }
                Node::File { content } => {
                    writeln!(
                        f,
                        "{:indent$}{} ({} bytes)",
                        "",
                        name,
                        content.len(),
                        indent = depth * 2
                    )?;
                }
            }
        }
    }
    Ok(())
}
