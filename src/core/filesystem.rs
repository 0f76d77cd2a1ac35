//! In-memory virtual filesystem.
//!
//! A tree of folders and files rooted at `/`. Folders own their children
//! exclusively (no back-pointers, no cycles), so plain ownership is enough.
//! Entries keep insertion order via [`IndexMap`], which is also the order
//! `ls` and tab completion present them in.

use indexmap::IndexMap;

use crate::config;

/// A single node in the virtual filesystem.
///
/// A node's type never changes after creation: files stay files, folders
/// stay folders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FsNode {
    Folder { entries: IndexMap<String, FsNode> },
    File { content: String },
}

impl FsNode {
    /// Create an empty folder node.
    pub fn folder() -> Self {
        Self::Folder {
            entries: IndexMap::new(),
        }
    }

    /// Create a file node with the given content.
    pub fn file(content: impl Into<String>) -> Self {
        Self::File {
            content: content.into(),
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }

    /// Byte length of file content; folders report 0.
    pub fn size(&self) -> usize {
        match self {
            Self::Folder { .. } => 0,
            Self::File { content } => content.len(),
        }
    }
}

/// Split a raw path into segments.
///
/// Empty segments (from repeated separators) and `.` are discarded before
/// resolution. `..` is NOT interpreted here; `cd` handles it at the call
/// site and everywhere else it simply fails to resolve.
pub fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .map(str::to_string)
        .collect()
}

/// The filesystem tree for one shell session.
///
/// Constructed once from the seed structure and mutated in place by
/// `mkdir`, `touch` and `rm`. Nothing here persists across page loads.
#[derive(Clone, Debug)]
pub struct VirtualFs {
    root: FsNode,
}

impl VirtualFs {
    /// Create a filesystem with an empty root folder.
    pub fn new() -> Self {
        Self {
            root: FsNode::folder(),
        }
    }

    /// Build the fixed demo tree shown on page load.
    pub fn seed() -> Self {
        let mut articles = IndexMap::new();
        articles.insert("react.txt".to_string(), FsNode::file(config::ARTICLE_REACT));
        articles.insert(
            "rust-wasm.txt".to_string(),
            FsNode::file(config::ARTICLE_RUST_WASM),
        );

        let mut projects = IndexMap::new();
        projects.insert(
            "termfolio.txt".to_string(),
            FsNode::file(config::PROJECT_TERMFOLIO),
        );
        projects.insert(
            "pricewatch.txt".to_string(),
            FsNode::file(config::PROJECT_PRICEWATCH),
        );

        let mut root = IndexMap::new();
        root.insert(
            "articles".to_string(),
            FsNode::Folder { entries: articles },
        );
        root.insert(
            "projects".to_string(),
            FsNode::Folder { entries: projects },
        );
        root.insert("resume.txt".to_string(), FsNode::file(config::RESUME));
        root.insert(".plan".to_string(), FsNode::file(config::PLAN));

        Self {
            root: FsNode::Folder { entries: root },
        }
    }

    /// Walk from the root along `segments`.
    ///
    /// Fails if any intermediate segment is missing or is a file (cannot
    /// descend into a file).
    pub fn node_at(&self, segments: &[String]) -> Option<&FsNode> {
        let mut current = &self.root;
        for segment in segments {
            match current {
                FsNode::Folder { entries } => current = entries.get(segment)?,
                FsNode::File { .. } => return None,
            }
        }
        Some(current)
    }

    /// Mutable variant of [`Self::node_at`].
    pub fn node_at_mut(&mut self, segments: &[String]) -> Option<&mut FsNode> {
        let mut current = &mut self.root;
        for segment in segments {
            match current {
                FsNode::Folder { entries } => current = entries.get_mut(segment)?,
                FsNode::File { .. } => return None,
            }
        }
        Some(current)
    }

    /// Resolve `segments` to a folder's entry map.
    pub fn folder_entries(&self, segments: &[String]) -> Option<&IndexMap<String, FsNode>> {
        match self.node_at(segments)? {
            FsNode::Folder { entries } => Some(entries),
            FsNode::File { .. } => None,
        }
    }

    /// Mutable variant of [`Self::folder_entries`].
    pub fn folder_entries_mut(
        &mut self,
        segments: &[String],
    ) -> Option<&mut IndexMap<String, FsNode>> {
        match self.node_at_mut(segments)? {
            FsNode::Folder { entries } => Some(entries),
            FsNode::File { .. } => None,
        }
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::seed()
    }
}
