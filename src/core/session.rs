//! Shell session state: the filesystem plus the working-directory pointer.
//!
//! Command handlers receive a `&mut ShellSession` instead of touching
//! globals, so several independent terminals (and tests) can each own one.
//!
//! Invariant: `cwd` always resolves to an existing folder. `cd` only stores
//! validated targets, and `remove` resets the pointer to root whenever the
//! removed subtree contained it.

use crate::core::error::ShellError;
use crate::core::filesystem::{FsNode, VirtualFs, split_path};

/// Listing descriptor produced by [`ShellSession::list_entries`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: String,
    pub is_folder: bool,
    /// File content length in bytes; 0 for folders.
    pub size: usize,
}

/// One terminal's view of the virtual filesystem.
#[derive(Clone, Debug)]
pub struct ShellSession {
    fs: VirtualFs,
    /// Path segments below root; empty means root itself.
    cwd: Vec<String>,
}

impl ShellSession {
    /// Start a session at the root of the seeded filesystem.
    pub fn new() -> Self {
        Self::with_fs(VirtualFs::seed())
    }

    /// Start a session over a caller-supplied tree (used by tests).
    pub fn with_fs(fs: VirtualFs) -> Self {
        Self { fs, cwd: Vec::new() }
    }

    /// Prompt string for the current directory: `/` at root, `/a/b` deeper.
    pub fn prompt_path(&self) -> String {
        if self.cwd.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", self.cwd.join("/"))
        }
    }

    /// Absolute segment list for a typed path: leading `/` resolves from
    /// root, anything else appends to the working directory.
    fn target_segments(&self, path: &str) -> Vec<String> {
        if path.starts_with('/') {
            split_path(path)
        } else {
            let mut segments = self.cwd.clone();
            segments.extend(split_path(path));
            segments
        }
    }

    /// Look up the node a typed path refers to.
    pub fn node_at_path(&self, path: &str) -> Option<&FsNode> {
        self.fs.node_at(&self.target_segments(path))
    }

    /// Change the working directory.
    ///
    /// Bare `cd` resets to root. `..` pops one segment and is a no-op at
    /// root (never an error).
    pub fn change_directory(&mut self, arg: Option<&str>) -> Result<(), ShellError> {
        let Some(path) = arg else {
            self.cwd.clear();
            return Ok(());
        };
        if path == ".." {
            self.cwd.pop();
            return Ok(());
        }
        let target = self.target_segments(path);
        match self.fs.node_at(&target) {
            Some(FsNode::Folder { .. }) => {
                self.cwd = target;
                Ok(())
            }
            Some(FsNode::File { .. }) => Err(ShellError::NotADirectory(path.to_string())),
            None => Err(ShellError::NotFound(path.to_string())),
        }
    }

    /// Entries of the current folder in insertion order.
    ///
    /// Hidden entries (leading `.`) are skipped unless requested.
    pub fn list_entries(&self, include_hidden: bool) -> Vec<EntryInfo> {
        let Some(entries) = self.fs.folder_entries(&self.cwd) else {
            return Vec::new();
        };
        entries
            .iter()
            .filter(|(name, _)| include_hidden || !name.starts_with('.'))
            .map(|(name, node)| EntryInfo {
                name: name.clone(),
                is_folder: node.is_folder(),
                size: node.size(),
            })
            .collect()
    }

    /// Reject names that would create nested entries in one call.
    fn validate_name(name: &str) -> Result<(), ShellError> {
        if name.is_empty() || name.contains('/') {
            return Err(ShellError::InvalidOperand(format!(
                "invalid name '{}': nested paths are not supported",
                name
            )));
        }
        Ok(())
    }

    /// Create an empty folder in the current directory.
    pub fn create_folder(&mut self, name: &str) -> Result<(), ShellError> {
        Self::validate_name(name)?;
        let missing = ShellError::NotFound(self.prompt_path());
        let cwd = self.cwd.clone();
        let entries = self.fs.folder_entries_mut(&cwd).ok_or(missing)?;
        if entries.contains_key(name) {
            return Err(ShellError::AlreadyExists(name.to_string()));
        }
        entries.insert(name.to_string(), FsNode::folder());
        Ok(())
    }

    /// Create an empty file in the current directory.
    ///
    /// Touching an existing entry is a no-op success.
    pub fn create_file(&mut self, name: &str) -> Result<(), ShellError> {
        Self::validate_name(name)?;
        let missing = ShellError::NotFound(self.prompt_path());
        let cwd = self.cwd.clone();
        let entries = self.fs.folder_entries_mut(&cwd).ok_or(missing)?;
        if !entries.contains_key(name) {
            entries.insert(name.to_string(), FsNode::file(""));
        }
        Ok(())
    }

    /// Delete the entry a typed path refers to, file or folder.
    ///
    /// Sibling order is preserved. Deleting an ancestor of the working
    /// directory resets the pointer to root.
    pub fn remove(&mut self, path: &str) -> Result<(), ShellError> {
        let mut target = self.target_segments(path);
        let name = target
            .pop()
            .ok_or_else(|| ShellError::InvalidOperand(format!("cannot remove '{}'", path)))?;
        let entries = self
            .fs
            .folder_entries_mut(&target)
            .ok_or_else(|| ShellError::NotFound(path.to_string()))?;
        entries
            .shift_remove(&name)
            .ok_or_else(|| ShellError::NotFound(path.to_string()))?;

        target.push(name);
        if self.cwd.len() >= target.len() && self.cwd[..target.len()] == target[..] {
            self.cwd.clear();
        }
        Ok(())
    }

    /// Read a file's content.
    pub fn read_file(&self, path: &str) -> Result<String, ShellError> {
        match self.node_at_path(path) {
            Some(FsNode::File { content }) => Ok(content.clone()),
            Some(FsNode::Folder { .. }) => Err(ShellError::IsADirectory(path.to_string())),
            None => Err(ShellError::NotFound(path.to_string())),
        }
    }
}

impl Default for ShellSession {
    fn default() -> Self {
        Self::new()
    }
}
