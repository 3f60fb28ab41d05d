//! The in-memory name tree.
//!
//! The whole virtual filesystem is one [`Node`] value: directories own their
//! children by value and files own their text content. There are no inodes,
//! timestamps, sizes or links. Directory entries keep insertion order, which
//! is the order `ls`, `find` and autocompletion report them in; renaming an
//! entry moves it to the end, as a fresh insertion would.
//!
//! Cloning a `Node` clones the whole subtree, which is exactly the snapshot
//! semantics `cp` needs.

use crate::error::{ShellError, ShellResult};

/// A single entry in the tree: either a directory or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(DirNode),
    File(FileNode),
}

impl Node {
    /// Create an empty directory node.
    pub fn dir() -> Self {
        Node::Directory(DirNode::new())
    }

    /// Create a file node with the given content.
    pub fn file(content: impl Into<String>) -> Self {
        Node::File(FileNode::new(content))
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    pub fn as_dir(&self) -> Option<&DirNode> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub fn as_dir_mut(&mut self) -> Option<&mut DirNode> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        }
    }

    pub fn as_file_mut(&mut self) -> Option<&mut FileNode> {
        match self {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        }
    }
}

/// A directory: named children in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirNode {
    entries: Vec<(String, Node)>,
}

impl DirNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    /// Insert a new child at the end. The caller is expected to have checked
    /// for a collision already; a duplicate name is refused, as is a name the
    /// resolver could never produce (empty, or containing a separator).
    pub fn insert(&mut self, name: &str, node: Node) -> ShellResult<()> {
        if name.is_empty() || name.contains('/') {
            return Err(ShellError::validation(format!(
                "invalid entry name \"{name}\""
            )));
        }
        if self.contains(name) {
            return Err(ShellError::already_exists(format!(
                "entry \"{name}\" already exists"
            )));
        }
        self.entries.push((name.to_string(), node));
        Ok(())
    }

    /// Insert a fresh empty directory and hand back a borrow of it, for
    /// callers that keep descending as they create.
    pub fn insert_dir(&mut self, name: &str) -> ShellResult<&mut DirNode> {
        self.insert(name, Node::dir())?;
        match self.get_mut(name) {
            Some(Node::Directory(dir)) => Ok(dir),
            _ => Err(ShellError::internal(format!(
                "entry \"{name}\" missing right after insertion"
            ))),
        }
    }

    /// Remove a child by name, returning the detached subtree.
    pub fn remove(&mut self, name: &str) -> Option<Node> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Rename a child. The entry is re-inserted at the end of the listing.
    pub fn rename(&mut self, old: &str, new: &str) -> ShellResult<()> {
        if new.is_empty() || new.contains('/') {
            return Err(ShellError::validation(format!(
                "invalid entry name \"{new}\""
            )));
        }
        if self.contains(new) {
            return Err(ShellError::already_exists(format!(
                "entry \"{new}\" already exists"
            )));
        }
        let node = self
            .remove(old)
            .ok_or_else(|| ShellError::not_found(format!("entry \"{old}\" not found")))?;
        self.entries.push((new.to_string(), node));
        Ok(())
    }

    /// Child names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Child `(name, node)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(n, node)| (n.as_str(), node))
    }

    /// Walk `segments` downwards, requiring a directory at every step.
    /// Empty input names this directory itself.
    pub fn dir_at(&self, segments: &[String]) -> Option<&DirNode> {
        let mut dir = self;
        for seg in segments {
            dir = dir.get(seg)?.as_dir()?;
        }
        Some(dir)
    }

    /// Mutable variant of [`DirNode::dir_at`].
    pub fn dir_at_mut(&mut self, segments: &[String]) -> Option<&mut DirNode> {
        let mut dir = self;
        for seg in segments {
            dir = dir.get_mut(seg)?.as_dir_mut()?;
        }
        Some(dir)
    }

    /// Look up the node named by `segments`. The walk fails if any leading
    /// segment is missing or is a file. Empty input names no node (the root
    /// is a directory, not an entry).
    pub fn node_at(&self, segments: &[String]) -> Option<&Node> {
        let (name, parents) = segments.split_last()?;
        self.dir_at(parents)?.get(name)
    }

    /// Mutable variant of [`DirNode::node_at`].
    pub fn node_at_mut(&mut self, segments: &[String]) -> Option<&mut Node> {
        let (name, parents) = segments.split_last()?;
        self.dir_at_mut(parents)?.get_mut(name)
    }
}

/// A file: nothing but its text content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileNode {
    content: String,
}

impl FileNode {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}
