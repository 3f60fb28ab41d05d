//! Session state shared by every command.

use crate::error::{ShellError, ShellResult};
use crate::fs::{DirNode, Node};
use crate::path;
use crate::perms::PermissionTable;

/// One interactive session: the name tree, the working directory and the
/// permission table. Commands receive it mutably and run to completion, so
/// there is never more than one mutation in flight.
///
/// Invariant: `cwd` always names an existing directory. Every prefix of it
/// resolves through directories, which is what makes prompt rendering and
/// relative resolution infallible. `set_cwd` refuses updates that would
/// break this; `rm` repositions the session before it can dangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellContext {
    root: DirNode,
    cwd: Vec<String>,
    perms: PermissionTable,
}

impl ShellContext {
    /// A fresh session: empty root, cwd at `/`, only the root permission
    /// record seeded.
    pub fn new() -> Self {
        Self {
            root: DirNode::new(),
            cwd: Vec::new(),
            perms: PermissionTable::new(),
        }
    }

    pub fn root(&self) -> &DirNode {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut DirNode {
        &mut self.root
    }

    /// The working directory as absolute segments. Empty means the root.
    pub fn cwd(&self) -> &[String] {
        &self.cwd
    }

    /// The working directory as a canonical path string, e.g. `/docs/notes`.
    pub fn cwd_display(&self) -> String {
        path::display(&self.cwd)
    }

    /// Reposition the session. The target must already exist as a directory.
    pub fn set_cwd(&mut self, cwd: Vec<String>) -> ShellResult<()> {
        if self.root.dir_at(&cwd).is_none() {
            return Err(ShellError::internal(format!(
                "cannot reposition session: {} is not a directory",
                path::display(&cwd)
            )));
        }
        self.cwd = cwd;
        Ok(())
    }

    /// The directory the session is currently in.
    pub fn current_dir(&self) -> ShellResult<&DirNode> {
        self.root
            .dir_at(&self.cwd)
            .ok_or_else(|| Self::dangling_cwd(&self.cwd))
    }

    /// Mutable variant of [`ShellContext::current_dir`].
    pub fn current_dir_mut(&mut self) -> ShellResult<&mut DirNode> {
        let err = Self::dangling_cwd(&self.cwd);
        self.root.dir_at_mut(&self.cwd).ok_or(err)
    }

    pub fn perms(&self) -> &PermissionTable {
        &self.perms
    }

    pub fn perms_mut(&mut self) -> &mut PermissionTable {
        &mut self.perms
    }

    fn dangling_cwd(cwd: &[String]) -> ShellError {
        ShellError::internal(format!(
            "working directory {} no longer resolves to a directory",
            path::display(cwd)
        ))
    }
}

impl Default for ShellContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_sits_at_an_empty_root() {
        let ctx = ShellContext::new();
        assert_eq!(ctx.cwd_display(), "/");
        assert!(ctx.current_dir().unwrap().is_empty());
        assert_eq!(ctx.perms().get("/"), Some("rwx"));
    }

    #[test]
    fn set_cwd_requires_an_existing_directory() {
        let mut ctx = ShellContext::new();
        let missing = vec!["ghost".to_string()];
        assert!(ctx.set_cwd(missing).is_err());
        assert_eq!(ctx.cwd_display(), "/");

        ctx.root_mut().insert("docs", Node::dir()).unwrap();
        ctx.set_cwd(vec!["docs".to_string()]).unwrap();
        assert_eq!(ctx.cwd_display(), "/docs");
    }

    #[test]
    fn set_cwd_refuses_a_file() {
        let mut ctx = ShellContext::new();
        ctx.root_mut().insert("f.txt", Node::file("")).unwrap();
        assert!(ctx.set_cwd(vec!["f.txt".to_string()]).is_err());
    }

    #[test]
    fn current_dir_follows_the_working_directory() {
        let mut ctx = ShellContext::new();
        ctx.root_mut().insert("docs", Node::dir()).unwrap();
        ctx.set_cwd(vec!["docs".to_string()]).unwrap();
        ctx.current_dir_mut()
            .unwrap()
            .insert("notes.txt", Node::file("n"))
            .unwrap();
        assert!(ctx
            .root()
            .node_at(&["docs".to_string(), "notes.txt".to_string()])
            .is_some());
    }
}
