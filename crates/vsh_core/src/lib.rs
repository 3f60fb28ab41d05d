//! VirtuShell Core Library
//!
//! The engine behind VirtuShell: an in-memory name tree, lexical path
//! resolution, cosmetic permissions, the session state and the command
//! dispatcher. Everything here is synchronous, single-threaded and free of
//! real-filesystem and terminal concerns; rendering and input live in the
//! UI crate, command semantics in the builtins crate.

// Re-export commonly used types and functions
pub use complete::complete;
pub use context::ShellContext;
pub use error::{ErrorKind, ShellError, ShellResult};
pub use executor::{Builtin, ExecutionResult, Executor};
pub use fs::{DirNode, FileNode, Node};
pub use path::PathError;
pub use perms::PermissionTable;

// Public modules
pub mod complete;
pub mod context;
pub mod error;
pub mod executor;
pub mod fs;
pub mod path;
pub mod perms;
