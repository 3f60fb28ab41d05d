//! `cp` command – copy a file or directory.
//!
//! Usage: cp [source] [destination]
//!
//! The source subtree is snapshotted before the destination walk starts, so
//! copying a directory into itself copies its pre-copy contents and later
//! edits to either side never leak across. Destination directories are not
//! created on the fly.

use tracing::debug;
use vsh_core::{
    context::ShellContext,
    error::{ShellError, ShellResult},
    executor::{Builtin, ExecutionResult},
    fs::Node,
    path,
};

pub struct CpBuiltin;

impl Builtin for CpBuiltin {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> ShellResult<ExecutionResult> {
        let (Some(source), Some(destination)) = (
            args.first().filter(|s| !s.is_empty()),
            args.get(1).filter(|s| !s.is_empty()),
        ) else {
            return Err(ShellError::validation("Error: Missing source or destination"));
        };

        // Snapshot the source subtree before touching the destination.
        let src_segments = path::resolve(source, ctx.cwd())?;
        let Some((src_name, src_parents)) = src_segments.split_last() else {
            return Err(ShellError::not_found(format!(
                "Error: Source file \"{source}\" not found in \"{source}\""
            )));
        };
        let mut dir = ctx.root();
        for seg in src_parents {
            dir = match dir.get(seg) {
                Some(Node::Directory(next)) => next,
                _ => {
                    return Err(ShellError::not_found(format!(
                        "Error: Directory \"{seg}\" not found in source path"
                    )))
                }
            };
        }
        let snapshot = match dir.get(src_name) {
            Some(node) => node.clone(),
            None => {
                return Err(ShellError::not_found(format!(
                    "Error: Source file \"{src_name}\" not found in \"{source}\""
                )))
            }
        };

        let dst_segments = path::resolve(destination, ctx.cwd())?;
        let Some((dst_name, dst_parents)) = dst_segments.split_last() else {
            return Err(ShellError::already_exists(format!(
                "Error: Destination file \"{destination}\" already exists"
            )));
        };
        let mut dir = ctx.root_mut();
        for seg in dst_parents {
            dir = match dir.get_mut(seg) {
                Some(Node::Directory(next)) => next,
                _ => {
                    return Err(ShellError::not_found(format!(
                        "Error: Destination directory \"{seg}\" not found"
                    )))
                }
            };
        }
        if dir.contains(dst_name) {
            return Err(ShellError::already_exists(format!(
                "Error: Destination file \"{dst_name}\" already exists"
            )));
        }
        dir.insert(dst_name, snapshot)?;

        debug!(source = %source, destination = %destination, "copied subtree");
        Ok(ExecutionResult::ok_line(format!(
            "\"{src_name}\" copied to \"{destination}\""
        )))
    }

    fn name(&self) -> &'static str {
        "cp"
    }

    fn synopsis(&self) -> &'static str {
        "Copy files or directories"
    }

    fn description(&self) -> &'static str {
        "Copies a file or a whole directory subtree from one path to another."
    }

    fn usage(&self) -> &'static str {
        "cp [source] [destination]"
    }
}
