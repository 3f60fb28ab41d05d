//! `rm` command – delete a file or directory subtree.
//!
//! Usage: rm [file or directory]
//!
//! Directories go recursively and without confirmation. Deleting the
//! directory the session is standing in (or one of its ancestors) succeeds
//! and repositions the session at the deleted entry's parent, so the
//! working path never dangles.

use tracing::warn;
use vsh_core::{
    context::ShellContext,
    error::{ShellError, ShellResult},
    executor::{Builtin, ExecutionResult},
    fs::Node,
    path,
};

pub struct RmBuiltin;

impl Builtin for RmBuiltin {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> ShellResult<ExecutionResult> {
        let Some(operand) = args.first().filter(|s| !s.is_empty()) else {
            return Err(ShellError::validation(
                "Error: No file or directory name provided",
            ));
        };
        let segments = path::resolve(operand, ctx.cwd())?;
        let Some((name, parents)) = segments.split_last() else {
            // The root itself is not an entry and cannot be removed.
            return Err(ShellError::not_found(format!(
                "Error: \"{operand}\" not found"
            )));
        };

        let mut dir = ctx.root_mut();
        for seg in parents {
            dir = match dir.get_mut(seg) {
                Some(Node::Directory(next)) => next,
                _ => {
                    return Err(ShellError::not_found(format!(
                        "Error: Path \"{operand}\" not found"
                    )))
                }
            };
        }
        if dir.remove(name).is_none() {
            return Err(ShellError::not_found(format!(
                "Error: \"{operand}\" not found"
            )));
        }

        if ctx.cwd().starts_with(&segments) {
            warn!(
                removed = %path::display(&segments),
                "removed an ancestor of the working directory, repositioning the session"
            );
            ctx.set_cwd(parents.to_vec())?;
        }

        Ok(ExecutionResult::ok_line(format!(
            "\"{operand}\" has been deleted"
        )))
    }

    fn name(&self) -> &'static str {
        "rm"
    }

    fn synopsis(&self) -> &'static str {
        "Remove files or directories"
    }

    fn description(&self) -> &'static str {
        "Deletes a file or a whole directory subtree, repositioning the session if needed."
    }

    fn usage(&self) -> &'static str {
        "rm [file or directory]"
    }
}
