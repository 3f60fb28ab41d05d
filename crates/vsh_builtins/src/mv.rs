//! `mv` command – rename an entry of the working directory.
//!
//! Usage: mv [source] [destination]
//!
//! Both operands are bare entry names in the working directory; paths are
//! not walked. The renamed entry drops to the end of the listing, exactly
//! as a fresh insertion would.

use vsh_core::{
    context::ShellContext,
    error::{ShellError, ShellResult},
    executor::{Builtin, ExecutionResult},
};

pub struct MvBuiltin;

impl Builtin for MvBuiltin {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> ShellResult<ExecutionResult> {
        let (Some(source), Some(destination)) = (
            args.first().filter(|s| !s.is_empty()),
            args.get(1).filter(|s| !s.is_empty()),
        ) else {
            return Err(ShellError::validation("Error: Missing source or destination"));
        };
        // The destination becomes an entry name verbatim, so it must not
        // smuggle a separator into the tree.
        if destination.contains('/') {
            return Err(ShellError::validation(format!(
                "Error: Destination \"{destination}\" is not a valid name"
            )));
        }

        let dir = ctx.current_dir_mut()?;
        if !dir.contains(source) {
            return Err(ShellError::not_found(format!(
                "Error: Source \"{source}\" not found"
            )));
        }
        if dir.contains(destination) {
            return Err(ShellError::already_exists(format!(
                "Error: Destination \"{destination}\" already exists"
            )));
        }
        dir.rename(source, destination)?;

        Ok(ExecutionResult::ok_line(format!(
            "\"{source}\" moved to \"{destination}\""
        )))
    }

    fn name(&self) -> &'static str {
        "mv"
    }

    fn synopsis(&self) -> &'static str {
        "Move or rename files or directories"
    }

    fn description(&self) -> &'static str {
        "Renames an entry of the working directory; operands are bare names, not paths."
    }

    fn usage(&self) -> &'static str {
        "mv [source] [destination]"
    }
}
