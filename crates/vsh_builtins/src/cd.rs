//! `cd` command – change the working directory.
//!
//! Usage: cd [directory]
//!
//! The operand is resolved against the working directory, then every
//! segment of the result is validated from the root down. On any failure
//! the session stays where it was.

use vsh_core::{
    context::ShellContext,
    error::{ShellError, ShellResult},
    executor::{Builtin, ExecutionResult},
    fs::Node,
    path,
};

pub struct CdBuiltin;

impl Builtin for CdBuiltin {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> ShellResult<ExecutionResult> {
        let Some(operand) = args.first().filter(|s| !s.is_empty()) else {
            return Err(ShellError::validation("Error: No path provided"));
        };
        let target = path::resolve(operand, ctx.cwd())?;

        let mut dir = ctx.root();
        for seg in &target {
            dir = match dir.get(seg) {
                Some(Node::Directory(next)) => next,
                Some(Node::File(_)) => {
                    return Err(ShellError::type_mismatch(format!(
                        "Error: Directory \"{seg}\" not found"
                    )))
                }
                None => {
                    return Err(ShellError::not_found(format!(
                        "Error: Directory \"{seg}\" not found"
                    )))
                }
            };
        }

        ctx.set_cwd(target)?;
        Ok(ExecutionResult::ok_line(format!(
            "Now in {}",
            ctx.cwd_display()
        )))
    }

    fn name(&self) -> &'static str {
        "cd"
    }

    fn synopsis(&self) -> &'static str {
        "Change directory"
    }

    fn description(&self) -> &'static str {
        "Moves the session to another directory by relative or absolute path."
    }

    fn usage(&self) -> &'static str {
        "cd [directory]"
    }
}
