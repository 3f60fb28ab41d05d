//! `chmod` command – relabel a permission record.
//!
//! Usage: chmod [permissions] [path]
//!
//! Permissions are cosmetic labels and only the root has one out of the
//! box; chmod overwrites existing records but never creates them, so
//! everything except the root is rejected until a record appears. The
//! label itself is free-form and unvalidated.

use vsh_core::{
    context::ShellContext,
    error::{ShellError, ShellResult},
    executor::{Builtin, ExecutionResult},
    path,
};

pub struct ChmodBuiltin;

impl Builtin for ChmodBuiltin {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> ShellResult<ExecutionResult> {
        let (Some(label), Some(operand)) = (
            args.first().filter(|s| !s.is_empty()),
            args.get(1).filter(|s| !s.is_empty()),
        ) else {
            return Err(ShellError::validation("Error: Missing permission or path"));
        };

        let canonical = path::display(&path::resolve(operand, ctx.cwd())?);
        if !ctx.perms().contains(&canonical) {
            return Err(ShellError::not_found(format!(
                "Error: No permission record for path \"{canonical}\""
            )));
        }
        ctx.perms_mut().set(canonical.clone(), label.clone());

        Ok(ExecutionResult::ok_line(format!(
            "Permissions for \"{canonical}\" changed to \"{label}\""
        )))
    }

    fn name(&self) -> &'static str {
        "chmod"
    }

    fn synopsis(&self) -> &'static str {
        "Change file or directory permissions"
    }

    fn description(&self) -> &'static str {
        "Updates the permission label of a path that already has one recorded."
    }

    fn usage(&self) -> &'static str {
        "chmod [permissions] [path]"
    }
}
