//! `ls` command – list the working directory.
//!
//! Usage: ls
//!
//! Entries come out on one line, two spaces apart, in the order they were
//! created. Arguments are ignored.

use vsh_core::{
    context::ShellContext,
    error::ShellResult,
    executor::{Builtin, ExecutionResult},
};

pub struct LsBuiltin;

impl Builtin for LsBuiltin {
    fn execute(&self, ctx: &mut ShellContext, _args: &[String]) -> ShellResult<ExecutionResult> {
        let dir = ctx.current_dir()?;
        if dir.is_empty() {
            return Ok(ExecutionResult::ok_line("No files or directories found"));
        }
        let names: Vec<&str> = dir.names().collect();
        Ok(ExecutionResult::ok_line(names.join("  ")))
    }

    fn name(&self) -> &'static str {
        "ls"
    }

    fn synopsis(&self) -> &'static str {
        "List files and directories"
    }

    fn description(&self) -> &'static str {
        "Lists the working directory's entries in the order they were created."
    }

    fn usage(&self) -> &'static str {
        "ls"
    }
}
