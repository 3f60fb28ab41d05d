//! `pwd` command – report the working directory.

use vsh_core::{
    context::ShellContext,
    error::ShellResult,
    executor::{Builtin, ExecutionResult},
};

pub struct PwdBuiltin;

impl Builtin for PwdBuiltin {
    fn execute(&self, ctx: &mut ShellContext, _args: &[String]) -> ShellResult<ExecutionResult> {
        Ok(ExecutionResult::ok_line(format!(
            "Current directory: {}",
            ctx.cwd_display()
        )))
    }

    fn name(&self) -> &'static str {
        "pwd"
    }

    fn synopsis(&self) -> &'static str {
        "Print the current directory"
    }

    fn description(&self) -> &'static str {
        "Prints the absolute path of the working directory."
    }

    fn usage(&self) -> &'static str {
        "pwd"
    }
}
