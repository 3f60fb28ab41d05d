//! `clear` command – wipe the display.
//!
//! The engine has no screen to clear; the result just raises the
//! `clear_screen` flag and the caller does the wiping.

use vsh_core::{
    context::ShellContext,
    error::ShellResult,
    executor::{Builtin, ExecutionResult},
};

pub struct ClearBuiltin;

impl Builtin for ClearBuiltin {
    fn execute(&self, _ctx: &mut ShellContext, _args: &[String]) -> ShellResult<ExecutionResult> {
        Ok(ExecutionResult::cleared())
    }

    fn name(&self) -> &'static str {
        "clear"
    }

    fn synopsis(&self) -> &'static str {
        "Clear the screen"
    }

    fn description(&self) -> &'static str {
        "Asks the terminal to wipe its display before printing anything else."
    }

    fn usage(&self) -> &'static str {
        "clear"
    }
}
