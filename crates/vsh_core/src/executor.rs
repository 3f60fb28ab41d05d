//! Command dispatch.
//!
//! The executor owns the builtin registry and turns one line of input into
//! one [`ExecutionResult`]. Input handling is deliberately primitive: the
//! line is trimmed and split on single spaces, with no quoting, escaping,
//! globbing or pipes. Consecutive spaces therefore produce empty argument
//! tokens, which commands that re-join their operand (`cat`, `touch`, the
//! `echo` text) must see unchanged.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::context::ShellContext;
use crate::error::{ShellError, ShellResult};

/// What one command invocation produced.
///
/// `lines` are complete output lines without trailing newlines; the caller
/// owns line separation and any prompt redrawing. `clear_screen` asks the
/// caller to wipe its display before printing the lines (only `clear` sets
/// it).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    pub lines: Vec<String>,
    pub exit_code: i32,
    pub clear_screen: bool,
}

impl ExecutionResult {
    /// Successful result with no output.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Successful result with a single output line.
    pub fn ok_line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            ..Self::default()
        }
    }

    /// Successful result with the given output lines.
    pub fn ok_lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }

    /// Successful result that asks the caller to clear its display.
    pub fn cleared() -> Self {
        Self {
            clear_screen: true,
            ..Self::default()
        }
    }

    /// Failed result carrying the error's user-facing line.
    pub fn from_error(err: &ShellError) -> Self {
        Self {
            lines: vec![err.message().to_string()],
            exit_code: 1,
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// A built-in command.
///
/// Builtins never print; they return lines. State changes go through the
/// [`ShellContext`] they are handed. Errors carry the exact line the user
/// should see, so the executor can render them without rewording.
pub trait Builtin: Send + Sync {
    /// Command name as typed at the prompt.
    fn name(&self) -> &'static str;

    /// One-line summary.
    fn synopsis(&self) -> &'static str;

    /// Fuller sentence for help listings.
    fn description(&self) -> &'static str;

    /// Usage string, e.g. `mkdir DIRECTORY`.
    fn usage(&self) -> &'static str;

    /// Run the command against the session.
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> ShellResult<ExecutionResult>;
}

/// Builtin registry and dispatch loop entry point.
pub struct Executor {
    builtins: HashMap<String, Arc<dyn Builtin>>,
}

impl Executor {
    /// Create an executor with an empty registry.
    pub fn new() -> Self {
        Self {
            builtins: HashMap::new(),
        }
    }

    /// Register a builtin under its own name. Re-registering a name
    /// replaces the previous handler.
    pub fn register_builtin(&mut self, builtin: Arc<dyn Builtin>) {
        self.builtins.insert(builtin.name().to_string(), builtin);
    }

    /// Names of all registered builtins, in no particular order.
    pub fn builtin_names(&self) -> Vec<&str> {
        self.builtins.keys().map(String::as_str).collect()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.builtins.contains_key(name)
    }

    /// Execute one line of input against the session.
    ///
    /// A blank line is a no-op. An unknown command and any command error
    /// are folded into the result as their user-facing line with a nonzero
    /// exit code; this method itself never fails.
    pub fn run_line(&self, ctx: &mut ShellContext, line: &str) -> ExecutionResult {
        let Some((command, args)) = split_line(line) else {
            return ExecutionResult::empty();
        };
        let Some(builtin) = self.builtins.get(&command) else {
            debug!(command = %command, "unknown command");
            return ExecutionResult::from_error(&ShellError::command_not_found(&command));
        };
        debug!(command = %command, argc = args.len(), "dispatching builtin");
        match builtin.execute(ctx, &args) {
            Ok(result) => result,
            Err(err) => ExecutionResult::from_error(&err),
        }
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a raw input line into command name and argument tokens.
///
/// Splitting is on single spaces only, so `a  b` yields an empty middle
/// token. Returns `None` for a blank line.
fn split_line(line: &str) -> Option<(String, Vec<String>)> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut tokens = trimmed.split(' ');
    let command = tokens.next()?.to_string();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}
