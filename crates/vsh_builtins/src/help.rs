//! `help` command – the command reference card.

use vsh_core::{
    context::ShellContext,
    error::ShellResult,
    executor::{Builtin, ExecutionResult},
};

const HELP_LINES: &[&str] = &[
    "Available commands:",
    "  mkdir [directory]        - Create a new directory",
    "  ls                       - List files and directories",
    "  cp [source] [destination] - Copy files or directories",
    "  mv [source] [destination] - Move or rename files or directories",
    "  cat [file]               - View file contents",
    "  touch [file]             - Create a new file",
    "  rm [file or directory]   - Remove files or directories",
    "  echo [text] > [file]     - Write text to a file",
    "  grep [pattern] [file]    - Search for text in a file",
    "  cd [directory]           - Change directory",
    "  find [name]              - Search for files or directories",
    "  chmod [permissions] [path] - Change file or directory permissions",
    "  pwd                      - Print the current directory",
    "  clear                    - Clear the screen",
    "  help                     - Show this help message",
];

pub struct HelpBuiltin;

impl Builtin for HelpBuiltin {
    fn execute(&self, _ctx: &mut ShellContext, _args: &[String]) -> ShellResult<ExecutionResult> {
        Ok(ExecutionResult::ok_lines(
            HELP_LINES.iter().map(|line| line.to_string()).collect(),
        ))
    }

    fn name(&self) -> &'static str {
        "help"
    }

    fn synopsis(&self) -> &'static str {
        "Show this help message"
    }

    fn description(&self) -> &'static str {
        "Prints the command table with a one-line summary of each command."
    }

    fn usage(&self) -> &'static str {
        "help"
    }
}
