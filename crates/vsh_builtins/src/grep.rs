//! `grep` command – search a file for lines containing a pattern.
//!
//! Usage: grep [pattern] [file]
//!
//! Matching is literal substring, case sensitive, no regular expressions.
//! Matching lines are printed in file order; no match is an ordinary
//! result, not an error.

use vsh_core::{
    context::ShellContext,
    error::{ShellError, ShellResult},
    executor::{Builtin, ExecutionResult},
    fs::Node,
    path,
};

pub struct GrepBuiltin;

impl Builtin for GrepBuiltin {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> ShellResult<ExecutionResult> {
        let (Some(pattern), Some(operand)) = (
            args.first().filter(|s| !s.is_empty()),
            args.get(1).filter(|s| !s.is_empty()),
        ) else {
            return Err(ShellError::validation("Error: Missing pattern or file name"));
        };

        let segments = path::resolve(operand, ctx.cwd())?;
        let Some((name, parents)) = segments.split_last() else {
            return Err(ShellError::type_mismatch(format!(
                "Error: \"{operand}\" is a directory, not a file"
            )));
        };

        let mut dir = ctx.root();
        for seg in parents {
            dir = match dir.get(seg) {
                Some(Node::Directory(next)) => next,
                _ => {
                    return Err(ShellError::not_found(format!(
                        "Error: File \"{operand}\" not found"
                    )))
                }
            };
        }
        let file = match dir.get(name) {
            Some(Node::File(file)) => file,
            Some(Node::Directory(_)) => {
                return Err(ShellError::type_mismatch(format!(
                    "Error: \"{operand}\" is a directory, not a file"
                )))
            }
            None => {
                return Err(ShellError::not_found(format!(
                    "Error: File \"{operand}\" not found"
                )))
            }
        };

        let matches: Vec<String> = file
            .content()
            .split('\n')
            .filter(|line| line.contains(pattern.as_str()))
            .map(str::to_string)
            .collect();
        if matches.is_empty() {
            return Ok(ExecutionResult::ok_line(format!(
                "No match found for \"{pattern}\""
            )));
        }
        Ok(ExecutionResult::ok_lines(matches))
    }

    fn name(&self) -> &'static str {
        "grep"
    }

    fn synopsis(&self) -> &'static str {
        "Search for text in a file"
    }

    fn description(&self) -> &'static str {
        "Prints every line of a file that contains the given pattern."
    }

    fn usage(&self) -> &'static str {
        "grep [pattern] [file]"
    }
}
