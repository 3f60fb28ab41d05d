//! `cat` command – print a file's content.
//!
//! Usage: cat [file]
//!
//! The whole argument list is re-joined with spaces, so file names that
//! contain spaces work. Content is returned line by line.

use vsh_core::{
    context::ShellContext,
    error::{ShellError, ShellResult},
    executor::{Builtin, ExecutionResult},
    fs::Node,
    path,
};

pub struct CatBuiltin;

impl Builtin for CatBuiltin {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> ShellResult<ExecutionResult> {
        let operand = args.join(" ");
        if operand.is_empty() {
            return Err(ShellError::validation("Error: No file name provided"));
        }
        let segments = path::resolve(&operand, ctx.cwd())?;
        let Some((name, parents)) = segments.split_last() else {
            return Err(ShellError::type_mismatch(format!(
                "Error: \"{}\" is a directory, not a file",
                path::display(&segments)
            )));
        };

        let mut dir = ctx.root();
        for seg in parents {
            dir = match dir.get(seg) {
                Some(Node::Directory(next)) => next,
                _ => {
                    return Err(ShellError::not_found(format!(
                        "Error: Directory \"{seg}\" not found"
                    )))
                }
            };
        }
        match dir.get(name) {
            Some(Node::File(file)) => Ok(ExecutionResult::ok_lines(
                file.content().split('\n').map(str::to_string).collect(),
            )),
            Some(Node::Directory(_)) => Err(ShellError::type_mismatch(format!(
                "Error: \"{name}\" is a directory, not a file"
            ))),
            None => Err(ShellError::not_found(format!(
                "Error: File \"{name}\" not found in \"{operand}\""
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "cat"
    }

    fn synopsis(&self) -> &'static str {
        "View file contents"
    }

    fn description(&self) -> &'static str {
        "Prints the text content of a file, line by line."
    }

    fn usage(&self) -> &'static str {
        "cat [file]"
    }
}
