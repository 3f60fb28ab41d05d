//! `touch` command – create a file, building missing directories on the way.
//!
//! Usage: touch [file]
//!
//! Unlike its namesake, this touch never updates anything: the target must
//! not exist yet, and it is created with placeholder content. Missing
//! intermediate directories are created silently except for a report line
//! each; an intermediate that exists as a file stops the walk.

use vsh_core::{
    context::ShellContext,
    error::{ShellError, ShellResult},
    executor::{Builtin, ExecutionResult},
    fs::Node,
    path,
};

/// Content given to every newly created file.
const PLACEHOLDER_CONTENT: &str = "This is a new file";

pub struct TouchBuiltin;

impl Builtin for TouchBuiltin {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> ShellResult<ExecutionResult> {
        let operand = args.join(" ");
        if operand.is_empty() {
            return Err(ShellError::validation("Error: No file name provided"));
        }
        let segments = path::resolve(&operand, ctx.cwd())?;
        let Some((name, parents)) = segments.split_last() else {
            return Err(ShellError::validation("Error: No file name provided"));
        };

        let mut lines = Vec::new();
        let mut dir = ctx.root_mut();
        for seg in parents {
            if dir.contains(seg) {
                dir = match dir.get_mut(seg) {
                    Some(Node::Directory(next)) => next,
                    _ => {
                        return Err(ShellError::type_mismatch(format!(
                            "Error: \"{seg}\" is not a directory"
                        )))
                    }
                };
            } else {
                dir = dir.insert_dir(seg)?;
                lines.push(format!("Directory \"{seg}\" created"));
            }
        }

        if dir.contains(name) {
            return Err(ShellError::already_exists(format!(
                "Error: File \"{name}\" already exists in \"{operand}\"."
            )));
        }
        dir.insert(name, Node::file(PLACEHOLDER_CONTENT))?;
        lines.push(format!("File \"{name}\" created in \"{operand}\"."));
        Ok(ExecutionResult::ok_lines(lines))
    }

    fn name(&self) -> &'static str {
        "touch"
    }

    fn synopsis(&self) -> &'static str {
        "Create a new file"
    }

    fn description(&self) -> &'static str {
        "Creates a placeholder file, building any missing directories along the path."
    }

    fn usage(&self) -> &'static str {
        "touch [file]"
    }
}
