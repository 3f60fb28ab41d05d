//! `echo` command – print text, or write it to a file with `>`.
//!
//! Usage: echo [text] > [file]
//!
//! The first `>` token splits text from target; anything after the file
//! name is ignored. Double quotes are stripped from the text, which is the
//! only quote handling the shell does anywhere. Redirection overwrites an
//! existing file and creates a missing one, but never replaces a
//! directory.

use tracing::debug;
use vsh_core::{
    context::ShellContext,
    error::{ShellError, ShellResult},
    executor::{Builtin, ExecutionResult},
    fs::Node,
    path,
};

pub struct EchoBuiltin;

impl Builtin for EchoBuiltin {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> ShellResult<ExecutionResult> {
        if args.is_empty() {
            return Err(ShellError::validation("Error: No input provided"));
        }

        let Some(redirect) = args.iter().position(|arg| arg == ">") else {
            return Ok(ExecutionResult::ok_line(strip_quotes(&args.join(" "))));
        };

        let Some(target) = args.get(redirect + 1).filter(|s| !s.is_empty()) else {
            return Err(ShellError::validation("Error: No file name provided"));
        };
        let text = strip_quotes(&args[..redirect].join(" "));

        let segments = path::resolve(target, ctx.cwd())?;
        let Some((name, parents)) = segments.split_last() else {
            return Err(ShellError::type_mismatch(format!(
                "Error: \"{target}\" is a directory, not a file"
            )));
        };

        let mut dir = ctx.root_mut();
        for seg in parents {
            dir = match dir.get_mut(seg) {
                Some(Node::Directory(next)) => next,
                _ => {
                    return Err(ShellError::not_found(format!(
                        "Error: Directory \"{seg}\" not found"
                    )))
                }
            };
        }
        match dir.get_mut(name) {
            Some(Node::File(file)) => file.set_content(text.clone()),
            Some(Node::Directory(_)) => {
                return Err(ShellError::type_mismatch(format!(
                    "Error: \"{name}\" is a directory, not a file"
                )))
            }
            None => dir.insert(name, Node::file(text.clone()))?,
        }

        debug!(target = %target, bytes = text.len(), "wrote file content");
        Ok(ExecutionResult::ok_line(format!(
            "\"{text}\" written to {target}"
        )))
    }

    fn name(&self) -> &'static str {
        "echo"
    }

    fn synopsis(&self) -> &'static str {
        "Write text to a file"
    }

    fn description(&self) -> &'static str {
        "Echoes its text back, or writes it into a file with the > redirection form."
    }

    fn usage(&self) -> &'static str {
        "echo [text] > [file]"
    }
}

fn strip_quotes(text: &str) -> String {
    text.replace('"', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ctx: &mut ShellContext, line: &str) -> ShellResult<ExecutionResult> {
        let args: Vec<String> = line.split(' ').map(str::to_string).collect();
        EchoBuiltin.execute(ctx, &args)
    }

    fn file_content<'a>(ctx: &'a ShellContext, name: &str) -> &'a str {
        ctx.root()
            .get(name)
            .and_then(Node::as_file)
            .map(|f| f.content())
            .unwrap()
    }

    #[test]
    fn echoes_its_arguments() {
        let mut ctx = ShellContext::new();
        let result = run(&mut ctx, "hello virtual world").unwrap();
        assert_eq!(result.lines, vec!["hello virtual world"]);
    }

    #[test]
    fn double_quotes_are_stripped() {
        let mut ctx = ShellContext::new();
        let result = run(&mut ctx, "\"hello world\"").unwrap();
        assert_eq!(result.lines, vec!["hello world"]);
    }

    #[test]
    fn redirection_creates_the_file() {
        let mut ctx = ShellContext::new();
        let result = run(&mut ctx, "remember this > note.txt").unwrap();
        assert_eq!(result.lines, vec!["\"remember this\" written to note.txt"]);
        assert_eq!(file_content(&ctx, "note.txt"), "remember this");
    }

    #[test]
    fn redirection_overwrites_an_existing_file() {
        let mut ctx = ShellContext::new();
        run(&mut ctx, "first > f.txt").unwrap();
        run(&mut ctx, "second > f.txt").unwrap();
        assert_eq!(file_content(&ctx, "f.txt"), "second");
    }

    #[test]
    fn only_text_before_the_operator_is_written() {
        let mut ctx = ShellContext::new();
        run(&mut ctx, "kept > f.txt ignored").unwrap();
        assert_eq!(file_content(&ctx, "f.txt"), "kept");
    }

    #[test]
    fn empty_text_writes_an_empty_file() {
        let mut ctx = ShellContext::new();
        let result = run(&mut ctx, "> f.txt").unwrap();
        assert_eq!(result.lines, vec!["\"\" written to f.txt"]);
        assert_eq!(file_content(&ctx, "f.txt"), "");
    }

    #[test]
    fn a_directory_target_is_refused() {
        let mut ctx = ShellContext::new();
        ctx.root_mut().insert("docs", Node::dir()).unwrap();
        let err = run(&mut ctx, "text > docs").unwrap_err();
        assert_eq!(err.to_string(), "Error: \"docs\" is a directory, not a file");
        assert!(ctx.root().get("docs").unwrap().is_dir());
    }

    #[test]
    fn a_missing_target_directory_is_reported() {
        let mut ctx = ShellContext::new();
        let err = run(&mut ctx, "text > ghost/f.txt").unwrap_err();
        assert_eq!(err.to_string(), "Error: Directory \"ghost\" not found");
    }

    #[test]
    fn a_trailing_operator_needs_a_file_name() {
        let mut ctx = ShellContext::new();
        let err = run(&mut ctx, "text >").unwrap_err();
        assert_eq!(err.to_string(), "Error: No file name provided");
    }

    #[test]
    fn no_arguments_is_rejected() {
        let mut ctx = ShellContext::new();
        let err = EchoBuiltin.execute(&mut ctx, &[]).unwrap_err();
        assert_eq!(err.to_string(), "Error: No input provided");
    }

    #[test]
    fn writes_through_relative_paths() {
        let mut ctx = ShellContext::new();
        ctx.root_mut().insert("docs", Node::dir()).unwrap();
        ctx.set_cwd(vec!["docs".to_string()]).unwrap();
        run(&mut ctx, "deep > inner.txt").unwrap();
        assert!(ctx
            .root()
            .node_at(&["docs".to_string(), "inner.txt".to_string()])
            .is_some());
    }
}
