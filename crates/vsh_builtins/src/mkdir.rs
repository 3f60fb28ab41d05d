//! `mkdir` command – create a directory chain under the working directory.
//!
//! Usage: mkdir PATH
//!
//! Each missing segment of PATH is created in turn and reported on its own
//! line. An existing segment stops the walk with a conflict error; segments
//! created before the stop stay in place. The operand is normalized on its
//! own, so a leading `/` does not anchor it at the root: mkdir always
//! builds below the working directory.

use tracing::debug;
use vsh_core::{
    context::ShellContext,
    error::{ShellError, ShellResult},
    executor::{Builtin, ExecutionResult},
    path,
};

pub struct MkdirBuiltin;

impl Builtin for MkdirBuiltin {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> ShellResult<ExecutionResult> {
        let Some(operand) = args.first().filter(|s| !s.is_empty()) else {
            return Err(ShellError::validation("Error: No directory name provided"));
        };
        let segments = path::resolve(operand, &[])?;

        let mut lines = Vec::new();
        let mut dir = ctx.current_dir_mut()?;
        for seg in &segments {
            if dir.contains(seg) {
                return Err(ShellError::already_exists(format!(
                    "Error: Directory \"{seg}\" already exists"
                )));
            }
            dir = dir.insert_dir(seg)?;
            lines.push(format!("Directory \"{seg}\" created"));
        }
        debug!(operand = %operand, created = lines.len(), "mkdir finished");
        Ok(ExecutionResult::ok_lines(lines))
    }

    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn synopsis(&self) -> &'static str {
        "Create a new directory"
    }

    fn description(&self) -> &'static str {
        "Creates a directory for every path segment, refusing any segment that already exists."
    }

    fn usage(&self) -> &'static str {
        "mkdir [directory]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ctx: &mut ShellContext, operand: &str) -> ShellResult<ExecutionResult> {
        MkdirBuiltin.execute(ctx, &[operand.to_string()])
    }

    #[test]
    fn creates_a_single_directory() {
        let mut ctx = ShellContext::new();
        let result = run(&mut ctx, "docs").unwrap();
        assert_eq!(result.lines, vec!["Directory \"docs\" created"]);
        assert!(ctx.root().get("docs").is_some_and(|n| n.is_dir()));
    }

    #[test]
    fn creates_a_chain_and_reports_each_segment() {
        let mut ctx = ShellContext::new();
        let result = run(&mut ctx, "a/b/c").unwrap();
        assert_eq!(
            result.lines,
            vec![
                "Directory \"a\" created",
                "Directory \"b\" created",
                "Directory \"c\" created",
            ]
        );
        let inner: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert!(ctx.root().dir_at(&inner).is_some());
    }

    #[test]
    fn existing_segment_is_a_conflict() {
        let mut ctx = ShellContext::new();
        run(&mut ctx, "docs").unwrap();
        let err = run(&mut ctx, "docs/old").unwrap_err();
        assert_eq!(err.to_string(), "Error: Directory \"docs\" already exists");
    }

    #[test]
    fn an_existing_file_is_also_a_conflict() {
        let mut ctx = ShellContext::new();
        ctx.root_mut()
            .insert("notes.txt", vsh_core::Node::file(""))
            .unwrap();
        let err = run(&mut ctx, "notes.txt").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error: Directory \"notes.txt\" already exists"
        );
    }

    #[test]
    fn missing_operand_is_rejected() {
        let mut ctx = ShellContext::new();
        let err = MkdirBuiltin.execute(&mut ctx, &[]).unwrap_err();
        assert_eq!(err.to_string(), "Error: No directory name provided");
    }

    #[test]
    fn builds_below_the_working_directory() {
        let mut ctx = ShellContext::new();
        run(&mut ctx, "docs").unwrap();
        ctx.set_cwd(vec!["docs".to_string()]).unwrap();
        run(&mut ctx, "notes").unwrap();
        assert!(ctx
            .root()
            .node_at(&["docs".to_string(), "notes".to_string()])
            .is_some());
    }

    #[test]
    fn a_leading_slash_does_not_escape_the_working_directory() {
        let mut ctx = ShellContext::new();
        run(&mut ctx, "docs").unwrap();
        ctx.set_cwd(vec!["docs".to_string()]).unwrap();
        run(&mut ctx, "/notes").unwrap();
        assert!(ctx
            .root()
            .node_at(&["docs".to_string(), "notes".to_string()])
            .is_some());
        assert!(ctx.root().get("notes").is_none());
    }

    #[test]
    fn dot_segments_collapse_before_creation() {
        let mut ctx = ShellContext::new();
        let result = run(&mut ctx, "a/./b").unwrap();
        assert_eq!(result.lines.len(), 2);
        assert!(ctx
            .root()
            .node_at(&["a".to_string(), "b".to_string()])
            .is_some());
    }
}
