//! `find` command – search the working directory's subtree by name.
//!
//! Usage: find [name]
//!
//! Matches are substring, case sensitive, against entry names only. The
//! walk is depth-first in insertion order, each directory reported before
//! its contents, and results are printed as absolute paths.

use vsh_core::{
    context::ShellContext,
    error::{ShellError, ShellResult},
    executor::{Builtin, ExecutionResult},
    fs::{DirNode, Node},
};

pub struct FindBuiltin;

impl Builtin for FindBuiltin {
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> ShellResult<ExecutionResult> {
        let Some(term) = args.first().filter(|s| !s.is_empty()) else {
            return Err(ShellError::validation("Error: No name provided"));
        };

        let mut results = Vec::new();
        search(ctx.current_dir()?, &ctx.cwd_display(), term, &mut results);

        if results.is_empty() {
            return Ok(ExecutionResult::ok_line(format!(
                "No files or directories found matching \"{term}\""
            )));
        }
        Ok(ExecutionResult::ok_lines(results))
    }

    fn name(&self) -> &'static str {
        "find"
    }

    fn synopsis(&self) -> &'static str {
        "Search for files or directories"
    }

    fn description(&self) -> &'static str {
        "Prints the absolute path of every entry whose name contains the given text."
    }

    fn usage(&self) -> &'static str {
        "find [name]"
    }
}

fn search(dir: &DirNode, base: &str, term: &str, results: &mut Vec<String>) {
    for (name, node) in dir.entries() {
        let full = if base == "/" {
            format!("/{name}")
        } else {
            format!("{base}/{name}")
        };
        if name.contains(term) {
            results.push(full.clone());
        }
        if let Node::Directory(next) = node {
            search(next, &full, term, results);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ctx: &mut ShellContext, term: &str) -> ShellResult<ExecutionResult> {
        FindBuiltin.execute(ctx, &[term.to_string()])
    }

    fn seed(ctx: &mut ShellContext) {
        let mut notes = vsh_core::DirNode::new();
        notes.insert("meeting.txt", Node::file("")).unwrap();
        let mut docs = vsh_core::DirNode::new();
        docs.insert("notes", Node::Directory(notes)).unwrap();
        docs.insert("note.md", Node::file("")).unwrap();
        ctx.root_mut()
            .insert("docs", Node::Directory(docs))
            .unwrap();
        ctx.root_mut().insert("noted.txt", Node::file("")).unwrap();
    }

    #[test]
    fn matches_substrings_anywhere_in_the_tree() {
        let mut ctx = ShellContext::new();
        seed(&mut ctx);
        let result = run(&mut ctx, "note").unwrap();
        assert_eq!(
            result.lines,
            vec!["/docs/notes", "/docs/note.md", "/noted.txt"]
        );
    }

    #[test]
    fn directories_are_reported_before_their_contents() {
        let mut ctx = ShellContext::new();
        seed(&mut ctx);
        let result = run(&mut ctx, "t").unwrap();
        assert_eq!(
            result.lines,
            vec![
                "/docs/notes",
                "/docs/notes/meeting.txt",
                "/docs/note.md",
                "/noted.txt",
            ]
        );
    }

    #[test]
    fn root_level_matches_have_a_single_slash() {
        let mut ctx = ShellContext::new();
        seed(&mut ctx);
        let result = run(&mut ctx, "noted").unwrap();
        assert_eq!(result.lines, vec!["/noted.txt"]);
    }

    #[test]
    fn the_search_is_rooted_at_the_working_directory() {
        let mut ctx = ShellContext::new();
        seed(&mut ctx);
        ctx.set_cwd(vec!["docs".to_string()]).unwrap();
        let result = run(&mut ctx, "meeting").unwrap();
        assert_eq!(result.lines, vec!["/docs/notes/meeting.txt"]);
    }

    #[test]
    fn no_match_is_an_ordinary_result() {
        let mut ctx = ShellContext::new();
        seed(&mut ctx);
        let result = run(&mut ctx, "zzz").unwrap();
        assert_eq!(
            result.lines,
            vec!["No files or directories found matching \"zzz\""]
        );
        assert!(result.is_success());
    }

    #[test]
    fn missing_operand_is_rejected() {
        let mut ctx = ShellContext::new();
        let err = FindBuiltin.execute(&mut ctx, &[]).unwrap_err();
        assert_eq!(err.to_string(), "Error: No name provided");
    }
}
