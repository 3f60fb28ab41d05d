//! Prefix completion against the working directory.
//!
//! The engine completes the token being typed (everything after the last
//! space) against the child names of the current directory, case
//! sensitively and in insertion order. It is not path-aware: a token
//! containing `/` simply matches nothing. Candidates are returned as whole
//! replacement lines with the earlier tokens preserved verbatim, so the
//! caller can swap its input buffer for a candidate as-is.

use crate::fs::DirNode;

/// Completion candidates for `input` typed in `current`.
///
/// An input ending in a space (or an empty input) has an empty target
/// token, which every child name matches.
pub fn complete(input: &str, current: &DirNode) -> Vec<String> {
    let tokens: Vec<&str> = input.split(' ').collect();
    let Some((target, prior)) = tokens.split_last() else {
        return Vec::new();
    };
    let prefix = prior.join(" ");
    current
        .names()
        .filter(|name| name.starts_with(target))
        .map(|name| {
            if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{prefix} {name}")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::Node;

    fn dir_with(names: &[&str]) -> DirNode {
        let mut dir = DirNode::new();
        for name in names {
            dir.insert(name, Node::file("")).unwrap();
        }
        dir
    }

    #[test]
    fn completes_the_last_token_against_child_names() {
        let dir = dir_with(&["docs", "dump.txt", "music"]);
        assert_eq!(complete("cd d", &dir), vec!["cd docs", "cd dump.txt"]);
    }

    #[test]
    fn empty_target_offers_every_child() {
        let dir = dir_with(&["a", "b"]);
        assert_eq!(complete("ls ", &dir), vec!["ls a", "ls b"]);
    }

    #[test]
    fn single_token_candidates_have_no_prefix() {
        let dir = dir_with(&["docs"]);
        assert_eq!(complete("do", &dir), vec!["docs"]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let dir = dir_with(&["Docs", "docs"]);
        assert_eq!(complete("cd D", &dir), vec!["cd Docs"]);
    }

    #[test]
    fn prior_tokens_are_preserved_verbatim() {
        let dir = dir_with(&["notes.txt"]);
        assert_eq!(
            complete("cp  no", &dir),
            vec!["cp  notes.txt".to_string()]
        );
    }

    #[test]
    fn no_match_yields_nothing() {
        let dir = dir_with(&["docs"]);
        assert!(complete("cd z", &dir).is_empty());
        assert!(complete("cd docs/re", &dir).is_empty());
    }

    #[test]
    fn candidates_follow_insertion_order() {
        let dir = dir_with(&["zz", "aa", "mm"]);
        assert_eq!(complete("cat ", &dir), vec!["cat zz", "cat aa", "cat mm"]);
    }
}
