//! Tab completion bridged into rustyline.
//!
//! Candidates are whole replacement lines: the engine keeps every token the
//! user already typed and completes only the final one, so the replacement
//! span always starts at column zero.

use rustyline::{
    completion::{Completer, Pair},
    Context as RustylineContext,
};
use std::{cell::RefCell, rc::Rc};
use vsh_core::ShellContext;

/// Rustyline helper completing names from the session's working directory.
pub struct VshHelper {
    session: Rc<RefCell<ShellContext>>,
}

impl VshHelper {
    pub fn new(session: Rc<RefCell<ShellContext>>) -> Self {
        Self { session }
    }
}

impl Completer for VshHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &RustylineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];
        if input.trim().is_empty() {
            return Ok((pos, Vec::new()));
        }

        let session = self.session.borrow();
        let candidates = match session.current_dir() {
            Ok(dir) => vsh_core::complete(input, dir),
            Err(_) => Vec::new(),
        };
        let pairs = candidates
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();
        Ok((0, pairs))
    }
}

impl rustyline::Helper for VshHelper {}
impl rustyline::highlight::Highlighter for VshHelper {}
impl rustyline::hint::Hinter for VshHelper {
    type Hint = String;
}
impl rustyline::validate::Validator for VshHelper {}
