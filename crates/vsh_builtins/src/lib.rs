//! Built-in commands for VirtuShell
//!
//! One module per command. Every builtin works purely against the
//! [`vsh_core::ShellContext`] it is handed and reports through
//! [`vsh_core::ExecutionResult`] lines; none of them touch the real
//! filesystem or the terminal.

use std::sync::Arc;

use vsh_core::executor::Builtin;

pub mod cat;
pub mod cd;
pub mod chmod;
pub mod clear;
pub mod cp;
pub mod echo;
pub mod find;
pub mod grep;
pub mod help;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod pwd;
pub mod rm;
pub mod touch;

pub use cat::CatBuiltin;
pub use cd::CdBuiltin;
pub use chmod::ChmodBuiltin;
pub use clear::ClearBuiltin;
pub use cp::CpBuiltin;
pub use echo::EchoBuiltin;
pub use find::FindBuiltin;
pub use grep::GrepBuiltin;
pub use help::HelpBuiltin;
pub use ls::LsBuiltin;
pub use mkdir::MkdirBuiltin;
pub use mv::MvBuiltin;
pub use pwd::PwdBuiltin;
pub use rm::RmBuiltin;
pub use touch::TouchBuiltin;

/// Register all built-in commands
pub fn register_all_builtins() -> Vec<Arc<dyn Builtin>> {
    vec![
        Arc::new(MkdirBuiltin),
        Arc::new(LsBuiltin),
        Arc::new(CpBuiltin),
        Arc::new(MvBuiltin),
        Arc::new(CatBuiltin),
        Arc::new(TouchBuiltin),
        Arc::new(RmBuiltin),
        Arc::new(EchoBuiltin),
        Arc::new(GrepBuiltin),
        Arc::new(CdBuiltin),
        Arc::new(FindBuiltin),
        Arc::new(ChmodBuiltin),
        Arc::new(HelpBuiltin),
        Arc::new(ClearBuiltin),
        Arc::new(PwdBuiltin),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_is_registered_once() {
        let builtins = register_all_builtins();
        let mut names: Vec<&str> = builtins.iter().map(|b| b.name()).collect();
        names.sort_unstable();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names, deduped, "duplicate builtin names");
        assert_eq!(names.len(), 15);
    }

    #[test]
    fn usages_mention_their_own_name() {
        for builtin in register_all_builtins() {
            assert!(
                builtin.usage().starts_with(builtin.name()),
                "usage for {} should lead with the command name",
                builtin.name()
            );
        }
    }

    #[test]
    fn descriptions_say_more_than_the_synopsis() {
        for builtin in register_all_builtins() {
            assert!(
                !builtin.synopsis().is_empty(),
                "{} has no synopsis",
                builtin.name()
            );
            assert!(
                builtin.description().len() > builtin.synopsis().len(),
                "{} should describe itself beyond its synopsis",
                builtin.name()
            );
        }
    }
}
