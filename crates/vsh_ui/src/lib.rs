//! Terminal front end for VirtuShell.
//!
//! This crate owns everything the simulated shell core deliberately does
//! not: line editing, Tab completion wiring, history, the prompt, and
//! screen clearing. The core hands back plain text lines and an optional
//! clear-screen effect; rendering them is this crate's whole job.

pub use completion::VshHelper;
pub use config::UiConfig;

pub mod completion;
pub mod config;

use anyhow::Result;
use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};
use rustyline::{config::Config, error::ReadlineError, history::DefaultHistory, Editor};
use std::{
    cell::RefCell,
    fs,
    io::{self, Write},
    rc::Rc,
};
use vsh_core::{ExecutionResult, Executor, ShellContext};

/// Run the interactive session until Ctrl-C, Ctrl-D, or a readline failure.
///
/// Takes ownership of the session state; command execution and completion
/// share it through a `Rc<RefCell<..>>` because rustyline holds the helper
/// for the lifetime of the editor.
pub fn run_interactive(ctx: ShellContext, executor: Executor, config: &UiConfig) -> Result<()> {
    let session = Rc::new(RefCell::new(ctx));

    let editor_config = Config::builder()
        .history_ignore_space(true)
        .history_ignore_dups(true)?
        .completion_type(rustyline::CompletionType::List)
        .build();
    let mut editor: Editor<VshHelper, DefaultHistory> = Editor::with_config(editor_config)?;
    editor.set_helper(Some(VshHelper::new(Rc::clone(&session))));

    let history_path = UiConfig::history_path();
    if config.save_history {
        if let Some(ref path) = history_path {
            let _ = editor.load_history(path);
        }
    }

    if !config.greeting.is_empty() {
        println!("{}", config.greeting);
    }

    loop {
        let prompt = format!("{}{}", session.borrow().cwd_display(), config.prompt_suffix);
        match editor.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                let result = {
                    let mut state = session.borrow_mut();
                    executor.run_line(&mut state, &line)
                };
                render(&result)?;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(anyhow::anyhow!("Readline error: {err}")),
        }
    }

    if config.save_history {
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = editor.save_history(path);
        }
    }

    Ok(())
}

/// Print one command's output, honoring the clear-screen effect first.
pub fn render(result: &ExecutionResult) -> Result<()> {
    let mut stdout = io::stdout();
    if result.clear_screen {
        execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    }
    for line in &result.lines {
        println!("{line}");
    }
    stdout.flush()?;
    Ok(())
}
