//! VirtuShell command-line entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vsh_core::{Executor, ShellContext};
use vsh_ui::UiConfig;

/// Simple VirtuShell CLI wrapper.
#[derive(Parser, Debug)]
#[command(author, version, about = "VirtuShell command-line interface", long_about = None)]
struct Cli {
    /// Command to execute instead of launching the interactive shell.
    #[arg()]
    command: Option<String>,

    /// Skip the startup greeting in interactive mode.
    #[arg(long)]
    no_greeting: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut context = ShellContext::new();
    let mut executor = Executor::new();
    for builtin in vsh_builtins::register_all_builtins() {
        executor.register_builtin(builtin);
    }
    tracing::debug!(builtins = executor.builtin_names().len(), "session ready");

    if let Some(cmd) = cli.command {
        let result = executor.run_line(&mut context, &cmd);
        for line in &result.lines {
            println!("{line}");
        }
        std::process::exit(result.exit_code);
    }

    let mut config = UiConfig::load();
    if cli.no_greeting {
        config.greeting.clear();
    }
    vsh_ui::run_interactive(context, executor, &config)
}

/// Diagnostics go to stderr so the simulated terminal output stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("VSH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
