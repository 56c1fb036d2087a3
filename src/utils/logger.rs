use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter directives for this binary's events; other crates stay at `warn`
fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("{}={},warn", env!("CARGO_CRATE_NAME"), level)
}

/// Whether styled output is wanted on stderr.
///
/// `NO_COLOR` wins over `CLICOLOR_FORCE`, which wins over terminal detection.
fn stderr_colors(no_color: bool, force: bool, is_terminal: bool) -> bool {
    !no_color && (force || is_terminal)
}

/// Initialize the logging system.
///
/// Logs go to stderr alongside the trigger diagnostics. `RUST_LOG` wins over `verbose`.
pub fn init(verbose: bool) -> Result<()> {
    let colors = stderr_colors(
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var_os("CLICOLOR_FORCE").is_some_and(|v| v != "0"),
        std::io::stderr().is_terminal(),
    );
    // colored checks stdout by default, but every styled line here goes to stderr
    colored::control::set_override(colors);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(colors)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()?;

    Ok(())
}
