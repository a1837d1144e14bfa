use clap::Parser;
use tracing::Level;

mod cli;
mod clipboard;
mod entropy;
mod error;
mod exits;
mod pass;
mod settings;
mod terminal;
mod tui;

use cli::{CliFlags, prompts, quiet};

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let flags = CliFlags::parse();
    init_logging(flags.verbose, flags.quiet);

    let interactive = flags.interactive
        || (!flags.has_explicit_args() && quiet::is_interactive() && quiet::stdout_is_tty());

    if !interactive {
        cli::run(flags);
        return;
    }

    let config = cli::config_from(&flags);
    match tui::run(config, flags.engine()) {
        Ok(last) if flags.save => {
            if let Err(e) = last.save_to_file() {
                prompts::settings_error(&e.to_string());
            }
        }
        Ok(_) => {}
        Err(e) => {
            terminal::reset_terminal();
            tracing::error!("interactive view failed: {e}");
            prompts::error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so passwords on stdout stay pipe-clean.
fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::WARN,
        (false, 1) => Level::INFO,
        (false, 2) => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
