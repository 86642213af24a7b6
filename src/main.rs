//! glyphpick: terminal symbol picker with clipboard integration.

use std::process::ExitCode;

use glyphpick::cli;

fn main() -> ExitCode {
    // Run the CLI (logging is initialized by cli::run based on --log-level and --log-format)
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");

            // Print cause chain in debug mode
            if std::env::var("RUST_BACKTRACE").is_ok() {
                if let Some(source) = std::error::Error::source(&e) {
                    eprintln!("Caused by: {source}");
                }
            }

            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}
