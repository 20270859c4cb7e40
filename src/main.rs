use rekap::{commands::Cli, libs::messages::macros::is_debug_mode, msg_error};
use std::process::ExitCode;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

fn main() -> ExitCode {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::builder().with_default_directive(LevelFilter::DEBUG.into()).from_env_lossy())
            .with_writer(std::io::stderr)
            .init();
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let text = format!("{:#}", error);
            msg_error!(text.trim_start_matches("❌ "));
            ExitCode::FAILURE
        }
    }
}
