use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use turnos::commands::Cli;
use turnos::libs::messages::macros::is_debug_mode;

/// Installs the `tracing` subscriber in debug mode. The filter comes from
/// `RUST_LOG`, defaulting to `turnos=debug`.
fn init_tracing() {
    if !is_debug_mode() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("turnos=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Errors built from messages already carry their ❌ prefix.
            if is_debug_mode() {
                tracing::error!("{:#}", e);
            } else {
                eprintln!("{:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
