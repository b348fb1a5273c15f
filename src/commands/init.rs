//! Interactive configuration setup.
//!
//! Asks for the backend, the shift service URL when the HTTP backend is
//! chosen, and the weekly hour limit, then writes `config.json` into the
//! per-user data directory. Run it once before any other command; commands
//! started without a configuration fall back to the defaults.

use crate::{
    libs::{
        config::{Config, CONFIG_FILE_NAME},
        data_storage::DataStorage,
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;

/// Command-line arguments for the initialization command.
///
/// Without flags the command runs the setup wizard. `--delete` removes the
/// saved configuration so the next run starts from the defaults again.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating a new one
    ///
    /// Only `config.json` is removed. The local shift database, if any,
    /// is left untouched.
    #[arg(short, long)]
    delete: bool,
}

/// Executes the initialization command.
///
/// Runs the interactive wizard and saves its answers, or deletes the saved
/// configuration when `--delete` is given.
///
/// # Arguments
///
/// * `init_args` - Parsed command-line arguments
///
/// # Returns
///
/// Returns `Ok(())` once the configuration is saved or removed, or an error
/// if a prompt is aborted or the file cannot be written.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    // Deletion mode: drop the file and stop
    if init_args.delete {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        return Ok(());
    }

    // Prompts start from the current values when a configuration exists
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
