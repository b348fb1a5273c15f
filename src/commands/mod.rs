//! Command-line interface.
//!
//! Every command that reads or writes shifts is generic over
//! [`ShiftBackend`](crate::api::ShiftBackend). [`Cli::menu`] loads the
//! configuration once and hands each command the backend it selects.

pub mod employees;
pub mod holidays;
pub mod init;
pub mod input;
pub mod local;
pub mod month;
pub mod profile;
pub mod report;
pub mod shift;
pub mod stores;
pub mod summary;
pub mod week;

use crate::api::HttpBackend;
use crate::db::shifts::LocalBackend;
use crate::libs::config::{BackendKind, Config};
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use clap::{Parser, Subcommand};

/// Builds the configured backend and evaluates `$body` with it bound to
/// `$backend`. The two backends are distinct types, so the body is expanded
/// once per arm.
macro_rules! with_backend {
    ($config:expr, |$backend:ident| $body:expr) => {
        match $config.backend {
            BackendKind::Http => {
                let $backend = HttpBackend::new(&$config.api());
                $body
            }
            BackendKind::Local => {
                let $backend = LocalBackend::open()?.with_weekly_limit($config.weekly_hours_limit());
                $body
            }
        }
    };
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show the weekly schedule")]
    Week(week::WeekArgs),
    #[command(about = "Show the month calendar")]
    Month(month::MonthArgs),
    #[command(about = "Create, edit and delete shifts", arg_required_else_help = true)]
    Shift(shift::ShiftArgs),
    #[command(about = "List stores")]
    Stores,
    #[command(about = "List holidays")]
    Holidays(holidays::HolidaysArgs),
    #[command(about = "List employees")]
    Employees,
    #[command(about = "Hours worked, holiday shifts or overtime over a period")]
    Report(report::ReportArgs),
    #[command(about = "Monthly summary per employee")]
    Summary(summary::SummaryArgs),
    #[command(about = "Hours by store for one employee")]
    Profile(profile::ProfileArgs),
    #[command(about = "Manage reference data in the local database", arg_required_else_help = true)]
    Local(local::LocalArgs),
}

/// Main command-line interface structure.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parses the command line and runs the selected command.
    ///
    /// `init` runs before any configuration is loaded, so a broken
    /// `config.json` can still be replaced.
    ///
    /// # Returns
    ///
    /// The command's result; errors are printed by `main`.
    pub async fn menu() -> Result<()> {
        match Self::parse().command {
            Commands::Init(args) => init::cmd(args),
            command => Self::run(command).await,
        }
    }

    /// Loads the configuration and dispatches to a command with the
    /// configured backend.
    async fn run(command: Commands) -> Result<()> {
        let config = Config::load()?;
        msg_debug!(Message::UsingBackend(format!("{:?}", config.backend)));

        match command {
            Commands::Init(args) => init::cmd(args),
            Commands::Local(args) => local::cmd(args, &config),
            Commands::Week(args) => with_backend!(config, |backend| week::cmd(args, &backend).await),
            Commands::Month(args) => with_backend!(config, |backend| month::cmd(args, &backend).await),
            Commands::Shift(args) => with_backend!(config, |backend| shift::cmd(args, &backend).await),
            Commands::Stores => with_backend!(config, |backend| stores::cmd(&backend).await),
            Commands::Holidays(args) => with_backend!(config, |backend| holidays::cmd(args, &backend).await),
            Commands::Employees => with_backend!(config, |backend| employees::cmd(&backend).await),
            Commands::Report(args) => with_backend!(config, |backend| report::cmd(args, &backend).await),
            Commands::Summary(args) => with_backend!(config, |backend| summary::cmd(args, &backend).await),
            Commands::Profile(args) => with_backend!(config, |backend| profile::cmd(args, &backend).await),
        }
    }
}
