//! Reference data of the local database.
//!
//! The shift service owns its stores, employees and holidays; with the local
//! backend they are managed here.

use super::input::parse_date;
use crate::db::shifts::LocalBackend;
use crate::libs::{
    config::{BackendKind, Config},
    messages::Message,
    shift::{Employee, Holiday, Store},
};
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

/// Command-line arguments for the local reference data commands.
#[derive(Debug, Args)]
pub struct LocalArgs {
    #[command(subcommand)]
    command: LocalCommand,
}

#[derive(Debug, Subcommand)]
enum LocalCommand {
    /// Add a store
    AddStore {
        /// Store name, e.g. `Tienda 3`
        name: String,
        /// Street address
        #[arg(short, long, default_value = "")]
        address: String,
    },
    /// Add an employee
    AddEmployee {
        /// First name
        name: String,
        /// Surname, shown after the name
        #[arg(short, long, default_value = "")]
        surname: String,
        /// National identity number
        #[arg(short, long, default_value = "")]
        dni: String,
        /// Company ID, used for shifts created without one
        #[arg(long)]
        company: Option<i64>,
        /// Company name shown in listings
        #[arg(long, requires = "company")]
        company_name: Option<String>,
    },
    /// Add or rename a holiday
    AddHoliday {
        /// `YYYY-MM-DD`
        date: String,
        /// Name of the holiday, e.g. `Fiestas Patrias`
        description: String,
    },
    /// Remove a holiday
    RemoveHoliday {
        /// `YYYY-MM-DD`
        date: String,
    },
}

/// Executes a local reference data subcommand.
///
/// # Arguments
///
/// * `args` - Parsed command-line arguments
/// * `config` - Loaded configuration; the command refuses to run unless the
///   local backend is selected
///
/// # Returns
///
/// Returns `Ok(())` once the change is stored. Removing a holiday that does
/// not exist is reported but is not an error.
pub fn cmd(args: LocalArgs, config: &Config) -> Result<()> {
    if config.backend != BackendKind::Local {
        msg_bail_anyhow!(Message::LocalBackendOnly);
    }
    let backend = LocalBackend::open()?;

    match args.command {
        LocalCommand::AddStore { name, address } => {
            let store = backend.add_store(&Store::new(&name, &address))?;
            msg_success!(Message::StoreAdded(store.id.unwrap_or_default(), store.name));
        }
        LocalCommand::AddEmployee {
            name,
            surname,
            dni,
            company,
            company_name,
        } => {
            let employee = backend.add_employee(&Employee {
                id: 0,
                name,
                surname,
                dni,
                company_id: company,
                company_name,
            })?;
            msg_success!(Message::EmployeeAdded(employee.id, employee.full_name()));
        }
        LocalCommand::AddHoliday { date, description } => {
            let date = parse_date(&date)?;
            backend.add_holiday(&Holiday::new(date, &description))?;
            msg_success!(Message::HolidayAdded(date.to_string()));
        }
        LocalCommand::RemoveHoliday { date } => {
            let date = parse_date(&date)?;
            if backend.remove_holiday(date)? {
                msg_success!(Message::HolidayRemoved(date.to_string()));
            } else {
                msg_info!(Message::HolidayNotFound(date.to_string()));
            }
        }
    }

    Ok(())
}
