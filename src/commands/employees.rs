//! Employee directory listing.

use crate::api::ShiftBackend;
use crate::libs::{messages::Message, view::View};
use crate::msg_print;
use anyhow::Result;

/// Prints the employee directory as a table.
pub async fn cmd<B: ShiftBackend>(backend: &B) -> Result<()> {
    let employees = backend.list_employees().await?;
    msg_print!(Message::EmployeesHeader, true);
    View::employees(&employees)
}
