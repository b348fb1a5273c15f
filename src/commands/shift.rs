//! Shift editing.
//!
//! `add`, `split` and `edit` open an edit dialog ([`Modal`]) holding the form.
//! Values passed as flags are used as they are; any missing value is asked
//! for interactively, and a rejected form can then be corrected and sent
//! again. Without a terminal prompt a rejected form ends the command with
//! the field messages.
//!
//! ```bash
//! turnos shift add --employee 4 --date 2025-03-10 --start 08:00 --end 17:00 --store 2
//! turnos shift split --employee 4 --morning 08:00-12:00 --afternoon 16:00-20:00 --store 2
//! turnos shift edit 31 --employee 4 --end 18:00
//! turnos shift delete 31
//! ```

use super::input::{parse_date, parse_window};
use crate::api::ShiftBackend;
use crate::libs::{
    error::{SubmitError, ValidationError},
    messages::Message,
    modal::Modal,
    shift::{Employee, Shift, ShiftDraft, ShiftSnapshot, SplitShiftProposal, Store, WindowDraft},
    submission::{Outcome, ShiftEditor},
    validation::{has_unsaved_changes, split_has_input},
    view::View,
};
use crate::{msg_bail_anyhow, msg_error, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// Command-line arguments for the shift command group.
#[derive(Debug, Args)]
pub struct ShiftArgs {
    #[command(subcommand)]
    command: ShiftCommand,
}

#[derive(Debug, Subcommand)]
enum ShiftCommand {
    /// Create a shift
    Add(AddArgs),
    /// Create a split shift: a morning and an afternoon part on one day
    Split(SplitArgs),
    /// Change an existing shift
    Edit(EditArgs),
    /// Delete a shift
    Delete(DeleteArgs),
    /// List every shift of an employee
    List(ListArgs),
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Employee ID
    #[arg(short, long)]
    employee: i64,

    /// Shift date: `today` or `YYYY-MM-DD`
    #[arg(short, long, default_value = "today")]
    date: String,

    /// Entry time, `HH:MM`
    #[arg(long)]
    start: Option<String>,

    /// Exit time, `HH:MM`
    #[arg(long)]
    end: Option<String>,

    /// Store ID
    #[arg(short, long)]
    store: Option<i64>,

    /// Company ID, defaults to the employee's company
    #[arg(long)]
    company: Option<i64>,
}

/// Arguments of `shift split`. Each part is given as one `HH:MM-HH:MM` value.
#[derive(Debug, Args)]
struct SplitArgs {
    /// Employee ID
    #[arg(short, long)]
    employee: i64,

    /// Shift date: `today` or `YYYY-MM-DD`
    #[arg(short, long, default_value = "today")]
    date: String,

    /// Morning part, `HH:MM-HH:MM`
    #[arg(long)]
    morning: Option<String>,

    /// Afternoon part, `HH:MM-HH:MM`
    #[arg(long)]
    afternoon: Option<String>,

    /// Store ID, shared by both parts
    #[arg(short, long)]
    store: Option<i64>,

    /// Company ID, defaults to the employee's company
    #[arg(long)]
    company: Option<i64>,
}

#[derive(Debug, Args)]
struct EditArgs {
    /// Shift ID
    id: i64,

    /// Employee the shift belongs to
    #[arg(short, long)]
    employee: i64,

    /// New date: `today` or `YYYY-MM-DD`
    #[arg(short, long)]
    date: Option<String>,

    /// New entry time, `HH:MM`
    #[arg(long)]
    start: Option<String>,

    /// New exit time, `HH:MM`
    #[arg(long)]
    end: Option<String>,

    /// New store ID
    #[arg(short, long)]
    store: Option<i64>,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    /// Shift ID
    id: i64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Employee ID
    #[arg(short, long)]
    employee: i64,
}

/// Executes a shift subcommand.
///
/// # Arguments
///
/// * `args` - Parsed command-line arguments
/// * `backend` - Backend the shift is stored in
///
/// # Returns
///
/// Returns `Ok(())` when the shift is saved, nothing changed or the user
/// cancelled, or an error when the backend refused the shift.
pub async fn cmd<B: ShiftBackend>(args: ShiftArgs, backend: &B) -> Result<()> {
    match args.command {
        ShiftCommand::Add(args) => add(args, backend).await,
        ShiftCommand::Split(args) => split(args, backend).await,
        ShiftCommand::Edit(args) => edit(args, backend).await,
        ShiftCommand::Delete(args) => delete(args, backend).await,
        ShiftCommand::List(args) => {
            let shifts = backend.list_shifts_for_employee(args.employee).await?;
            View::shifts(&shifts)
        }
    }
}

/// Creates a simple shift. Prompts for the form when a flag is missing.
async fn add<B: ShiftBackend>(args: AddArgs, backend: &B) -> Result<()> {
    let (employee, stores) = load_form_data(backend, args.employee).await?;

    let mut draft = ShiftDraft::new(employee.id, args.company.or(employee.company_id), parse_date(&args.date)?);
    draft.store_id = args.store;
    draft.start = args.start.unwrap_or_default();
    draft.end = args.end.unwrap_or_default();
    let interactive = draft.start.is_empty() || draft.end.is_empty() || draft.store_id.is_none();

    let mut modal = Modal::new();
    modal.open(draft);
    modal.animation_finished();

    let editor = ShiftEditor::new(backend);
    let outcome = submit_simple(&editor, &mut modal, &stores, None, interactive).await;
    close(&mut modal);
    report(outcome?)
}

/// Edits shift `args.id`. Without any change flag the whole form is
/// prompted, prefilled with the stored values.
async fn edit<B: ShiftBackend>(args: EditArgs, backend: &B) -> Result<()> {
    let shifts = backend.list_shifts_for_employee(args.employee).await?;
    let shift: &Shift = shifts
        .iter()
        .find(|shift| shift.id == Some(args.id))
        .ok_or_else(|| msg_error_anyhow!(Message::ShiftNotFound(args.id)))?;
    let stores = backend.list_stores().await?;
    let original = shift.snapshot();

    let interactive = args.date.is_none() && args.start.is_none() && args.end.is_none() && args.store.is_none();
    let mut draft = shift.to_draft();
    if let Some(date) = &args.date {
        draft.date = parse_date(date)?;
    }
    if let Some(start) = args.start {
        draft.start = start;
    }
    if let Some(end) = args.end {
        draft.end = end;
    }
    if args.store.is_some() {
        draft.store_id = args.store;
    }

    msg_print!(Message::EditingShift(shift.employee_name.clone(), shift.date.to_string()));

    let mut modal = Modal::new();
    modal.open(draft);
    modal.animation_finished();

    let editor = ShiftEditor::new(backend);
    let outcome = submit_simple(&editor, &mut modal, &stores, Some(&original), interactive).await;
    close(&mut modal);
    report(outcome?)
}

/// Creates both halves of a split shift.
async fn split<B: ShiftBackend>(args: SplitArgs, backend: &B) -> Result<()> {
    let (employee, stores) = load_form_data(backend, args.employee).await?;

    let mut proposal = SplitShiftProposal::new(employee.id, args.company.or(employee.company_id), parse_date(&args.date)?);
    proposal.store_id = args.store;
    if let Some(morning) = &args.morning {
        proposal.morning = parse_window(morning)?;
    }
    if let Some(afternoon) = &args.afternoon {
        proposal.afternoon = parse_window(afternoon)?;
    }
    let interactive = proposal.morning.is_blank() || proposal.afternoon.is_blank() || proposal.store_id.is_none();

    let mut modal = Modal::new();
    modal.open(proposal);
    modal.animation_finished();

    let editor = ShiftEditor::new(backend);
    let outcome = submit_split(&editor, &mut modal, &stores, args.store, interactive).await;
    close(&mut modal);
    report(outcome?)
}

/// Deletes a shift after confirmation, unless `--yes` is given.
async fn delete<B: ShiftBackend>(args: DeleteArgs, backend: &B) -> Result<()> {
    if !args.yes
        && !Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteShift(args.id).to_string())
            .default(false)
            .interact()?
    {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    ShiftEditor::new(backend).delete(args.id).await.map_err(submit_failure)?;
    msg_success!(Message::ShiftDeleted(args.id));
    Ok(())
}

/// Looks up the employee the form is for and the stores it can pick from.
async fn load_form_data<B: ShiftBackend>(backend: &B, employee_id: i64) -> Result<(Employee, Vec<Store>)> {
    let (employees, stores) = tokio::try_join!(backend.list_employees(), backend.list_stores())?;
    let employee = employees
        .into_iter()
        .find(|employee| employee.id == employee_id)
        .ok_or_else(|| msg_error_anyhow!(Message::EmployeeNotFound(employee_id)))?;
    Ok((employee, stores))
}

/// Runs the simple shift dialog until it is saved or abandoned. `Ok(None)`
/// means the user cancelled or nothing changed.
async fn submit_simple<B: ShiftBackend>(
    editor: &ShiftEditor<'_, B>,
    modal: &mut Modal<ShiftDraft>,
    stores: &[Store],
    original: Option<&ShiftSnapshot>,
    interactive: bool,
) -> Result<Option<Outcome>> {
    loop {
        let Some(draft) = modal.form_mut() else {
            return Ok(None);
        };
        if interactive {
            prompt_simple(draft, stores)?;
        }
        if original.is_some() && !has_unsaved_changes(&draft.snapshot(), original) {
            msg_info!(Message::NoChangesDetected);
            return Ok(None);
        }
        if !modal.can_submit() {
            return Ok(None);
        }

        let Some(draft) = modal.form() else {
            return Ok(None);
        };
        match editor.submit_simple(draft).await {
            Ok(outcome) => return Ok(Some(outcome)),
            Err(SubmitError::Invalid(errors)) if interactive => {
                print_rejection(&errors);
                let dirty = has_unsaved_changes(&draft.snapshot(), original);
                if !retry(dirty)? {
                    msg_info!(Message::OperationCancelled);
                    return Ok(None);
                }
                editor.reset();
            }
            Err(error) => return Err(submit_failure(error)),
        }
    }
}

/// Split shift counterpart of [`submit_simple`]. Discarding asks for
/// confirmation once any part or a new store has been entered.
async fn submit_split<B: ShiftBackend>(
    editor: &ShiftEditor<'_, B>,
    modal: &mut Modal<SplitShiftProposal>,
    stores: &[Store],
    original_store: Option<i64>,
    interactive: bool,
) -> Result<Option<Outcome>> {
    loop {
        let Some(proposal) = modal.form_mut() else {
            return Ok(None);
        };
        if interactive {
            prompt_split(proposal, stores)?;
        }
        if !modal.can_submit() {
            return Ok(None);
        }

        let Some(proposal) = modal.form() else {
            return Ok(None);
        };
        match editor.submit_split(proposal).await {
            Ok(outcome) => return Ok(Some(outcome)),
            Err(SubmitError::Invalid(errors)) if interactive => {
                print_rejection(&errors);
                if !retry(split_has_input(proposal, original_store))? {
                    msg_info!(Message::OperationCancelled);
                    return Ok(None);
                }
                editor.reset();
            }
            Err(error) => return Err(submit_failure(error)),
        }
    }
}

/// Asks whether to correct a rejected form. Declining with unsaved input
/// asks once more before it is thrown away.
fn retry(dirty: bool) -> Result<bool> {
    let theme = ColorfulTheme::default();
    if Confirm::with_theme(&theme)
        .with_prompt(Message::ConfirmRetry.to_string())
        .default(true)
        .interact()?
    {
        return Ok(true);
    }
    if !dirty {
        return Ok(false);
    }
    let discard = Confirm::with_theme(&theme)
        .with_prompt(Message::ConfirmDiscardChanges.to_string())
        .default(false)
        .interact()?;
    Ok(!discard)
}

/// Prompts entry, exit and store, starting from the draft's values.
fn prompt_simple(draft: &mut ShiftDraft, stores: &[Store]) -> Result<()> {
    let theme = ColorfulTheme::default();
    draft.start = Input::with_theme(&theme)
        .with_prompt(Message::PromptEntry.to_string())
        .with_initial_text(draft.start.clone())
        .allow_empty(true)
        .interact_text()?;
    draft.end = Input::with_theme(&theme)
        .with_prompt(Message::PromptExit.to_string())
        .with_initial_text(draft.end.clone())
        .allow_empty(true)
        .interact_text()?;
    draft.store_id = select_store(stores, draft.store_id)?;
    Ok(())
}

fn prompt_split(proposal: &mut SplitShiftProposal, stores: &[Store]) -> Result<()> {
    proposal.morning = prompt_window(Message::PromptMorning, &proposal.morning)?;
    proposal.afternoon = prompt_window(Message::PromptAfternoon, &proposal.afternoon)?;
    proposal.store_id = select_store(stores, proposal.store_id)?;
    Ok(())
}

/// Prompts one `HH:MM-HH:MM` part. An empty answer leaves the part blank.
fn prompt_window(prompt: Message, current: &WindowDraft) -> Result<WindowDraft> {
    let initial = if current.is_blank() {
        String::new()
    } else {
        format!("{}-{}", current.start, current.end)
    };
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    if value.trim().is_empty() {
        return Ok(WindowDraft::default());
    }
    parse_window(&value)
}

/// Store picker, preselecting `current` when it is in the list.
fn select_store(stores: &[Store], current: Option<i64>) -> Result<Option<i64>> {
    if stores.is_empty() {
        msg_bail_anyhow!(Message::NoStoresAvailable);
    }
    let names: Vec<&str> = stores.iter().map(|store| store.name.as_str()).collect();
    let default = stores.iter().position(|store| store.id.is_some() && store.id == current).unwrap_or(0);
    let selected = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptStore.to_string())
        .items(&names)
        .default(default)
        .interact()?;
    Ok(stores[selected].id)
}

fn close<T>(modal: &mut Modal<T>) {
    modal.close();
    modal.animation_finished();
}

fn print_rejection(errors: &ValidationError) {
    msg_error!(Message::ShiftRejected);
    for (field, message) in errors.fields() {
        msg_print!(Message::FieldError(field.to_string(), message.to_string()));
    }
}

/// Turns a failed submission into the user-facing error.
///
/// A split whose second half failed is reported differently depending on
/// whether the stored half could be deleted again.
fn submit_failure(error: SubmitError) -> anyhow::Error {
    match error {
        SubmitError::Busy => msg_error_anyhow!(Message::SubmitBusy),
        SubmitError::Invalid(errors) => {
            print_rejection(&errors);
            msg_error_anyhow!(Message::ShiftRejected)
        }
        SubmitError::Transport(error) => msg_error_anyhow!(Message::ShiftBackendError(error.to_string())),
        SubmitError::PartialFailure {
            kept_id: Some(id), source, ..
        } => {
            msg_warning!(Message::SplitOrphaned(id, source.to_string()));
            msg_error_anyhow!(Message::ShiftBackendError(source.to_string()))
        }
        SubmitError::PartialFailure { source, .. } => msg_error_anyhow!(Message::SplitCompensated(source.to_string())),
    }
}

/// Success message for a saved form. `None` prints nothing.
fn report(outcome: Option<Outcome>) -> Result<()> {
    match outcome {
        Some(Outcome::Created(shift)) => msg_success!(Message::ShiftCreated(shift.window().to_string())),
        Some(Outcome::Updated(shift)) => msg_success!(Message::ShiftUpdated(shift.window().to_string())),
        Some(Outcome::SplitCreated(morning, afternoon)) => msg_success!(Message::SplitShiftCreated(
            morning.window().to_string(),
            afternoon.window().to_string()
        )),
        None => {}
    }
    Ok(())
}
