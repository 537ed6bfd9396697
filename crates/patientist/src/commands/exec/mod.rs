//! Command execution handlers.
//!
//! Each command word maps to a command object with a `parse` constructor
//! and an `execute` method that takes the model explicitly. Handlers return
//! `Result<CommandResult, CommandError>`; [`run_command`] is the boundary
//! where errors become a failed result with a user-facing message.

mod list;
mod person;
mod status;
mod ward;

#[cfg(test)]
mod tests;

use log::{debug, warn};

use crate::error::{CommandError, ModelError};
use crate::model::{Model, PersonRef};

use super::parse::Index;
use super::registry::{command_help_lines, usage};

pub use list::{FindPersons, ListPersons, ListWardMembers};
pub use person::{AddPerson, DeletePerson, EditPerson, ViewPerson};
pub use status::{AddStatus, DeleteStatus};
pub use ward::{AddWard, DeleteWard, ListWards, TransferWard};

/// Result of command execution.
///
/// Besides the message, a command can hint that the detail panes should
/// switch: to the person at a filtered-view position, to a ward by its
/// position in the ward list, to the help text, or out of the program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub ok: bool,
    pub message: String,
    pub person_detail: Option<usize>,
    pub ward_detail: Option<usize>,
    pub show_help: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn failure(err: &CommandError) -> Self {
        Self {
            ok: false,
            message: err.to_string(),
            ..Self::default()
        }
    }

    pub fn with_person_detail(mut self, position: usize) -> Self {
        self.person_detail = Some(position);
        self
    }

    pub fn with_ward_detail(mut self, position: usize) -> Self {
        self.ward_detail = Some(position);
        self
    }
}

pub const MESSAGE_CLEARED: &str = "Patientist has been cleared!";
pub const MESSAGE_EXIT: &str = "Exiting Patientist as requested ...";

pub(crate) fn invalid_format(command: &str) -> CommandError {
    CommandError::InvalidFormat {
        usage: usage(command),
    }
}

/// Resolve a displayed index against the current filtered view.
pub(crate) fn person_at(model: &Model, index: Index) -> Result<PersonRef<'_>, CommandError> {
    model
        .person_at(index.zero_based())
        .ok_or(CommandError::InvalidPersonIndex)
}

fn failure_log_line(name: &str, err: &CommandError) -> String {
    format!("{name} failed ({:?}): {err}", err.kind())
}

/// Dispatch and execute a command, converting any error into a failed result.
pub fn run_command(name: &str, args: &str, model: &mut Model) -> CommandResult {
    match execute(name, args, model) {
        Ok(result) => result,
        Err(err) => {
            warn!("{}", failure_log_line(name, &err));
            CommandResult::failure(&err)
        }
    }
}

/// Dispatch and execute a command by name.
pub fn execute(name: &str, args: &str, model: &mut Model) -> Result<CommandResult, CommandError> {
    debug!("executing {name} with args {args:?}");
    match name {
        AddPerson::PATIENT_WORD => AddPerson::parse_patient(args)?.execute(model),
        AddPerson::STAFF_WORD => AddPerson::parse_staff(args)?.execute(model),
        AddWard::COMMAND_WORD => AddWard::parse(args)?.execute(model),
        DeleteWard::COMMAND_WORD => DeleteWard::parse(args)?.execute(model),
        DeletePerson::COMMAND_WORD => DeletePerson::parse(args)?.execute(model),
        EditPerson::COMMAND_WORD => EditPerson::parse(args)?.execute(model),
        AddStatus::COMMAND_WORD => AddStatus::parse(args)?.execute(model),
        DeleteStatus::COMMAND_WORD => DeleteStatus::parse(args)?.execute(model),
        TransferWard::COMMAND_WORD => TransferWard::parse(args)?.execute(model),
        ViewPerson::COMMAND_WORD => ViewPerson::parse(args)?.execute(model),
        ListPersons::ALL_WORD | ListPersons::PATIENTS_WORD | ListPersons::STAFF_WORD => {
            ListPersons::parse(name)?.execute(model)
        }
        ListWardMembers::PATIENTS_WORD | ListWardMembers::STAFF_WORD => {
            ListWardMembers::parse(name, args)?.execute(model)
        }
        ListWards::COMMAND_WORD => Ok(ListWards.execute(model)),
        FindPersons::COMMAND_WORD => FindPersons::parse(args)?.execute(model),
        "clear" => {
            model.mutate(|patientist| {
                patientist.clear();
                Ok::<_, ModelError>(())
            })?;
            Ok(CommandResult::success(MESSAGE_CLEARED))
        }
        "help" => Ok(CommandResult {
            show_help: true,
            ..CommandResult::success(command_help_lines().join("\n"))
        }),
        "exit" => Ok(CommandResult {
            exit: true,
            ..CommandResult::success(MESSAGE_EXIT)
        }),
        _ => Err(CommandError::UnknownCommand(name.to_string())),
    }
}
