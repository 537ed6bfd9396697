//! Status details on patients.

use crate::commands::parse::{parse_index, ArgMap, Index, PREFIX_STATUS};
use crate::error::CommandError;
use crate::model::{Model, StatusDetail};

use super::{invalid_format, person_at, CommandResult};

/// Append status details to the patient at a displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddStatus {
    index: Index,
    status: Vec<StatusDetail>,
}

impl AddStatus {
    pub const COMMAND_WORD: &'static str = "addstatus";

    pub fn new(index: Index, status: Vec<StatusDetail>) -> Self {
        Self { index, status }
    }

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let map = ArgMap::tokenize(args, &[PREFIX_STATUS]);
        let index = parse_index(map.preamble(), Self::COMMAND_WORD)?;
        let values = map.all_values(PREFIX_STATUS);
        if values.is_empty() {
            return Err(invalid_format(Self::COMMAND_WORD));
        }
        let status = values
            .into_iter()
            .map(StatusDetail::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(index, status))
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let id = person_at(model, self.index)?.person.id.clone();
        let updated = model.mutate(|patientist| {
            patientist.update_person(&id, |person| {
                person.add_status(&self.status)?;
                Ok(person.clone())
            })
        })?;

        let added: Vec<&str> = self.status.iter().map(StatusDetail::as_str).collect();
        Ok(CommandResult::success(format!(
            "New status [{}] added to {updated}",
            added.join(", ")
        )))
    }
}

/// Remove one status detail, numbered from 1, from a patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStatus {
    index: Index,
    status_number: Index,
}

impl DeleteStatus {
    pub const COMMAND_WORD: &'static str = "delstatus";

    pub fn new(index: Index, status_number: Index) -> Self {
        Self {
            index,
            status_number,
        }
    }

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let map = ArgMap::tokenize(args, &[PREFIX_STATUS]);
        let index = parse_index(map.preamble(), Self::COMMAND_WORD)?;
        let values = map.all_values(PREFIX_STATUS);
        let [number] = values.as_slice() else {
            return Err(invalid_format(Self::COMMAND_WORD));
        };
        let status_number = parse_index(number, Self::COMMAND_WORD)?;
        Ok(Self::new(index, status_number))
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let id = person_at(model, self.index)?.person.id.clone();
        let (removed, name) = model.mutate(|patientist| {
            patientist.update_person(&id, |person| {
                let removed = person.remove_status(self.status_number.zero_based())?;
                Ok((removed, person.name.clone()))
            })
        })?;
        Ok(CommandResult::success(format!(
            "Removed status \"{removed}\" from {name}"
        )))
    }
}
