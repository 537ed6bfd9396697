//! Ward management and patient transfers.

use crate::commands::parse::{parse_index, ArgMap, Index, PREFIX_WARD};
use crate::error::{CommandError, ModelError};
use crate::model::{Model, WardName};

use super::{invalid_format, person_at, CommandResult};

fn single_ward(args: &str, command: &str) -> Result<WardName, CommandError> {
    let map = ArgMap::tokenize(args, &[PREFIX_WARD]);
    match map.all_values(PREFIX_WARD).as_slice() {
        [name] if map.preamble().is_empty() => Ok(WardName::parse(name)?),
        _ => Err(invalid_format(command)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddWard {
    name: WardName,
}

impl AddWard {
    pub const COMMAND_WORD: &'static str = "addward";

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        single_ward(args, Self::COMMAND_WORD).map(|name| Self { name })
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.mutate(|patientist| patientist.add_ward(self.name.clone()))?;
        Ok(CommandResult::success(format!("New ward added: {}", self.name)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteWard {
    name: WardName,
}

impl DeleteWard {
    pub const COMMAND_WORD: &'static str = "delward";

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        single_ward(args, Self::COMMAND_WORD).map(|name| Self { name })
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.mutate(|patientist| patientist.remove_ward(self.name.as_str()))?;
        Ok(CommandResult::success(format!("Deleted ward: {}", self.name)))
    }
}

/// Move the patient at a displayed index from one ward to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferWard {
    index: Index,
    from: String,
    to: String,
}

impl TransferWard {
    pub const COMMAND_WORD: &'static str = "trfWard";

    pub fn new(index: Index, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            index,
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let map = ArgMap::tokenize(args, &[PREFIX_WARD]);
        let index = parse_index(map.preamble(), Self::COMMAND_WORD)?;
        match map.all_values(PREFIX_WARD).as_slice() {
            [from, to] => Ok(Self::new(index, *from, *to)),
            _ => Err(invalid_format(Self::COMMAND_WORD)),
        }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        for ward in [&self.from, &self.to] {
            if !model.has_ward(ward) {
                return Err(ModelError::WardNotFound(ward.clone()).into());
            }
        }
        let id = person_at(model, self.index)?.person.id.clone();

        model.mutate(|patientist| patientist.transfer_patient(&id, &self.from, &self.to))?;

        let message = format!(
            "Patient {} has been transferred from ward {} to ward {}",
            self.index.one_based(),
            self.from,
            self.to
        );
        let target = model
            .patientist()
            .wards()
            .iter()
            .position(|ward| ward.name() == self.to);
        let result = CommandResult::success(message);
        Ok(match target {
            Some(position) => result.with_ward_detail(position),
            None => result,
        })
    }
}

/// Summarise every ward with its head counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListWards;

impl ListWards {
    pub const COMMAND_WORD: &'static str = "lsward";

    pub fn execute(&self, model: &Model) -> CommandResult {
        let wards = model.patientist().wards();
        if wards.is_empty() {
            return CommandResult::success("No wards yet.");
        }
        let mut lines = vec![format!("{} wards listed!", wards.len())];
        lines.extend(
            wards
                .iter()
                .enumerate()
                .map(|(i, ward)| format!("{}. {ward}", i + 1)),
        );
        CommandResult::success(lines.join("\n"))
    }
}
