//! Commands that change which persons are on display.
//!
//! None of these touch the aggregate; each installs one new filter.

use crate::error::CommandError;
use crate::model::{Model, PersonFilter, PersonKind};

use super::{invalid_format, CommandResult};

pub fn persons_listed(count: usize) -> String {
    format!("{count} persons listed!")
}

/// List everyone, or everyone of one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPersons {
    role: Option<PersonKind>,
}

impl ListPersons {
    pub const ALL_WORD: &'static str = "list";
    pub const PATIENTS_WORD: &'static str = "lspat";
    pub const STAFF_WORD: &'static str = "lsstf";

    pub fn new(role: Option<PersonKind>) -> Self {
        Self { role }
    }

    pub fn parse(name: &str) -> Result<Self, CommandError> {
        match name {
            Self::ALL_WORD => Ok(Self::new(None)),
            Self::PATIENTS_WORD => Ok(Self::new(Some(PersonKind::Patient))),
            Self::STAFF_WORD => Ok(Self::new(Some(PersonKind::Staff))),
            _ => Err(CommandError::UnknownCommand(name.to_string())),
        }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let (filter, message) = match self.role {
            None => (PersonFilter::All, "Listed all persons"),
            Some(PersonKind::Patient) => (PersonFilter::Role(PersonKind::Patient), "Listed all patients"),
            Some(PersonKind::Staff) => (PersonFilter::Role(PersonKind::Staff), "Listed all staff"),
        };
        model.update_filter(filter);
        Ok(CommandResult::success(message))
    }
}

/// List the patients or staff assigned to one ward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListWardMembers {
    ward: String,
    role: PersonKind,
}

impl ListWardMembers {
    pub const PATIENTS_WORD: &'static str = "lswardpat";
    pub const STAFF_WORD: &'static str = "lswardstf";

    pub fn new(ward: impl Into<String>, role: PersonKind) -> Self {
        Self {
            ward: ward.into(),
            role,
        }
    }

    pub fn parse(name: &str, args: &str) -> Result<Self, CommandError> {
        let role = match name {
            Self::PATIENTS_WORD => PersonKind::Patient,
            Self::STAFF_WORD => PersonKind::Staff,
            _ => return Err(CommandError::UnknownCommand(name.to_string())),
        };
        let ward = args.trim();
        if ward.is_empty() {
            return Err(invalid_format(name));
        }
        Ok(Self::new(ward, role))
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let Some(position) = model
            .patientist()
            .wards()
            .iter()
            .position(|ward| ward.name() == self.ward)
        else {
            return Err(CommandError::WardNotFound(self.ward.clone()));
        };

        model.update_filter(PersonFilter::InWard {
            ward: self.ward.clone(),
            role: Some(self.role),
        });
        let count = model.filtered_persons().len();
        Ok(CommandResult::success(persons_listed(count)).with_ward_detail(position))
    }
}

/// Find persons whose names contain any keyword as a whole word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindPersons {
    keywords: Vec<String>,
}

impl FindPersons {
    pub const COMMAND_WORD: &'static str = "find";

    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
        if keywords.is_empty() {
            return Err(invalid_format(Self::COMMAND_WORD));
        }
        Ok(Self::new(keywords))
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filter(PersonFilter::NameKeywords {
            keywords: self.keywords.clone(),
            role: None,
        });
        let count = model.filtered_persons().len();
        Ok(CommandResult::success(persons_listed(count)))
    }
}
