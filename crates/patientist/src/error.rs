//! Error types for the model and command layers.
//!
//! Every failure carries an [`ErrorKind`] so callers (and tests) can tell a
//! missing ward from a bad index without matching on message text.

use thiserror::Error;

/// Coarse classification shared by model and command errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    IndexOutOfBounds,
    InvalidState,
    InvalidInput,
    Conflict,
}

/// Failures raised by the aggregate and its entities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Ward not found: {0}")]
    WardNotFound(String),

    #[error("Ward already exists: {0}")]
    DuplicateWard(String),

    #[error("Ward {0} still has persons assigned to it")]
    WardNotEmpty(String),

    #[error("No person with ID {0}")]
    PersonNotFound(String),

    #[error("A person with ID {0} already exists")]
    DuplicatePerson(String),

    #[error("Ward of patient is incorrect: {id} is not in ward {ward}")]
    PatientNotInWard { id: String, ward: String },

    #[error("Patient {id} is already in ward {ward}")]
    SameWard { id: String, ward: String },

    #[error("{0} is not a patient")]
    NotAPatient(String),

    #[error("{0} is not a staff member")]
    NotStaff(String),

    #[error("Status number {index} is invalid for {id}")]
    StatusOutOfRange { id: String, index: usize },

    #[error("{0}")]
    InvalidField(String),
}

impl ModelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::WardNotFound(_) | Self::PersonNotFound(_) => ErrorKind::NotFound,
            Self::DuplicateWard(_) | Self::DuplicatePerson(_) => ErrorKind::Conflict,
            Self::WardNotEmpty(_)
            | Self::PatientNotInWard { .. }
            | Self::SameWard { .. }
            | Self::NotAPatient(_)
            | Self::NotStaff(_) => ErrorKind::InvalidState,
            Self::StatusOutOfRange { .. } => ErrorKind::IndexOutOfBounds,
            Self::InvalidField(_) => ErrorKind::InvalidInput,
        }
    }
}

/// Failures raised while parsing or executing a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid command format!\n{usage}")]
    InvalidFormat { usage: &'static str },

    #[error("The person index provided is invalid")]
    InvalidPersonIndex,

    #[error("Ward [{0}] not found.")]
    WardNotFound(String),

    #[error("At least one field to edit must be provided.")]
    NothingToEdit,

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Empty
            | Self::UnknownCommand(_)
            | Self::InvalidFormat { .. }
            | Self::NothingToEdit => ErrorKind::InvalidInput,
            Self::InvalidPersonIndex => ErrorKind::IndexOutOfBounds,
            Self::WardNotFound(_) => ErrorKind::NotFound,
            Self::Model(err) => err.kind(),
        }
    }
}
