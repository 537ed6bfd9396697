//! Person records and their validated fields.
//!
//! A person is either a patient or a staff member; the difference lives in
//! [`Role`] rather than in separate types so the aggregate can store both in
//! the same ward. Field newtypes validate on construction and on
//! deserialization, so a loaded data file cannot smuggle in bad values.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

fn is_alphanumeric_words(value: &str) -> bool {
    !value.is_empty()
        && value
            .split(' ')
            .all(|word| !word.is_empty() && word.chars().all(char::is_alphanumeric))
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || "+_.-".contains(ch))
        && !local.starts_with(|ch: char| "+_.-".contains(ch))
        && !local.ends_with(|ch: char| "+_.-".contains(ch));
    let domain_ok = !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
        })
        && domain.rsplit('.').next().is_some_and(|last| last.len() >= 2);
    local_ok && domain_ok
}

text_field!(
    /// Full name of a person.
    Name,
    "Names should only contain alphanumeric characters and spaces, and it should not be blank",
    is_alphanumeric_words
);

text_field!(
    Phone,
    "Phone numbers should only contain numbers, and it should be at least 3 digits long",
    |value| value.len() >= 3 && value.chars().all(|ch| ch.is_ascii_digit())
);

text_field!(
    Email,
    "Emails should be of the format local-part@domain",
    is_valid_email
);

text_field!(
    Address,
    "Addresses can take any values, and it should not be blank",
    |value| !value.is_empty()
);

text_field!(
    Tag,
    "Tags names should be alphanumeric",
    |value| !value.is_empty() && value.chars().all(char::is_alphanumeric)
);

text_field!(
    /// A free-text status update on a patient, e.g. "Feeling ok".
    StatusDetail,
    "Status details should not be blank",
    |value| !value.is_empty()
);

text_field!(
    /// Job title of a staff member, e.g. "Nurse".
    StaffTitle,
    "Staff titles should only contain alphanumeric characters and spaces, and it should not be blank",
    is_alphanumeric_words
);

/// Identity key of a person. Stored upper-case so `s123a` and `S123A` collide.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdNumber(String);

impl IdNumber {
    pub const CONSTRAINT: &'static str =
        "ID numbers should only contain alphanumeric characters, and it should not be blank";

    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            return Err(ModelError::InvalidField(Self::CONSTRAINT.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IdNumber {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IdNumber> for String {
    fn from(value: IdNumber) -> Self {
        value.0
    }
}

impl fmt::Display for IdNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which side of the role split a person is on, without the role's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonKind {
    Patient,
    Staff,
}

impl PersonKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Staff => "staff",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Role {
    Patient {
        #[serde(default)]
        status: Vec<StatusDetail>,
    },
    Staff {
        title: StaffTitle,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub id: IdNumber,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    pub role: Role,
}

impl Person {
    pub fn kind(&self) -> PersonKind {
        match self.role {
            Role::Patient { .. } => PersonKind::Patient,
            Role::Staff { .. } => PersonKind::Staff,
        }
    }

    pub fn is_patient(&self) -> bool {
        self.kind() == PersonKind::Patient
    }

    /// Status details in the order they were added; `None` for staff.
    #[cfg(test)]
    pub fn status(&self) -> Option<&[StatusDetail]> {
        match &self.role {
            Role::Patient { status } => Some(status),
            Role::Staff { .. } => None,
        }
    }

    pub fn add_status(&mut self, details: &[StatusDetail]) -> Result<(), ModelError> {
        match &mut self.role {
            Role::Patient { status } => {
                status.extend(details.iter().cloned());
                Ok(())
            }
            Role::Staff { .. } => Err(ModelError::NotAPatient(self.name.to_string())),
        }
    }

    /// Remove the status detail at a zero-based position.
    pub fn remove_status(&mut self, index: usize) -> Result<StatusDetail, ModelError> {
        match &mut self.role {
            Role::Patient { status } if index < status.len() => Ok(status.remove(index)),
            Role::Patient { .. } => Err(ModelError::StatusOutOfRange {
                id: self.id.to_string(),
                index: index + 1,
            }),
            Role::Staff { .. } => Err(ModelError::NotAPatient(self.name.to_string())),
        }
    }

    /// Case-insensitive whole-word match against any word of the name.
    pub fn name_matches_any(&self, keywords: &[String]) -> bool {
        self.name.as_str().split_whitespace().any(|word| {
            keywords
                .iter()
                .any(|keyword| word.eq_ignore_ascii_case(keyword))
        })
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; ID: {}; Phone: {}; Email: {}; Address: {}",
            self.name, self.id, self.phone, self.email, self.address
        )?;
        match &self.role {
            Role::Patient { status } => {
                let joined: Vec<&str> = status.iter().map(StatusDetail::as_str).collect();
                write!(f, "; Status: [{}]", joined.join(", "))?;
            }
            Role::Staff { title } => write!(f, "; Role: {title}")?,
        }
        if !self.tags.is_empty() {
            let joined: Vec<&str> = self.tags.iter().map(Tag::as_str).collect();
            write!(f, "; Tags: [{}]", joined.join(", "))?;
        }
        Ok(())
    }
}
