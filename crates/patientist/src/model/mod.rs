//! In-memory data model: persons, wards, the aggregate and the filtered view.
//!
//! Command handlers receive a `&mut Model` explicitly; nothing here is global.
//! A successful mutation of the aggregate marks the model dirty so the
//! runner knows to persist it.

macro_rules! text_field {
    ($(#[$meta:meta])* $name:ident, $constraint:expr, $valid:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const CONSTRAINT: &'static str = $constraint;

            pub fn parse(raw: &str) -> Result<Self, ModelError> {
                let trimmed = raw.trim();
                let check: fn(&str) -> bool = $valid;
                if check(trimmed) {
                    Ok(Self(trimmed.to_string()))
                } else {
                    Err(ModelError::InvalidField(Self::CONSTRAINT.to_string()))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ModelError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

mod filter;
mod patientist;
mod person;
mod ward;

pub use filter::PersonFilter;
pub use patientist::{Patientist, PersonRef};
pub use person::{
    Address, Email, IdNumber, Name, Person, PersonKind, Phone, Role, StaffTitle, StatusDetail, Tag,
};
pub use ward::{Ward, WardName};

#[derive(Debug, Clone, Default)]
pub struct Model {
    patientist: Patientist,
    filter: PersonFilter,
    dirty: bool,
}

impl Model {
    pub fn new(patientist: Patientist) -> Self {
        Self {
            patientist,
            filter: PersonFilter::All,
            dirty: false,
        }
    }

    pub fn patientist(&self) -> &Patientist {
        &self.patientist
    }

    /// Run one mutation against the aggregate. The model is only marked
    /// dirty when the mutation succeeds.
    pub fn mutate<T, E>(
        &mut self,
        mutation: impl FnOnce(&mut Patientist) -> Result<T, E>,
    ) -> Result<T, E> {
        let outcome = mutation(&mut self.patientist)?;
        self.dirty = true;
        Ok(outcome)
    }

    pub fn has_ward(&self, name: &str) -> bool {
        self.patientist.has_ward(name)
    }

    #[cfg(test)]
    pub fn filter(&self) -> &PersonFilter {
        &self.filter
    }

    pub fn update_filter(&mut self, filter: PersonFilter) {
        self.filter = filter;
    }

    /// The persons currently on display, re-derived from the aggregate.
    pub fn filtered_persons(&self) -> Vec<PersonRef<'_>> {
        self.patientist
            .persons()
            .filter(|entry| self.filter.matches(entry))
            .collect()
    }

    /// Look up a person by zero-based position in the filtered view.
    pub fn person_at(&self, position: usize) -> Option<PersonRef<'_>> {
        self.patientist
            .persons()
            .filter(|entry| self.filter.matches(entry))
            .nth(position)
    }

    /// Returns whether the aggregate changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
