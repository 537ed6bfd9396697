//! The root aggregate: every ward and, through them, every person.
//!
//! The flattened person list is derived from the wards on each read, so
//! there is nothing to refresh after a mutation. Invariants:
//! - ward names are unique
//! - an ID number appears at most once across all wards
//! - a person lives in exactly one ward

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

use super::person::{IdNumber, Person};
use super::ward::{Ward, WardName};

/// A person together with the ward that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonRef<'a> {
    pub ward: &'a Ward,
    pub person: &'a Person,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patientist {
    #[serde(default)]
    wards: Vec<Ward>,
}

impl Patientist {
    pub fn wards(&self) -> &[Ward] {
        &self.wards
    }

    pub fn has_ward(&self, name: &str) -> bool {
        self.wards.iter().any(|ward| ward.name() == name)
    }

    pub fn ward(&self, name: &str) -> Result<&Ward, ModelError> {
        self.wards
            .iter()
            .find(|ward| ward.name() == name)
            .ok_or_else(|| ModelError::WardNotFound(name.to_string()))
    }

    fn ward_mut(&mut self, name: &str) -> Result<&mut Ward, ModelError> {
        self.wards
            .iter_mut()
            .find(|ward| ward.name() == name)
            .ok_or_else(|| ModelError::WardNotFound(name.to_string()))
    }

    pub fn add_ward(&mut self, name: WardName) -> Result<(), ModelError> {
        if self.has_ward(name.as_str()) {
            return Err(ModelError::DuplicateWard(name.to_string()));
        }
        self.wards.push(Ward::new(name));
        Ok(())
    }

    /// Remove an empty ward.
    pub fn remove_ward(&mut self, name: &str) -> Result<Ward, ModelError> {
        let position = self
            .wards
            .iter()
            .position(|ward| ward.name() == name)
            .ok_or_else(|| ModelError::WardNotFound(name.to_string()))?;
        if !self.wards[position].is_empty() {
            return Err(ModelError::WardNotEmpty(name.to_string()));
        }
        Ok(self.wards.remove(position))
    }

    /// Every person, in ward order and then in the order they joined the ward.
    pub fn persons(&self) -> impl Iterator<Item = PersonRef<'_>> + '_ {
        self.wards.iter().flat_map(|ward| {
            ward.persons()
                .iter()
                .map(move |person| PersonRef { ward, person })
        })
    }

    pub fn person_count(&self) -> usize {
        self.wards.iter().map(Ward::len).sum()
    }

    pub fn has_person(&self, id: &IdNumber) -> bool {
        self.wards.iter().any(|ward| ward.contains(id))
    }

    #[cfg(test)]
    pub fn find_person(&self, id: &IdNumber) -> Option<PersonRef<'_>> {
        self.persons().find(|entry| &entry.person.id == id)
    }

    #[cfg(test)]
    pub fn ward_of(&self, id: &IdNumber) -> Option<&Ward> {
        self.wards.iter().find(|ward| ward.contains(id))
    }

    fn owning_ward_mut(&mut self, id: &IdNumber) -> Result<&mut Ward, ModelError> {
        self.wards
            .iter_mut()
            .find(|ward| ward.contains(id))
            .ok_or_else(|| ModelError::PersonNotFound(id.to_string()))
    }

    /// Insert a patient or staff member into a ward.
    pub fn add_person(&mut self, person: Person, ward: &str) -> Result<(), ModelError> {
        if self.has_person(&person.id) {
            return Err(ModelError::DuplicatePerson(person.id.to_string()));
        }
        self.ward_mut(ward)?.push(person);
        Ok(())
    }

    pub fn remove_person(&mut self, id: &IdNumber) -> Result<Person, ModelError> {
        let ward = self.owning_ward_mut(id)?;
        ward.remove(id)
            .ok_or_else(|| ModelError::PersonNotFound(id.to_string()))
    }

    /// Replace a person in place; ward and position are kept.
    pub fn set_person(&mut self, id: &IdNumber, edited: Person) -> Result<(), ModelError> {
        if &edited.id != id && self.has_person(&edited.id) {
            return Err(ModelError::DuplicatePerson(edited.id.to_string()));
        }
        let slot = self
            .owning_ward_mut(id)?
            .get_mut(id)
            .ok_or_else(|| ModelError::PersonNotFound(id.to_string()))?;
        *slot = edited;
        Ok(())
    }

    /// Apply `update` to the person with `id`.
    pub fn update_person<T>(
        &mut self,
        id: &IdNumber,
        update: impl FnOnce(&mut Person) -> Result<T, ModelError>,
    ) -> Result<T, ModelError> {
        let person = self
            .owning_ward_mut(id)?
            .get_mut(id)
            .ok_or_else(|| ModelError::PersonNotFound(id.to_string()))?;
        update(person)
    }

    /// Move a patient from `from` to the end of `to`.
    ///
    /// Nothing changes unless every check passes.
    pub fn transfer_patient(
        &mut self,
        id: &IdNumber,
        from: &str,
        to: &str,
    ) -> Result<(), ModelError> {
        let source = self.ward(from)?;
        self.ward(to)?;
        let Some(person) = source.get(id) else {
            return Err(ModelError::PatientNotInWard {
                id: id.to_string(),
                ward: from.to_string(),
            });
        };
        if !person.is_patient() {
            return Err(ModelError::NotAPatient(person.name.to_string()));
        }
        if from == to {
            return Err(ModelError::SameWard {
                id: id.to_string(),
                ward: from.to_string(),
            });
        }

        let patient = self
            .ward_mut(from)?
            .remove(id)
            .ok_or_else(|| ModelError::PersonNotFound(id.to_string()))?;
        self.ward_mut(to)?.push(patient);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.wards.clear();
    }
}
