//! Wards: named groups that own the persons assigned to them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

use super::person::{IdNumber, Person, PersonKind};

text_field!(
    /// Ward name. Matched exactly, including case.
    WardName,
    "Ward names can take any values, and it should not be blank",
    |value| !value.is_empty()
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ward {
    name: WardName,
    #[serde(default)]
    persons: Vec<Person>,
}

impl Ward {
    pub fn new(name: WardName) -> Self {
        Self {
            name,
            persons: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Persons in the order they joined the ward.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn count_of(&self, kind: PersonKind) -> usize {
        self.persons
            .iter()
            .filter(|person| person.kind() == kind)
            .count()
    }

    pub fn contains(&self, id: &IdNumber) -> bool {
        self.persons.iter().any(|person| &person.id == id)
    }

    pub fn get(&self, id: &IdNumber) -> Option<&Person> {
        self.persons.iter().find(|person| &person.id == id)
    }

    pub(super) fn get_mut(&mut self, id: &IdNumber) -> Option<&mut Person> {
        self.persons.iter_mut().find(|person| &person.id == id)
    }

    pub(super) fn push(&mut self, person: Person) {
        self.persons.push(person);
    }

    pub(super) fn remove(&mut self, id: &IdNumber) -> Option<Person> {
        let position = self.persons.iter().position(|person| &person.id == id)?;
        Some(self.persons.remove(position))
    }
}

impl fmt::Display for Ward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} patients, {} staff)",
            self.name,
            self.count_of(PersonKind::Patient),
            self.count_of(PersonKind::Staff)
        )
    }
}
