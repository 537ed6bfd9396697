//! Adding, editing, deleting and viewing persons.

use std::collections::BTreeSet;

use crate::commands::parse::{
    parse_index, ArgMap, Index, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_ID, PREFIX_NAME,
    PREFIX_PHONE, PREFIX_TAG, PREFIX_TITLE, PREFIX_WARD,
};
use crate::error::{CommandError, ModelError};
use crate::model::{
    Address, Email, IdNumber, Model, Name, Person, PersonFilter, Phone, Role, StaffTitle, Tag,
};

use super::{invalid_format, person_at, CommandResult};

fn parse_tags(values: &[&str]) -> Result<BTreeSet<Tag>, ModelError> {
    values.iter().map(|value| Tag::parse(value)).collect()
}

/// Add a patient or staff member to a ward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPerson {
    person: Person,
    ward: String,
}

impl AddPerson {
    pub const PATIENT_WORD: &'static str = "addpat";
    pub const STAFF_WORD: &'static str = "addstf";

    pub fn new(person: Person, ward: impl Into<String>) -> Self {
        Self {
            person,
            ward: ward.into(),
        }
    }

    pub fn parse_patient(args: &str) -> Result<Self, CommandError> {
        Self::parse(args, Self::PATIENT_WORD)
    }

    pub fn parse_staff(args: &str) -> Result<Self, CommandError> {
        Self::parse(args, Self::STAFF_WORD)
    }

    fn parse(args: &str, command: &'static str) -> Result<Self, CommandError> {
        let is_staff = command == Self::STAFF_WORD;
        let map = ArgMap::tokenize(
            args,
            &[
                PREFIX_NAME,
                PREFIX_ID,
                PREFIX_PHONE,
                PREFIX_EMAIL,
                PREFIX_ADDRESS,
                PREFIX_WARD,
                PREFIX_TITLE,
                PREFIX_TAG,
            ],
        );
        let required = [
            PREFIX_NAME,
            PREFIX_ID,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_WARD,
        ];
        if !map.preamble().is_empty()
            || !map.has_all(&required)
            || map.has(PREFIX_TITLE) != is_staff
        {
            return Err(invalid_format(command));
        }

        let value = |prefix: &str| map.value(prefix).unwrap_or_default();
        let role = if is_staff {
            Role::Staff {
                title: StaffTitle::parse(value(PREFIX_TITLE))?,
            }
        } else {
            Role::Patient { status: Vec::new() }
        };
        let person = Person {
            name: Name::parse(value(PREFIX_NAME))?,
            id: IdNumber::parse(value(PREFIX_ID))?,
            phone: Phone::parse(value(PREFIX_PHONE))?,
            email: Email::parse(value(PREFIX_EMAIL))?,
            address: Address::parse(value(PREFIX_ADDRESS))?,
            tags: parse_tags(&map.all_values(PREFIX_TAG))?,
            role,
        };
        Ok(Self::new(person, value(PREFIX_WARD)))
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.mutate(|patientist| patientist.add_person(self.person.clone(), &self.ward))?;
        Ok(CommandResult::success(format!(
            "New {} added to {}: {}",
            self.person.kind().label(),
            self.ward,
            self.person
        )))
    }
}

/// Delete the person at a displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePerson {
    index: Index,
}

impl DeletePerson {
    pub const COMMAND_WORD: &'static str = "del";

    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        parse_index(args, Self::COMMAND_WORD).map(Self::new)
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let id = person_at(model, self.index)?.person.id.clone();
        let removed = model.mutate(|patientist| patientist.remove_person(&id))?;
        Ok(CommandResult::success(format!("Deleted person: {removed}")))
    }
}

/// Fields to overwrite on an edited person; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDescriptor {
    pub name: Option<Name>,
    pub id: Option<IdNumber>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub title: Option<StaffTitle>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditDescriptor {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn apply(&self, person: &Person) -> Result<Person, ModelError> {
        let mut edited = person.clone();
        if let Some(name) = &self.name {
            edited.name = name.clone();
        }
        if let Some(id) = &self.id {
            edited.id = id.clone();
        }
        if let Some(phone) = &self.phone {
            edited.phone = phone.clone();
        }
        if let Some(email) = &self.email {
            edited.email = email.clone();
        }
        if let Some(address) = &self.address {
            edited.address = address.clone();
        }
        if let Some(tags) = &self.tags {
            edited.tags = tags.clone();
        }
        if let Some(new_title) = &self.title {
            match &mut edited.role {
                Role::Staff { title } => *title = new_title.clone(),
                Role::Patient { .. } => return Err(ModelError::NotStaff(person.name.to_string())),
            }
        }
        Ok(edited)
    }
}

/// Edit the person at a displayed index. Ward changes go through `trfWard`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPerson {
    index: Index,
    changes: EditDescriptor,
}

impl EditPerson {
    pub const COMMAND_WORD: &'static str = "edit";

    pub fn new(index: Index, changes: EditDescriptor) -> Self {
        Self { index, changes }
    }

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let map = ArgMap::tokenize(
            args,
            &[
                PREFIX_NAME,
                PREFIX_ID,
                PREFIX_PHONE,
                PREFIX_EMAIL,
                PREFIX_ADDRESS,
                PREFIX_TITLE,
                PREFIX_TAG,
            ],
        );
        let index = parse_index(map.preamble(), Self::COMMAND_WORD)?;

        let tag_values = map.all_values(PREFIX_TAG);
        // A lone empty `t/` clears every tag.
        let tags = match tag_values.as_slice() {
            [] => None,
            [""] => Some(BTreeSet::new()),
            values => Some(parse_tags(values)?),
        };
        let changes = EditDescriptor {
            name: map.value(PREFIX_NAME).map(Name::parse).transpose()?,
            id: map.value(PREFIX_ID).map(IdNumber::parse).transpose()?,
            phone: map.value(PREFIX_PHONE).map(Phone::parse).transpose()?,
            email: map.value(PREFIX_EMAIL).map(Email::parse).transpose()?,
            address: map.value(PREFIX_ADDRESS).map(Address::parse).transpose()?,
            title: map.value(PREFIX_TITLE).map(StaffTitle::parse).transpose()?,
            tags,
        };
        if changes.is_empty() {
            return Err(CommandError::NothingToEdit);
        }
        Ok(Self::new(index, changes))
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let entry = person_at(model, self.index)?;
        let id = entry.person.id.clone();
        let edited = self.changes.apply(entry.person)?;

        model.mutate(|patientist| patientist.set_person(&id, edited.clone()))?;
        model.update_filter(PersonFilter::All);
        Ok(CommandResult::success(format!("Edited person: {edited}")))
    }
}

/// Switch the detail pane to the person at a displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewPerson {
    index: Index,
}

impl ViewPerson {
    pub const COMMAND_WORD: &'static str = "view";

    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        parse_index(args, Self::COMMAND_WORD).map(Self::new)
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let entry = person_at(model, self.index)?;
        let message = format!(
            "Viewing {} in {}: {}",
            entry.person.kind().label(),
            entry.ward.name(),
            entry.person
        );
        Ok(CommandResult::success(message).with_person_detail(self.index.zero_based()))
    }
}
