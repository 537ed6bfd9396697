use std::env;
use std::sync::{Mutex, OnceLock};

use crate::model::{
    Address, Email, IdNumber, Name, Patientist, Person, Phone, Role, StaffTitle, StatusDetail, Tag,
    WardName,
};

pub const WARD_A: &str = "Block A Ward 1";
pub const WARD_B: &str = "Block B Ward 2";
pub const WARD_C: &str = "Block C Ward 1";

pub fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct EnvVarGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvVarGuard {
    pub fn set(key: &'static str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        let original = env::var(key).ok();
        env::set_var(key, value);
        Self { key, original }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(value) = &self.original {
            env::set_var(self.key, value);
        } else {
            env::remove_var(self.key);
        }
    }
}

/// Builds persons with plausible defaults for whatever a test leaves out.
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn patient(name: &str, id: &str) -> Self {
        Self::with_role(name, id, Role::Patient { status: Vec::new() })
    }

    pub fn staff(name: &str, id: &str, title: &str) -> Self {
        let title = StaffTitle::parse(title).expect("staff title");
        Self::with_role(name, id, Role::Staff { title })
    }

    fn with_role(name: &str, id: &str, role: Role) -> Self {
        let first = name.split_whitespace().next().unwrap_or("someone");
        Self {
            person: Person {
                name: Name::parse(name).expect("name"),
                id: IdNumber::parse(id).expect("id"),
                phone: Phone::parse("85355255").expect("phone"),
                email: Email::parse(&format!("{}@example.com", first.to_lowercase()))
                    .expect("email"),
                address: Address::parse("123, Jurong West Ave 6, #08-111").expect("address"),
                tags: Default::default(),
                role,
            },
        }
    }

    pub fn with_status(mut self, status: &[&str]) -> Self {
        if let Role::Patient { status: current } = &mut self.person.role {
            *current = status
                .iter()
                .map(|detail| StatusDetail::parse(detail).expect("status"))
                .collect();
        }
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.person.tags = tags
            .iter()
            .map(|tag| Tag::parse(tag).expect("tag"))
            .collect();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.person.phone = Phone::parse(phone).expect("phone");
        self
    }

    pub fn build(self) -> Person {
        self.person
    }
}

pub fn alice() -> Person {
    PersonBuilder::staff("Alice Pauline", "S1", "Nurse")
        .with_tags(&["friends"])
        .build()
}

pub fn amy() -> Person {
    PersonBuilder::patient("Amy Bee", "P1")
        .with_status(&["Doing fine"])
        .build()
}

pub fn carl() -> Person {
    PersonBuilder::patient("Carl Kurz", "P2")
        .with_status(&["Doing good"])
        .build()
}

pub fn benson() -> Person {
    PersonBuilder::patient("Benson Meier", "P3")
        .with_status(&["Stable"])
        .with_phone("98765432")
        .build()
}

pub fn daniel() -> Person {
    PersonBuilder::staff("Daniel Meier", "S2", "Doctor").build()
}

pub fn elle() -> Person {
    PersonBuilder::patient("Elle Meyer", "P4").build()
}

/// Three wards holding the six typical persons:
/// - Block A Ward 1: Alice (staff), Amy, Carl
/// - Block B Ward 2: Benson, Daniel (staff)
/// - Block C Ward 1: Elle
pub fn typical_patientist() -> Patientist {
    let mut patientist = Patientist::default();
    for ward in [WARD_A, WARD_B, WARD_C] {
        patientist
            .add_ward(WardName::parse(ward).expect("ward name"))
            .expect("add ward");
    }
    let placements = [
        (alice(), WARD_A),
        (amy(), WARD_A),
        (carl(), WARD_A),
        (benson(), WARD_B),
        (daniel(), WARD_B),
        (elle(), WARD_C),
    ];
    for (person, ward) in placements {
        patientist.add_person(person, ward).expect("add person");
    }
    patientist
}
