//! Predicates that decide which persons appear in the filtered view.

use super::patientist::PersonRef;
use super::person::PersonKind;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
    #[default]
    All,
    Role(PersonKind),
    /// Persons assigned to the named ward, optionally of one role only.
    InWard {
        ward: String,
        role: Option<PersonKind>,
    },
    NameKeywords {
        keywords: Vec<String>,
        role: Option<PersonKind>,
    },
}

impl PersonFilter {
    pub fn matches(&self, entry: &PersonRef<'_>) -> bool {
        let role_matches =
            |role: &Option<PersonKind>| role.map_or(true, |kind| entry.person.kind() == kind);
        match self {
            Self::All => true,
            Self::Role(kind) => entry.person.kind() == *kind,
            Self::InWard { ward, role } => entry.ward.name() == ward.as_str() && role_matches(role),
            Self::NameKeywords { keywords, role } => {
                entry.person.name_matches_any(keywords) && role_matches(role)
            }
        }
    }
}
