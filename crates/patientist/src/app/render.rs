//! Plain-text rendering of command results.
//!
//! The output is laid out like the panes of a record viewer: the result
//! message, then an optional detail block for a person or ward, then the
//! current filtered person list.

use crate::commands::CommandResult;
use crate::model::{Model, PersonKind, PersonRef, Role, Ward};

const SEPARATOR: &str = "----------------------------------------";

/// Render everything a result asks to show.
pub fn render_result(result: &CommandResult, model: &Model) -> String {
    let mut sections = vec![result.message.clone()];
    if !result.ok || result.exit || result.show_help {
        return sections.join("\n");
    }

    if let Some(entry) = result.person_detail.and_then(|i| model.person_at(i)) {
        sections.push(render_person_detail(&entry));
    }
    if let Some(ward) = result
        .ward_detail
        .and_then(|i| model.patientist().wards().get(i))
    {
        sections.push(render_ward_detail(ward));
    }
    sections.push(render_person_list(model));
    sections.join(&format!("\n{SEPARATOR}\n"))
}

/// Numbered lines for the filtered view; numbers are the displayed indexes.
pub fn render_person_list(model: &Model) -> String {
    let persons = model.filtered_persons();
    if persons.is_empty() {
        return "(no persons to show)".to_string();
    }
    persons
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{}. {} ({}) [{}, {}]",
                i + 1,
                entry.person.name,
                entry.person.id,
                entry.person.kind().label(),
                entry.ward.name()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_person_detail(entry: &PersonRef<'_>) -> String {
    let person = entry.person;
    let mut lines = vec![
        format!("Name:    {}", person.name),
        format!("ID:      {}", person.id),
        format!("Ward:    {}", entry.ward.name()),
        format!("Phone:   {}", person.phone),
        format!("Email:   {}", person.email),
        format!("Address: {}", person.address),
    ];
    match &person.role {
        Role::Staff { title } => lines.push(format!("Role:    {title}")),
        Role::Patient { status } if status.is_empty() => lines.push("Status:  -".to_string()),
        Role::Patient { status } => {
            lines.push("Status:".to_string());
            lines.extend(
                status
                    .iter()
                    .enumerate()
                    .map(|(i, detail)| format!("  {}. {detail}", i + 1)),
            );
        }
    }
    if !person.tags.is_empty() {
        let tags: Vec<&str> = person.tags.iter().map(|tag| tag.as_str()).collect();
        lines.push(format!("Tags:    {}", tags.join(", ")));
    }
    lines.join("\n")
}

pub fn render_ward_detail(ward: &Ward) -> String {
    let mut lines = vec![format!("Ward: {}", ward.name())];
    for (kind, heading) in [(PersonKind::Patient, "Patients"), (PersonKind::Staff, "Staff")] {
        lines.push(format!("{heading} ({}):", ward.count_of(kind)));
        lines.extend(
            ward.persons()
                .iter()
                .filter(|person| person.kind() == kind)
                .map(|person| format!("  - {} ({})", person.name, person.id)),
        );
    }
    lines.join("\n")
}
