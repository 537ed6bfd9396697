//! Command registry and metadata.
//!
//! Defines all available command words with their usage and descriptions.
//! Used for parsing validation, help output, format errors and suggestions.

/// Specification for a single command.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// Full command specifications, in help order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "addpat",
        usage: "addpat n/NAME id/ID p/PHONE e/EMAIL a/ADDRESS w/WARD [t/TAG]...\n\
                Example: addpat n/John Doe id/A12345B p/98765432 e/johnd@example.com \
                a/311, Clementi Ave 2, #02-25 w/Block A Ward 1 t/diabetic",
        description: "Add a patient to a ward",
    },
    CommandSpec {
        name: "addstf",
        usage: "addstf n/NAME id/ID p/PHONE e/EMAIL a/ADDRESS w/WARD r/TITLE [t/TAG]...\n\
                Example: addstf n/Jane Roe id/S1234 p/91234567 e/janer@example.com \
                a/Blk 30 Geylang Street 29 w/Block A Ward 1 r/Nurse",
        description: "Add a staff member to a ward",
    },
    CommandSpec {
        name: "addward",
        usage: "addward w/WARD\nExample: addward w/Block D Ward 3",
        description: "Create a new ward",
    },
    CommandSpec {
        name: "delward",
        usage: "delward w/WARD\nExample: delward w/Block D Ward 3",
        description: "Delete a ward that has nobody in it",
    },
    CommandSpec {
        name: "del",
        usage: "del INDEX\nExample: del 1",
        description: "Delete the person at a displayed index",
    },
    CommandSpec {
        name: "edit",
        usage: "edit INDEX [n/NAME] [id/ID] [p/PHONE] [e/EMAIL] [a/ADDRESS] [r/TITLE] [t/TAG]...\n\
                Example: edit 1 p/91234567 e/johndoe@example.com",
        description: "Edit the details of the person at a displayed index",
    },
    CommandSpec {
        name: "addstatus",
        usage: "addstatus INDEX s/STATUS [s/STATUS]...\nExample: addstatus 2 s/Feeling ok",
        description: "Add status details to a patient",
    },
    CommandSpec {
        name: "delstatus",
        usage: "delstatus INDEX s/STATUS_NUMBER\nExample: delstatus 2 s/1",
        description: "Remove one status detail from a patient",
    },
    CommandSpec {
        name: "trfWard",
        usage: "trfWard INDEX w/FROM_WARD w/TO_WARD\n\
                Example: trfWard 2 w/Block B Ward 2 w/Block C Ward 1",
        description: "Transfer a patient from one ward to another",
    },
    CommandSpec {
        name: "view",
        usage: "view INDEX\nExample: view 3",
        description: "Show the details of the person at a displayed index",
    },
    CommandSpec {
        name: "list",
        usage: "list",
        description: "List everyone",
    },
    CommandSpec {
        name: "lspat",
        usage: "lspat",
        description: "List all patients",
    },
    CommandSpec {
        name: "lsstf",
        usage: "lsstf",
        description: "List all staff",
    },
    CommandSpec {
        name: "lswardpat",
        usage: "lswardpat WARD\nExample: lswardpat Block A Ward 1",
        description: "List the patients of a ward",
    },
    CommandSpec {
        name: "lswardstf",
        usage: "lswardstf WARD\nExample: lswardstf Block A Ward 1",
        description: "List the staff of a ward",
    },
    CommandSpec {
        name: "lsward",
        usage: "lsward",
        description: "List all wards with head counts",
    },
    CommandSpec {
        name: "find",
        usage: "find KEYWORD [KEYWORD]...\nExample: find alice bob",
        description: "Find persons whose names contain any of the keywords",
    },
    CommandSpec {
        name: "clear",
        usage: "clear",
        description: "Delete every ward and person",
    },
    CommandSpec {
        name: "help",
        usage: "help",
        description: "Show available commands",
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        description: "Exit Patientist",
    },
];

pub fn find_command(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|command| command.name == name)
}

/// Usage text for a registered command word.
pub fn usage(name: &str) -> &'static str {
    find_command(name).map_or("", |command| command.usage)
}

/// Generate help lines for all commands.
pub fn command_help_lines() -> Vec<String> {
    let longest = COMMANDS
        .iter()
        .map(|command| command.name.len())
        .max()
        .unwrap_or(0);
    COMMANDS
        .iter()
        .map(|command| {
            format!(
                "{:<width$} {}",
                command.name,
                command.description,
                width = longest
            )
        })
        .collect()
}

/// Generate hint lines for command words starting with the typed word.
///
/// Matching ignores case so `trfward` still suggests `trfWard`.
pub fn command_hint_lines(input: &str, max: usize) -> Vec<String> {
    let query = input.split_whitespace().next().unwrap_or("").to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    let mut matches: Vec<&CommandSpec> = COMMANDS
        .iter()
        .filter(|command| {
            let name = command.name.to_lowercase();
            name.starts_with(&query) || query.starts_with(&name)
        })
        .collect();

    if matches.is_empty() {
        return Vec::new();
    }

    matches.sort_by(|a, b| a.name.cmp(b.name));
    let longest = matches
        .iter()
        .map(|command| command.name.len())
        .max()
        .unwrap_or(0);

    matches
        .into_iter()
        .take(max)
        .map(|command| {
            format!(
                "{:<width$} {}",
                command.name,
                command.description,
                width = longest
            )
        })
        .collect()
}
