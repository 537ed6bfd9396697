//! Command parsing.
//!
//! A command line is `COMMAND_WORD [INDEX] [PREFIX]VALUE ...`. This module
//! splits off the command word, tokenizes prefixed arguments and parses
//! displayed indexes. Turning tokens into typed command objects happens in
//! each command's own `parse`.

use crate::error::CommandError;

use super::registry::{find_command, usage};

pub const PREFIX_NAME: &str = "n/";
pub const PREFIX_ID: &str = "id/";
pub const PREFIX_PHONE: &str = "p/";
pub const PREFIX_EMAIL: &str = "e/";
pub const PREFIX_ADDRESS: &str = "a/";
pub const PREFIX_WARD: &str = "w/";
pub const PREFIX_TITLE: &str = "r/";
pub const PREFIX_TAG: &str = "t/";
pub const PREFIX_STATUS: &str = "s/";

/// Successfully parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMatch {
    pub name: String,
    pub args: String,
}

pub type CommandParseResult = Result<CommandMatch, CommandError>;

/// Split a command line into its registered command word and the rest.
pub fn parse_command(input: &str) -> CommandParseResult {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CommandError::Empty);
    }
    let (name, args) = match trimmed.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (trimmed, ""),
    };
    if find_command(name).is_none() {
        return Err(CommandError::UnknownCommand(name.to_string()));
    }

    Ok(CommandMatch {
        name: name.to_string(),
        args: args.to_string(),
    })
}

/// Zero-based position in the filtered view, built from the one-based
/// number the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index(usize);

impl Index {
    pub fn from_one_based(value: usize) -> Option<Self> {
        value.checked_sub(1).map(Self)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

/// Parse a displayed index; anything but a positive integer is a format
/// error for `command`.
pub fn parse_index(raw: &str, command: &str) -> Result<Index, CommandError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(CommandError::InvalidFormat {
            usage: usage(command),
        })
}

/// Arguments split by prefix. Text before the first prefix is the preamble.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgMap {
    preamble: String,
    values: Vec<(&'static str, String)>,
}

impl ArgMap {
    /// Split `args` on the given prefixes.
    ///
    /// A prefix only counts at the start of `args` or right after
    /// whitespace, so `e/amy@x.com` inside an address is left alone unless it
    /// follows a space.
    pub fn tokenize(args: &str, prefixes: &[&'static str]) -> Self {
        let mut marks: Vec<(usize, &'static str)> = Vec::new();
        for (position, _) in args.char_indices() {
            let at_boundary = args[..position]
                .chars()
                .next_back()
                .map_or(true, char::is_whitespace);
            if !at_boundary {
                continue;
            }
            let rest = &args[position..];
            let matched = prefixes
                .iter()
                .filter(|prefix| rest.starts_with(**prefix))
                .max_by_key(|prefix| prefix.len());
            if let Some(prefix) = matched {
                marks.push((position, *prefix));
            }
        }

        let preamble_end = marks.first().map_or(args.len(), |(position, _)| *position);
        let mut values = Vec::with_capacity(marks.len());
        for (i, (position, prefix)) in marks.iter().enumerate() {
            let start = position + prefix.len();
            let end = marks.get(i + 1).map_or(args.len(), |(next, _)| *next);
            values.push((*prefix, args[start..end].trim().to_string()));
        }

        Self {
            preamble: args[..preamble_end].trim().to_string(),
            values,
        }
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: &str) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(key, _)| *key == prefix)
            .map(|(_, value)| value.as_str())
    }

    /// Every value given for `prefix`, in order.
    pub fn all_values(&self, prefix: &str) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(key, _)| *key == prefix)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    pub fn has(&self, prefix: &str) -> bool {
        self.values.iter().any(|(key, _)| *key == prefix)
    }

    pub fn has_all(&self, prefixes: &[&str]) -> bool {
        prefixes.iter().all(|prefix| self.has(prefix))
    }
}
