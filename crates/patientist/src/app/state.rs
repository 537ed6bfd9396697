//! Session state and per-line command handling.
//!
//! `App` owns the model for the lifetime of the process and persists it
//! after every command that changed it.

use std::path::PathBuf;

use log::warn;

use crate::commands::{command_hint_lines, parse_command, run_command, CommandResult};
use crate::error::CommandError;
use crate::model::Model;
use crate::state::save_patientist;

const MAX_HINTS: usize = 5;

#[derive(Debug)]
pub struct App {
    pub model: Model,
    pub data_path: PathBuf,
    pub prompt: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(model: Model, data_path: PathBuf, prompt: impl Into<String>) -> Self {
        Self {
            model,
            data_path,
            prompt: prompt.into(),
            should_quit: false,
        }
    }

    /// Run one typed line. Blank lines yield `None`.
    pub fn execute_command(&mut self, raw: &str) -> Option<CommandResult> {
        let parsed = match parse_command(raw) {
            Ok(parsed) => parsed,
            Err(CommandError::Empty) => return None,
            Err(err) => return Some(unknown_command_result(raw, &err)),
        };

        let mut result = run_command(&parsed.name, &parsed.args, &mut self.model);
        if self.model.take_dirty() {
            if let Err(err) = save_patientist(&self.data_path, self.model.patientist()) {
                warn!("{err}");
                result.ok = false;
                result.message = format!("{}\nCould not save data: {err}", result.message);
            }
        }
        if result.exit {
            self.should_quit = true;
        }
        Some(result)
    }
}

fn unknown_command_result(raw: &str, err: &CommandError) -> CommandResult {
    let mut result = CommandResult::failure(err);
    let hints = command_hint_lines(raw, MAX_HINTS);
    if hints.is_empty() {
        result.message.push_str("\nType `help` to see all commands.");
    } else {
        result.message.push_str("\nDid you mean:");
        for hint in hints {
            result.message.push_str("\n  ");
            result.message.push_str(&hint);
        }
    }
    result
}
