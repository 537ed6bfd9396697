//! Command system for the prompt.
//!
//! This module handles every step between a typed line and a result:
//! - Registry: command words, usage and help text (registry.rs)
//! - Parsing: splitting the command word and prefixed arguments (parse.rs)
//! - Execution: typed commands run against the model (exec/)
//!
//! Commands follow a `word [INDEX] [PREFIX]VALUE ...` pattern, for example
//! `trfWard 2 w/Block A Ward 1 w/Block B Ward 2`.

mod exec;
mod parse;
mod registry;

pub use exec::{run_command, CommandResult};
pub use parse::parse_command;
pub use registry::command_hint_lines;
