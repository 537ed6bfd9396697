//! Application orchestration and the interactive loop.
//!
//! Submodules:
//! - state: `App`, which owns the model and runs one typed line at a time
//! - runner: stdin loop and one-shot mode
//! - render: plain-text presentation of results and the filtered list

mod render;
mod runner;
mod state;

pub use runner::run;
