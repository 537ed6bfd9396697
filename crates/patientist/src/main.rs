mod app;
mod commands;
mod config;
mod error;
mod model;
mod state;
#[cfg(test)]
mod test_utils;

use std::env;
use std::process::ExitCode;

use anyhow::Context;
use env_logger::{Builder, Env};

fn main() -> anyhow::Result<ExitCode> {
    let root = env::current_dir().context("failed to resolve working directory")?;
    let config = config::load_config(&root);

    Builder::from_env(Env::default().default_filter_or(config.log.level.as_str()))
        .format_timestamp(None)
        .init();
    log::debug!("loaded config: {config:?}");

    let args: Vec<String> = env::args().skip(1).collect();
    app::run(&args, &config)
}
