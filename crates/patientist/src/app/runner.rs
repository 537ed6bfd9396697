//! Application runner and read-eval-print loop.
//!
//! With no arguments the runner reads commands from stdin until `exit` or
//! end of input. With arguments they are joined into a single command line,
//! run once, and the process exit code reflects whether it succeeded.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use log::info;

use crate::config::Config;
use crate::model::Model;
use crate::state::load_patientist;

use super::render::render_result;
use super::state::App;

const WELCOME: &str = "Welcome to Patientist! Type `help` to see available commands.";

/// Entry point: load records, then run one command or the interactive loop.
pub fn run(args: &[String], config: &Config) -> anyhow::Result<ExitCode> {
    let path = &config.storage.path;
    let patientist = load_patientist(path)
        .with_context(|| format!("failed to load records from {}", path.display()))?;
    let mut app = App::new(
        Model::new(patientist),
        path.clone(),
        config.prompt.text.clone(),
    );

    if args.is_empty() {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        run_loop(&mut app, stdin.lock(), &mut stdout).context("interactive session failed")?;
        return Ok(ExitCode::SUCCESS);
    }

    let line = args.join(" ");
    info!("running one-shot command: {line}");
    let Some(result) = app.execute_command(&line) else {
        return Ok(ExitCode::SUCCESS);
    };
    let rendered = render_result(&result, &app.model);
    if result.ok {
        println!("{rendered}");
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{rendered}");
        Ok(ExitCode::FAILURE)
    }
}

/// Main loop: prompt, read a line, execute, render; until quit or EOF.
pub fn run_loop<R: BufRead, W: Write>(app: &mut App, mut input: R, output: &mut W) -> io::Result<()> {
    writeln!(output, "{WELCOME}")?;
    let mut line = String::new();
    while !app.should_quit {
        write!(output, "{}", app.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        if let Some(result) = app.execute_command(&line) {
            writeln!(output, "{}", render_result(&result, &app.model))?;
        }
    }
    Ok(())
}
