//! Writes config.ini for the uemu / spike_simple RISCOF plugins into the
//! current directory. Command-line arguments are ignored.

use std::process::ExitCode;

use anyhow::{Context, Result};
use env_logger::Env;
use riscof_plugins::{ConfigEmitter, PLUGIN_DIR, echo};

fn run() -> Result<()> {
    let working_dir = std::env::current_dir().context("failed to read working directory")?;

    let emitter = ConfigEmitter::new(PLUGIN_DIR);
    let document = emitter.emit(&working_dir)?;

    let mut stdout = std::io::stdout().lock();
    echo(&document, &mut stdout).context("failed to write standard output")?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
