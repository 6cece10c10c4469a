use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::config::Settings;
use crate::errors::AppResult;
use crate::processor::InputRecord;

pub fn execute_command(cli: &Cli) -> AppResult<()> {
    let settings = Settings::load(None)?;
    if !settings.color {
        colored::control::set_override(false);
    }

    match &cli.command {
        Some(Commands::Hello { name }) => _hello(name.as_deref(), &settings),
        Some(Commands::Version) => _version(),
        Some(Commands::Process {
            input,
            output,
            verbose,
        }) => _process(input, output.as_deref(), *verbose),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

#[instrument]
fn _hello(name: Option<&str>, settings: &Settings) -> AppResult<()> {
    let name = name.unwrap_or(settings.default_name.as_str());
    output::info(&format!("Hello, {}!", name));
    Ok(())
}

#[instrument]
fn _version() -> AppResult<()> {
    output::info(&format!("Version: {}", env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[instrument]
fn _process(input: &Path, output_path: Option<&Path>, verbose: bool) -> AppResult<()> {
    debug!("input: {:?}, output: {:?}", input, output_path);

    if verbose {
        output::info(&format!("Processing {}...", input.display()));
    }

    let record = InputRecord::load(input)?;
    if verbose {
        output::detail(&format!("Processing {} bytes", record.contents.len()));
    }

    match output_path {
        Some(path) => {
            record.write_to(path)?;
            output::info(&format!("Writing output to {}", path.display()));
        }
        None => {
            if !record.transformed.is_empty() {
                print!("{}", record.transformed);
                if !record.transformed.ends_with('\n') {
                    println!();
                }
            }
        }
    }

    output::success("Processing complete!");
    Ok(())
}

#[instrument]
fn _completion(shell: clap_complete::Shell) -> AppResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
