//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Minimal CLI scaffold: greeting, version, and file-processing demo commands
#[derive(Parser, Debug)]
#[command(name = "rsproc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug logging (-d, -dd, -ddd)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a greeting
    Hello {
        /// Name to greet (default: configured fallback name)
        name: Option<String>,
    },

    /// Print the version
    Version,

    /// Read a file, transform it, and write the result
    Process {
        /// Input file
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        input: PathBuf,

        /// Output file (prints to stdout when omitted)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Print progress messages
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
