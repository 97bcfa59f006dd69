use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod schemas;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode framed records from a file or stdin.
    Decode(DecodeArgs),
    /// List registered message layouts.
    Schemas(SchemasArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format),
        Command::Schemas(args) => schemas::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file, or `-` for stdin.
    pub input: PathBuf,
    /// Directory of additional `msg_<N>.schema.json` layouts.
    #[arg(long, value_name = "DIR")]
    pub schemas: Option<PathBuf>,
    /// Start from an empty registry instead of the built-in layouts.
    #[arg(long, requires = "schemas")]
    pub no_builtin: bool,
    /// Print a decode summary after the records.
    #[arg(long)]
    pub stats: bool,
}

#[derive(Args, Debug, Default)]
pub struct SchemasArgs {
    /// Directory of additional `msg_<N>.schema.json` layouts.
    #[arg(long, value_name = "DIR")]
    pub schemas: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
