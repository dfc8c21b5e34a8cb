use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about = "Extract UBX-NAV-PVT navigation records from hex text or raw UBX logs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,

    /// Write output to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse hex text, one UBX-NAV-PVT frame per line (read from stdin when no line is given)
    Hex {
        /// Lines of hex, e.g. "B5 62 01 07 ..."
        lines: Vec<String>,
    },
    /// Scan raw binary logs (.ubx, .bin, .log) for every UBX-NAV-PVT frame
    File {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Parse the built-in demonstration frame
    Sample,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One summary line per record plus the latest fix
    Table,
    /// Fixed 15-column export
    Csv,
    /// Records as a JSON array
    Json,
}
