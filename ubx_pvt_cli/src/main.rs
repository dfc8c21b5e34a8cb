use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use clap::Parser;
use log::{debug, info, warn};
use ubx_pvt::{frames, parse_hex_lines, NavPvt};

mod cli;
mod error;
mod output;
mod track;

use cli::{Cli, Command};
use error::Error;
use track::Track;

/// Demonstration frame: 2018-05-19 13:05:25 UTC, 3D fix over Tokyo, 8 SVs
const SAMPLE_HEX: &str = "B5 62 01 07 5C 00 A0 73 9B 16 E2 07 05 13 0D 05 19 37 14 00 00 00 C0 1D FE FF 03 01 E0 08 50 C5 4E 53 4A 86 44 15 43 B0 00 00 D2 1E 00 00 DC 05 00 00 FC 08 00 00 78 00 00 00 D3 FF FF FF 08 00 00 00 80 00 00 00 00 00 C4 01 5E 01 00 00 60 E3 16 00 91 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 EA 2A";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .format_timestamp(None)
        .format_target(false)
        .filter_level(log::LevelFilter::Info)
        .parse_env("LOG_LEVEL")
        .init();

    let cli = Cli::parse();

    let records = match cli.command {
        Command::Hex { lines } => {
            let text = if lines.is_empty() {
                io::read_to_string(io::stdin()).context("failed to read hex lines from stdin")?
            } else {
                lines.join("\n")
            };
            ingest_hex(&text)?
        },
        Command::File { paths } => ingest_files(&paths)?,
        Command::Sample => ingest_hex(SAMPLE_HEX)?,
    };

    let mut track = Track::default();
    track.extend(records);
    info!("{} UBX-NAV-PVT record(s)", track.len());

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            output::write_track(&track, cli.format, &mut out)?;
            out.flush()?;
            info!("wrote {}", path.display());
        },
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            output::write_track(&track, cli.format, &mut out)?;
            out.flush()?;
        },
    }
    Ok(())
}

/// Parse hex text line by line.
///
/// Every failing line is logged, the last failure becomes the error only
/// when no line produced a record.
fn ingest_hex(text: &str) -> Result<Vec<NavPvt>, Error> {
    let batch = parse_hex_lines(text);
    for e in &batch.errors {
        warn!("line {}: {}", e.line, e.error);
    }
    if batch.records.is_empty() {
        return Err(match batch.last_error() {
            Some(e) => Error::Parse(e.clone()),
            None => Error::NoPacketsFound {
                origin: "hex input".to_string(),
            },
        });
    }
    Ok(batch.records)
}

fn ingest_file(path: &Path) -> Result<Vec<NavPvt>, Error> {
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut it = frames(&bytes);
    let records: Vec<NavPvt> = it
        .by_ref()
        .map(|frame| NavPvt::decode(&frame, frame.raw_hex()))
        .collect();
    debug!(
        "{}: {} bytes, {} record(s), {} bad candidate(s)",
        path.display(),
        bytes.len(),
        records.len(),
        it.skipped_candidates()
    );

    if records.is_empty() {
        return Err(Error::NoPacketsFound {
            origin: path.display().to_string(),
        });
    }
    info!("{}: {} record(s)", path.display(), records.len());
    Ok(records)
}

/// Scan every file, a failing file does not stop the others
fn ingest_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<NavPvt>, Error> {
    let mut records = Vec::new();
    let mut last_error = None;
    for path in paths {
        match ingest_file(path.as_ref()) {
            Ok(found) => records.extend(found),
            Err(e) => {
                warn!("{e}");
                last_error = Some(e);
            },
        }
    }
    match last_error {
        Some(e) if records.is_empty() => Err(e),
        _ => Ok(records),
    }
}
