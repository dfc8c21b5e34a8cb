use std::path::PathBuf;

use thiserror::Error;
use ubx_pvt::ParserError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no valid UBX-NAV-PVT packets found in {origin}")]
    NoPacketsFound { origin: String },
    #[error(transparent)]
    Parse(#[from] ParserError),
    #[error("csv export failure")]
    Csv(#[from] csv::Error),
    #[error("json export failure")]
    Json(#[from] serde_json::Error),
    #[error("i/o error")]
    Stdio(#[from] std::io::Error),
}
