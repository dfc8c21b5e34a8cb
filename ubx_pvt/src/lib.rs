//! # ubx_pvt
//!
//! Extracts UBX-NAV-PVT (class `0x01`, id `0x07`) navigation solutions from
//! u-blox UBX data, either pasted as hex text or dumped raw by a logger.
//!
//! Parsing Hex Text
//! ================
//!
//! One line is expected to hold one frame. Whitespace, `,`, `:`, `0x` prefixes and
//! `h` suffixes are ignored:
//! ```
//! let line = "B5 62 01 07 5C 00 A0 73 9B 16 E2 07 05 13 0D 05 19 37 14 00 00 00 C0 1D FE FF \
//!             03 01 E0 08 50 C5 4E 53 4A 86 44 15 43 B0 00 00 D2 1E 00 00 DC 05 00 00 FC 08 \
//!             00 00 78 00 00 00 D3 FF FF FF 08 00 00 00 80 00 00 00 00 00 C4 01 5E 01 00 00 \
//!             60 E3 16 00 91 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 EA 2A";
//! let pvt = ubx_pvt::parse_hex(line).unwrap();
//! assert_eq!(pvt.fix_type(), ubx_pvt::GnssFixType::Fix3D);
//! assert_eq!(pvt.num_satellites(), 8);
//! assert_eq!(pvt.timestamp(), "2018-05-19 13:05:25");
//! ```
//! A bad checksum on that line is reported as [ParserError::ChecksumFailed].
//! Several lines at once go through [parse_hex_lines], which keeps parsing after
//! a failing line.
//!
//! Scanning Binary Logs
//! ====================
//!
//! [scan_binary] returns every valid frame of a buffer, in buffer order. Bytes
//! between frames are skipped, and so are header matches whose checksum does not
//! hold:
//! ```
//! let log = std::fs::read("gps.ubx").unwrap_or_default();
//! for pvt in ubx_pvt::scan_binary(&log) {
//!     println!("{} {:.7} {:.7}", pvt.timestamp(), pvt.latitude(), pvt.longitude());
//! }
//! ```
//! [frames] gives the same scan lazily, as validated [Frame]s.
//!
//! Parsing is stateless: each call only looks at the buffer it is given.

pub use crate::{
    error::{DateTimeError, ParserError},
    parser::{
        checksum, frames, locate_frame, normalize_hex, parse_hex, parse_hex_lines, scan_binary,
        Frame, FrameIter, HexBatch, LineError, UbxChecksumCalc,
    },
    ubx_packets::*,
};

pub mod constants;
mod error;
pub mod export;
mod parser;
mod ubx_packets;
