mod checksum;
mod locator;
mod normalize;

pub use checksum::{checksum, UbxChecksumCalc};
pub use locator::{locate_frame, Frame};
pub use normalize::normalize_hex;

use crate::{constants::NAV_PVT_FRAME_LEN, error::ParserError, ubx_packets::NavPvt};

fn decode(frame: &Frame<'_>) -> NavPvt {
    #[cfg(feature = "log")]
    log::trace!("UBX-NAV-PVT frame at offset {}", frame.offset());
    NavPvt::decode(frame, frame.raw_hex())
}

/// Parse one line of hex text holding a single UBX-NAV-PVT frame.
///
/// Separators, `0x` prefixes and `h` suffixes are tolerated (see
/// [normalize_hex]). The first candidate frame decides the outcome: a
/// checksum mismatch is reported as is, the search does not move on to a
/// later header.
pub fn parse_hex(line: &str) -> Result<NavPvt, ParserError> {
    let bytes = normalize::decode_hex_line(line)?;
    let frame = locate_frame(&bytes, 0)?;
    Ok(decode(&frame))
}

/// Scan a raw binary buffer and decode every UBX-NAV-PVT frame in it.
///
/// Records come out in buffer order. Candidates failing the checksum are
/// skipped silently, an empty result is not an error.
pub fn scan_binary(bytes: &[u8]) -> Vec<NavPvt> {
    frames(bytes).map(|frame| decode(&frame)).collect()
}

/// Iterate over the valid frames in `bytes`, see [FrameIter]
pub fn frames(bytes: &[u8]) -> FrameIter<'_> {
    FrameIter {
        bytes,
        pos: 0,
        skipped_candidates: 0,
    }
}

/// Iterator over the non-overlapping, checksum-valid UBX-NAV-PVT frames of a buffer.
///
/// After a valid frame the scan continues right past it. After a candidate
/// whose checksum does not match it resynchronizes one byte after that
/// candidate's first sync char.
pub struct FrameIter<'a> {
    bytes: &'a [u8],
    pos: usize,
    skipped_candidates: usize,
}

impl FrameIter<'_> {
    /// Number of header matches dropped so far because of a bad checksum
    pub fn skipped_candidates(&self) -> usize {
        self.skipped_candidates
    }
}

impl<'a> Iterator for FrameIter<'a> {
    type Item = Frame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match locate_frame(self.bytes, self.pos) {
                Ok(frame) => {
                    self.pos = frame.offset() + NAV_PVT_FRAME_LEN;
                    return Some(frame);
                },
                Err(ParserError::ChecksumFailed { offset, .. }) => {
                    #[cfg(feature = "log")]
                    log::debug!("skipping UBX-NAV-PVT candidate at offset {offset}: bad checksum");
                    self.skipped_candidates += 1;
                    self.pos = offset + 1;
                },
                // No header left, or the last one is cut short: nothing more fits.
                Err(_) => {
                    self.pos = self.bytes.len();
                    return None;
                },
            }
        }
    }
}

impl core::iter::FusedIterator for FrameIter<'_> {}

/// A line of [parse_hex_lines] input that failed
#[derive(Debug, Clone, PartialEq)]
pub struct LineError {
    /// 1-based line number
    pub line: usize,
    pub error: ParserError,
}

/// Outcome of parsing multi-line hex text, line by line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HexBatch {
    /// Records in input line order
    pub records: Vec<NavPvt>,
    pub errors: Vec<LineError>,
}

impl HexBatch {
    /// Error of the last failing line, if any
    pub fn last_error(&self) -> Option<&ParserError> {
        self.errors.last().map(|e| &e.error)
    }
}

/// Run [parse_hex] on every non-blank line of `text`.
///
/// A failing line never stops the others. Successes and failures are both
/// collected, leaving it to the caller whether to surface every error or
/// only [HexBatch::last_error].
pub fn parse_hex_lines(text: &str) -> HexBatch {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .fold(HexBatch::default(), |mut batch, (idx, line)| {
            match parse_hex(line) {
                Ok(record) => batch.records.push(record),
                Err(error) => batch.errors.push(LineError {
                    line: idx + 1,
                    error,
                }),
            }
            batch
        })
}
