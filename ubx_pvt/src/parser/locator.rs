//! Search for complete, checksum-valid UBX-NAV-PVT frames in a byte buffer

use crate::{
    constants::{NAV_PVT_FRAME_LEN, NAV_PVT_SIGNATURE},
    error::ParserError,
    parser::checksum::UbxChecksumCalc,
};

/// A UBX-NAV-PVT frame that passed every validation step.
///
/// Only [locate_frame] builds one, so holding a `Frame` means the sync chars,
/// class/id and checksum were all verified and the full frame length is in
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    offset: usize,
    bytes: &'a [u8; NAV_PVT_FRAME_LEN],
}

impl<'a> Frame<'a> {
    /// Offset of the first sync char inside the scanned buffer
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The whole frame, sync chars through checksum
    pub fn as_bytes(&self) -> &'a [u8; NAV_PVT_FRAME_LEN] {
        self.bytes
    }

    /// Uppercase hex of the whole frame, without separators
    pub fn raw_hex(&self) -> String {
        hex::encode_upper(self.bytes)
    }
}

/// Earliest offset `>= start` where sync chars, class and id all match
pub(crate) fn find_signature(bytes: &[u8], start: usize) -> Option<usize> {
    bytes
        .get(start..)?
        .windows(NAV_PVT_SIGNATURE.len())
        .position(|w| w == NAV_PVT_SIGNATURE)
        .map(|pos| pos + start)
}

/// Locate the first UBX-NAV-PVT frame at or after `start`.
///
/// Only the first signature match is examined: if it is truncated or its
/// checksum is wrong the error describes that candidate, and searching
/// further is up to the caller.
pub fn locate_frame(bytes: &[u8], start: usize) -> Result<Frame<'_>, ParserError> {
    let offset = find_signature(bytes, start).ok_or(ParserError::HeaderNotFound)?;

    let window: &[u8; NAV_PVT_FRAME_LEN] = bytes
        .get(offset..offset + NAV_PVT_FRAME_LEN)
        .and_then(|w| w.try_into().ok())
        .ok_or(ParserError::IncompletePacket {
            offset,
            expect: NAV_PVT_FRAME_LEN,
            available: bytes.len() - offset,
        })?;

    UbxChecksumCalc::validate_frame(window)
        .map_err(|(expect, got)| ParserError::ChecksumFailed { offset, expect, got })?;

    Ok(Frame {
        offset,
        bytes: window,
    })
}
