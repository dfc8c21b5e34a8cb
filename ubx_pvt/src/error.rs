use thiserror::Error;

/// Error that possible during packets parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParserError {
    /// Normalized hex input can not hold one complete frame
    #[error("Input too short for a complete UBX-NAV-PVT message, expect {expect} hex digits, got {got}")]
    TooShort { expect: usize, got: usize },

    /// Odd length or non-hex characters left after normalization
    #[error("Invalid hexadecimal string: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("UBX-NAV-PVT header (0xB5 0x62 0x01 0x07) not found")]
    HeaderNotFound,

    /// Header matched but the buffer ends before the frame does
    #[error("Incomplete packet at offset {offset}, expect {expect} bytes, got {available}")]
    IncompletePacket {
        offset: usize,
        expect: usize,
        available: usize,
    },

    #[error("Checksum validation failed at offset {offset}, expect {expect:x}, got {got:x}")]
    ChecksumFailed { offset: usize, expect: u16, got: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateTimeError {
    #[error("invalid date")]
    InvalidDate,
    #[error("invalid time")]
    InvalidTime,
    #[error("invalid nanoseconds")]
    InvalidNanoseconds,
}
