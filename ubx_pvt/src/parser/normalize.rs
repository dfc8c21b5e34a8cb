//! Clean up pasted hex text before it is decoded

use crate::{constants::NAV_PVT_FRAME_LEN, error::ParserError};

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == ':'
}

/// Strip separators (whitespace, `,`, `:`), `0x` prefixes and `h` suffixes,
/// and uppercase what is left.
///
/// Each separator-delimited token is cleaned on its own, so a `0x` can not be
/// assembled from the tail of one token and the head of the next.
pub fn normalize_hex(input: &str) -> String {
    input
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_ascii_uppercase().replace("0X", "").replace('H', ""))
        .collect()
}

/// Normalize and decode one line of pasted hex
pub(crate) fn decode_hex_line(input: &str) -> Result<Vec<u8>, ParserError> {
    let clean = normalize_hex(input);
    let expect = NAV_PVT_FRAME_LEN * 2;
    // Counted in characters, a stray non-ASCII char must not pass for two digits
    let got = clean.chars().count();
    if got < expect {
        return Err(ParserError::TooShort { expect, got });
    }
    Ok(hex::decode(&clean)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_separators() {
        assert_eq!(normalize_hex("b5 62,01:07\t5c\n00"), "B56201075C00");
    }

    #[test]
    fn test_normalize_prefixes_and_suffixes() {
        assert_eq!(normalize_hex("0xB5 0X62 01h 07H"), "B5620107");
        assert_eq!(normalize_hex("0xb5,0x62"), "B562");
    }

    #[test]
    fn test_normalize_keeps_zero_digits() {
        assert_eq!(normalize_hex("00 0A A0 50"), "000AA050");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_hex(""), "");
        assert_eq!(normalize_hex(" , : "), "");
    }

    #[test]
    fn test_decode_too_short() {
        let line = "B5 62 01 07";
        assert_eq!(
            decode_hex_line(line),
            Err(ParserError::TooShort {
                expect: 200,
                got: 8
            })
        );
    }

    #[test]
    fn test_too_short_counts_characters() {
        let mut line = "0".repeat(198);
        line.push('é');
        assert_eq!(
            decode_hex_line(&line),
            Err(ParserError::TooShort {
                expect: 200,
                got: 199
            })
        );

        let mut line = "0".repeat(199);
        line.push('é');
        assert!(matches!(
            decode_hex_line(&line),
            Err(ParserError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_decode_odd_length() {
        let line = "0".repeat(201);
        assert_eq!(
            decode_hex_line(&line),
            Err(ParserError::InvalidHex(hex::FromHexError::OddLength))
        );
    }

    #[test]
    fn test_decode_bad_digit() {
        let mut line = "0".repeat(200);
        line.push_str("ZZ");
        assert!(matches!(
            decode_hex_line(&line),
            Err(ParserError::InvalidHex(
                hex::FromHexError::InvalidHexCharacter { c: 'Z', .. }
            ))
        ));
    }

    #[test]
    fn test_decode_ok() {
        let line = "ab".repeat(100);
        assert_eq!(decode_hex_line(&line).unwrap(), vec![0xab; 100]);
    }
}
