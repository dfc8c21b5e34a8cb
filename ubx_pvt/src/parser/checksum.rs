use crate::constants::{NAV_PVT_FRAME_LEN, UBX_CHECKSUM_LEN, UBX_CLASS_OFFSET};

/// UBX [Fletcher-16 checksum](https://en.wikipedia.org/wiki/Fletcher%27s_checksum) calculator
///
/// Covers class, message id, length and payload. Sync chars and the
/// trailing checksum bytes are never fed into it.
#[derive(Default, Clone, Copy)]
pub struct UbxChecksumCalc {
    ck_a: u8,
    ck_b: u8,
}

impl UbxChecksumCalc {
    pub const fn new() -> Self {
        Self { ck_a: 0, ck_b: 0 }
    }

    /// Update checksum with new bytes
    pub const fn update(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            self.update_byte(bytes[i]);
            i += 1;
        }
    }

    /// Update checksum with a single byte
    pub const fn update_byte(&mut self, byte: u8) {
        self.ck_a = self.ck_a.wrapping_add(byte);
        self.ck_b = self.ck_b.wrapping_add(self.ck_a);
    }

    /// Get the current checksum result as `(ck_a, ck_b)`
    pub const fn result(self) -> (u8, u8) {
        (self.ck_a, self.ck_b)
    }

    /// Compares against the received checksum.
    ///
    /// On mismatch returns `(expect, got)`, both packed little-endian the way
    /// they sit on the wire: `expect` is what the frame carries, `got` is what
    /// was computed.
    pub(crate) const fn validate_result(
        self,
        received_ck_a: u8,
        received_ck_b: u8,
    ) -> Result<(), (u16, u16)> {
        if self.is_valid(received_ck_a, received_ck_b) {
            Ok(())
        } else {
            Err((
                u16::from_le_bytes([received_ck_a, received_ck_b]),
                u16::from_le_bytes([self.ck_a, self.ck_b]),
            ))
        }
    }

    /// Single-shot validation of a complete UBX-NAV-PVT frame
    pub(crate) const fn validate_frame(frame: &[u8; NAV_PVT_FRAME_LEN]) -> Result<(), (u16, u16)> {
        let mut calc = Self::new();
        let mut i = UBX_CLASS_OFFSET;
        while i < NAV_PVT_FRAME_LEN - UBX_CHECKSUM_LEN {
            calc.update_byte(frame[i]);
            i += 1;
        }
        calc.validate_result(
            frame[NAV_PVT_FRAME_LEN - 2],
            frame[NAV_PVT_FRAME_LEN - 1],
        )
    }

    const fn is_valid(&self, received_ck_a: u8, received_ck_b: u8) -> bool {
        self.ck_a == received_ck_a && self.ck_b == received_ck_b
    }
}

/// Checksum of `bytes`, as `(ck_a, ck_b)`
pub fn checksum(bytes: &[u8]) -> (u8, u8) {
    let mut calc = UbxChecksumCalc::new();
    calc.update(bytes);
    calc.result()
}
