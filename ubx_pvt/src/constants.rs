pub const UBX_SYNC_CHAR_1: u8 = 0xb5;
pub const UBX_SYNC_CHAR_2: u8 = 0x62;

/// Message class of navigation results
pub const UBX_CLASS_NAV: u8 = 0x01;
/// Message id of the position/velocity/time solution within [UBX_CLASS_NAV]
pub const UBX_ID_PVT: u8 = 0x07;

pub(crate) const UBX_SYNC_SIZE: usize = 2;
pub(crate) const UBX_PAYLOAD_SIZE_LEN: usize = 2;
pub(crate) const UBX_CLASS_LEN: usize = 1;
pub(crate) const UBX_ID_LEN: usize = 1;
pub const UBX_HEADER_LEN: usize =
    UBX_SYNC_SIZE + UBX_PAYLOAD_SIZE_LEN + UBX_CLASS_LEN + UBX_ID_LEN;
pub const UBX_CHECKSUM_LEN: usize = 2;

pub(crate) const UBX_CLASS_OFFSET: usize = 2; // After SYNC_CHAR_1, SYNC_CHAR_2

/// Fixed payload length of UBX-NAV-PVT
pub const NAV_PVT_PAYLOAD_LEN: usize = 92;

/// Complete UBX-NAV-PVT frame: header + payload + checksum
pub const NAV_PVT_FRAME_LEN: usize = UBX_HEADER_LEN + NAV_PVT_PAYLOAD_LEN + UBX_CHECKSUM_LEN;

/// Bytes a candidate frame must start with: sync chars, class and id
pub(crate) const NAV_PVT_SIGNATURE: [u8; 4] =
    [UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2, UBX_CLASS_NAV, UBX_ID_PVT];
