use crate::error::{ReformatError, Result};

use super::types::{NaluContent, NaluPriority};

const FORBIDDEN_BIT: u8 = 0x80;

/// Builds a NAL unit header byte. The forbidden bit is always clear.
pub fn encode_nalu_byte(content: NaluContent, priority: NaluPriority) -> u8 {
    (priority.idc() << 5) | content.bits()
}

/// Splits a NAL unit header byte into content type and priority.
///
/// Fails with [`ReformatError::ZeroBitViolation`] when the forbidden bit is set.
pub fn decode_nalu_byte(byte: u8) -> Result<(NaluContent, NaluPriority)> {
    decode_at(byte, 0)
}

/// Same as [`decode_nalu_byte`], recording where in a buffer the byte sits
pub(crate) fn decode_at(byte: u8, offset: usize) -> Result<(NaluContent, NaluPriority)> {
    if byte & FORBIDDEN_BIT != 0 {
        return Err(ReformatError::ZeroBitViolation {
            op: "decode_nalu_byte",
            byte,
            offset,
        });
    }
    let idc = (byte >> 5) & 0x03;
    let content = byte & 0x1F;
    Ok((NaluContent::from(content), NaluPriority::from(idc)))
}
