//! Annex-B start code detection.
//!
//! A start code only counts when the byte after it could be a NAL unit
//! header, i.e. its forbidden bit is clear. This rejects most accidental
//! `00 00 01` runs inside payload data.

const START_CODE3: [u8; 3] = [0x00, 0x00, 0x01];
const START_CODE4: [u8; 4] = [0x00, 0x00, 0x00, 0x01];

/// Location of a start code inside a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartCode {
    /// Offset of the first start code byte
    pub offset: usize,
    /// 3 or 4
    pub len: usize,
}

impl StartCode {
    /// Offset of the NAL unit header byte following the code
    pub fn header_offset(&self) -> usize {
        self.offset + self.len
    }
}

/// `00 00 01` followed by a byte with a clear forbidden bit
pub fn is_start_code3(data: &[u8]) -> bool {
    data.len() >= 4 && data[..3] == START_CODE3 && data[3] & 0x80 == 0
}

/// `00 00 00 01` followed by a byte with a clear forbidden bit
pub fn is_start_code4(data: &[u8]) -> bool {
    data.len() >= 5 && data[..4] == START_CODE4 && data[4] & 0x80 == 0
}

/// Length of the start code at the front of `data`, if any
pub fn start_code_len(data: &[u8]) -> Option<usize> {
    if is_start_code4(data) {
        Some(4)
    } else if is_start_code3(data) {
        Some(3)
    } else {
        None
    }
}

/// Finds the first start code in `data`.
///
/// The 4-byte form is tested before the 3-byte form at every offset, so
/// `00 00 00 01` is reported as one 4-byte code rather than a 3-byte code one
/// byte later.
pub fn find_nalu_start(data: &[u8]) -> Option<StartCode> {
    (0..data.len()).find_map(|offset| {
        start_code_len(&data[offset..]).map(|len| StartCode { offset, len })
    })
}
