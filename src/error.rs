use thiserror::Error;

use crate::av::MediaFormat;

/// Errors raised while classifying or reformatting H.264 data.
///
/// Every variant names the operation that failed so a log line is enough to
/// locate the problem without a backtrace.
#[derive(Error, Debug)]
pub enum ReformatError {
    /// The format is not an H.264 kind, or lacks the property the operation needs
    #[error("{op}: unsupported format {format:?} at offset {offset}{}", detail_suffix(.detail))]
    UnsupportedFormat {
        /// Operation that rejected the format
        op: &'static str,
        /// Format handed to the operation
        format: MediaFormat,
        /// Buffer position the operation was asked to work at, 0 for whole-packet checks
        offset: usize,
        /// Extra context, empty when none
        detail: String,
    },

    /// A length prefix width other than 1, 2 or 4 bytes
    #[error("{op}: length prefix width {width} at offset {offset} is not 1, 2 or 4")]
    InvalidLengthWidth {
        /// Operation handed the width
        op: &'static str,
        /// The rejected width in bytes
        width: usize,
        /// Buffer position of the prefix
        offset: usize,
    },

    /// The buffer is too short or lacks the delimiter the format promises
    #[error("{op}: malformed {format:?} header at offset {offset}: {reason}")]
    MalformedHeader {
        /// Operation that found the header malformed
        op: &'static str,
        /// Format the data was declared as
        format: MediaFormat,
        /// Byte offset of the header
        offset: usize,
        /// What was wrong
        reason: String,
    },

    /// A NAL unit header byte had its forbidden bit set
    #[error("{op}: forbidden_zero_bit set in NAL header byte {byte:#04x} at offset {offset}")]
    ZeroBitViolation {
        /// Operation that decoded the byte
        op: &'static str,
        /// The offending header byte
        byte: u8,
        /// Byte offset of the header byte, 0 when decoded standalone
        offset: usize,
    },

    /// Annex-B data without a start code where one was expected
    #[error("{op}: no start code in {format:?} data from offset {offset}")]
    StartCodeNotFound {
        /// Operation that searched
        op: &'static str,
        /// Format the data was declared as
        format: MediaFormat,
        /// Offset the search began at
        offset: usize,
    },

    /// A chunk length exceeds the bytes left in the buffer
    #[error("{op}: chunk of {length} bytes at offset {offset} overruns {remaining} remaining ({from:?} -> {to:?})")]
    ChunkOverrun {
        /// Operation that detected the overrun
        op: &'static str,
        /// Source format of the conversion
        from: MediaFormat,
        /// Target format of the conversion
        to: MediaFormat,
        /// Offset of the chunk payload
        offset: usize,
        /// Declared or computed chunk length
        length: usize,
        /// Bytes actually available from `offset`
        remaining: usize,
    },

    /// Failure reading configuration
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn detail_suffix(detail: &str) -> String {
    if detail.is_empty() {
        String::new()
    } else {
        format!(" ({})", detail)
    }
}

impl ReformatError {
    pub(crate) fn unsupported(op: &'static str, format: MediaFormat) -> Self {
        ReformatError::UnsupportedFormat {
            op,
            format,
            offset: 0,
            detail: String::new(),
        }
    }

    pub(crate) fn malformed(
        op: &'static str,
        format: MediaFormat,
        offset: usize,
        reason: impl Into<String>,
    ) -> Self {
        ReformatError::MalformedHeader {
            op,
            format,
            offset,
            reason: reason.into(),
        }
    }
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, ReformatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = ReformatError::ChunkOverrun {
            op: "reformat",
            from: MediaFormat::H264Avcc32,
            to: MediaFormat::H264Es,
            offset: 4,
            length: 255,
            remaining: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("reformat"));
        assert!(msg.contains("offset 4"));
        assert!(msg.contains("H264Avcc32"));

        let err = ReformatError::unsupported("nalu_length_size", MediaFormat::Aac);
        assert_eq!(
            err.to_string(),
            "nalu_length_size: unsupported format Aac at offset 0"
        );

        let err = ReformatError::InvalidLengthWidth {
            op: "read_length",
            width: 3,
            offset: 7,
        };
        assert_eq!(
            err.to_string(),
            "read_length: length prefix width 3 at offset 7 is not 1, 2 or 4"
        );

        let err = ReformatError::ZeroBitViolation {
            op: "decode_nalu_byte",
            byte: 0x80,
            offset: 0,
        };
        assert!(err.to_string().contains("0x80"));
    }
}
