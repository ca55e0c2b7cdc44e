use bytes::{Buf, BufMut};

use crate::av::MediaFormat;
use crate::error::{ReformatError, Result};
use crate::utils::ByteBuffer;

/// Width of the length prefix used by `format`.
///
/// Annex-B kinds return 0 since they are not length prefixed. Non-H.264
/// formats are rejected.
pub fn nalu_length_size(format: MediaFormat) -> Result<usize> {
    match format {
        MediaFormat::H264Avcc8 => Ok(1),
        MediaFormat::H264Avcc16 => Ok(2),
        MediaFormat::H264Avcc32 => Ok(4),
        MediaFormat::H264Es | MediaFormat::H264SpsEs | MediaFormat::H264PpsEs => Ok(0),
        other => Err(ReformatError::unsupported("nalu_length_size", other)),
    }
}

fn avcc_format_for(width: usize) -> Option<MediaFormat> {
    match width {
        1 => Some(MediaFormat::H264Avcc8),
        2 => Some(MediaFormat::H264Avcc16),
        4 => Some(MediaFormat::H264Avcc32),
        _ => None,
    }
}

fn invalid_width(op: &'static str, width: usize, offset: usize) -> ReformatError {
    ReformatError::InvalidLengthWidth { op, width, offset }
}

/// Consumes a big-endian length prefix of `width` bytes at `position`.
///
/// The prefix bytes are removed from the buffer.
pub fn read_length(buffer: &mut ByteBuffer, position: usize, width: usize) -> Result<usize> {
    let format =
        avcc_format_for(width).ok_or_else(|| invalid_width("read_length", width, position))?;
    if buffer.remaining(position) < width {
        return Err(ReformatError::malformed(
            "read_length",
            format,
            position,
            format!(
                "need {} prefix bytes, {} remaining",
                width,
                buffer.remaining(position)
            ),
        ));
    }

    let mut prefix = &buffer[position..position + width];
    let length = prefix.get_uint(width) as usize;
    buffer.remove_range(position..position + width);
    Ok(length)
}

/// Inserts a big-endian length prefix of `width` bytes at `position`.
///
/// Returns the number of bytes written. Fails if `value` does not fit.
pub fn write_length(
    buffer: &mut ByteBuffer,
    width: usize,
    value: usize,
    position: usize,
) -> Result<usize> {
    let format =
        avcc_format_for(width).ok_or_else(|| invalid_width("write_length", width, position))?;
    let max = (1u64 << (width * 8)) - 1;
    if value as u64 > max {
        return Err(ReformatError::ChunkOverrun {
            op: "write_length",
            from: format,
            to: format,
            offset: position,
            length: value,
            remaining: max as usize,
        });
    }

    let mut prefix = Vec::with_capacity(width);
    prefix.put_uint(value as u64, width);
    buffer.insert_at(position, &prefix);
    Ok(width)
}
