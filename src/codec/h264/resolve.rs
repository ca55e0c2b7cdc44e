use crate::av::MediaFormat;
use crate::error::{ReformatError, Result};
use crate::utils::ByteBuffer;

use super::length::nalu_length_size;
use super::nalu::decode_at;
use super::start_code::{is_start_code3, is_start_code4, start_code_len};
use super::types::NaluContent;

/// Works out which Annex-B kind `data` holds by peeking at its first NAL
/// unit header.
///
/// Returns `Ok(None)` when the data does not start with a start code, which
/// usually means it is length prefixed instead.
pub fn resolve_format(data: &[u8]) -> Result<Option<MediaFormat>> {
    let header_offset = if is_start_code3(data) {
        3
    } else if is_start_code4(data) {
        4
    } else {
        return Ok(None);
    };

    let (content, _) = decode_at(data[header_offset], header_offset)?;
    let format = match content {
        NaluContent::SequenceParameterSet => MediaFormat::H264SpsEs,
        NaluContent::PictureParameterSet => MediaFormat::H264PpsEs,
        _ => MediaFormat::H264Es,
    };
    Ok(Some(format))
}

/// Removes the single leading delimiter of `buffer`.
///
/// Annex-B data loses its start code, plus the NAL header byte when
/// `strip_nal_byte` is set. Some platform decoders want parameter sets
/// without a start code but with the header byte, hence the flag. AVCC data
/// loses its length prefix.
///
/// Returns the number of bytes removed.
pub fn remove_header(
    format: MediaFormat,
    buffer: &mut ByteBuffer,
    strip_nal_byte: bool,
) -> Result<usize> {
    if format.is_annexb() {
        let code_len = start_code_len(&buffer[..]).ok_or_else(|| {
            ReformatError::malformed("remove_header", format, 0, "no start code")
        })?;
        let count = code_len + usize::from(strip_nal_byte);
        buffer.remove_range(0..count);
        log::trace!("removed {} byte {} header", count, format);
        return Ok(count);
    }

    let width = nalu_length_size(format)
        .map_err(|_| ReformatError::unsupported("remove_header", format))?;
    if buffer.len() < width {
        return Err(ReformatError::malformed(
            "remove_header",
            format,
            0,
            format!("{} bytes is shorter than the {} byte prefix", buffer.len(), width),
        ));
    }
    buffer.remove_range(0..width);
    log::trace!("removed {} byte {} header", width, format);
    Ok(width)
}
