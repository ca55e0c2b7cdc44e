use crate::av::MediaFormat;
use crate::config::Config;
use crate::error::{ReformatError, Result};
use crate::utils::ByteBuffer;

use super::reformat::{reformat, Extractor, Inserter};
use super::resolve::resolve_format;

/// Smallest packet that can hold a delimiter plus a NAL header
const MIN_PACKET_LEN: usize = 6;

/// Rewrites the delimiters of `buffer` from `*format` to `target` in place.
///
/// Annex-B input is first resolved to its concrete kind, so an `H264Es`
/// packet starting with an SPS is re-tagged `H264SpsEs`. Converting between
/// Annex-B kinds, or from any format to itself, leaves the bytes untouched
/// and tags the packet with its resolved kind. Otherwise `*format` becomes
/// `target` on success. On failure the format tag is left as it was and the
/// buffer contents are unspecified.
pub fn convert_to_format(
    format: &mut MediaFormat,
    target: MediaFormat,
    buffer: &mut ByteBuffer,
    config: &Config,
) -> Result<()> {
    if buffer.len() < MIN_PACKET_LEN {
        return Err(ReformatError::malformed(
            "convert_to_format",
            *format,
            0,
            format!("packet of {} bytes is too short", buffer.len()),
        ));
    }
    if !format.is_h264() {
        return Err(ReformatError::unsupported("convert_to_format", *format));
    }
    if !target.is_h264() {
        return Err(ReformatError::unsupported("convert_to_format", target));
    }

    let mut source = *format;
    if source.is_annexb() {
        if let Some(resolved) = resolve_format(&buffer[..])? {
            if resolved != source {
                log::debug!("resolved {} packet as {}", source, resolved);
            }
            source = resolved;
        }
    }

    // Annex-B kinds share one wire representation, only the tag differs
    if target.is_annexb() && source.is_annexb() {
        if target != MediaFormat::H264Es && target != source {
            log::debug!("{} packet requested as {}, keeping resolved tag", source, target);
        }
        *format = source;
        return Ok(());
    }
    if source == target {
        *format = source;
        return Ok(());
    }

    let extractor = Extractor::for_source(source, config)?;
    let inserter = Inserter::for_target(target)?;
    log::debug!(
        "converting {} byte packet from {} to {}",
        buffer.len(),
        source,
        target
    );
    let chunks = reformat(buffer, &extractor, &inserter)?;
    log::trace!("rewrote {} chunks, packet now {} bytes", chunks, buffer.len());

    *format = target;
    Ok(())
}

/// Re-tags Annex-B data with its concrete kind without touching its bytes.
/// Length-prefixed input is left as it is.
pub fn convert_to_es(
    format: &mut MediaFormat,
    buffer: &mut ByteBuffer,
    config: &Config,
) -> Result<()> {
    let target = *format;
    convert_to_format(format, target, buffer, config)
}
