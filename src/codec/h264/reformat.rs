use crate::av::MediaFormat;
use crate::config::Config;
use crate::error::{ReformatError, Result};
use crate::utils::ByteBuffer;

use super::length::{nalu_length_size, read_length, write_length};
use super::nalu::{decode_at, encode_nalu_byte};
use super::start_code::find_nalu_start;
use super::types::{NaluContent, NaluPriority};

/// Primary picture type byte meaning "any slice type"
const AUD_ANY_SLICE: u8 = 0xF0;

/// Removes the delimiter of the next chunk and reports the chunk's payload
/// length. Returning 0 ends the conversion.
pub trait ChunkExtractor {
    /// Format the data is read as
    fn format(&self) -> MediaFormat;

    /// Strips the delimiter at `position`, leaving the payload there
    fn extract(&self, buffer: &mut ByteBuffer, position: usize) -> Result<usize>;
}

/// Writes the delimiter for a chunk of `chunk_length` payload bytes at
/// `position` and returns the position of the payload.
pub trait ChunkInserter {
    /// Format the data is written as
    fn format(&self) -> MediaFormat;

    /// Writes the delimiter at `position`
    fn insert(&self, chunk_length: usize, buffer: &mut ByteBuffer, position: usize)
        -> Result<usize>;
}

/// Walks `buffer` chunk by chunk, replacing each delimiter read by
/// `extractor` with one written by `inserter`. Payload bytes are left as is.
///
/// Returns the number of chunks rewritten.
pub fn reformat<E, I>(buffer: &mut ByteBuffer, extractor: &E, inserter: &I) -> Result<usize>
where
    E: ChunkExtractor + ?Sized,
    I: ChunkInserter + ?Sized,
{
    let mut position = 0;
    let mut chunks = 0;
    loop {
        let chunk_length = extractor.extract(buffer, position)?;
        if chunk_length == 0 {
            break;
        }

        let remaining = buffer.remaining(position);
        if chunk_length > remaining {
            log::warn!(
                "extracted chunk length {} at offset {} exceeds {} remaining bytes",
                chunk_length,
                position,
                remaining
            );
            return Err(ReformatError::ChunkOverrun {
                op: "reformat",
                from: extractor.format(),
                to: inserter.format(),
                offset: position,
                length: chunk_length,
                remaining,
            });
        }

        position = inserter.insert(chunk_length, buffer, position)?;
        log::trace!("chunk {}: {} bytes at offset {}", chunks, chunk_length, position);
        position += chunk_length;
        chunks += 1;
    }
    Ok(chunks)
}

/// Delimiter reader for one format family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    /// Reads length prefixes of the width `format` uses
    Avcc {
        /// AVCC kind being read
        format: MediaFormat,
    },
    /// Reads start codes and NAL header bytes
    AnnexB {
        /// Annex-B kind being read
        format: MediaFormat,
        /// Leave the NAL header byte in the payload instead of consuming it
        keep_nal_header: bool,
    },
}

impl Extractor {
    /// Picks the extractor that reads `source` data
    pub fn for_source(source: MediaFormat, config: &Config) -> Result<Self> {
        if source.is_avcc() {
            Ok(Extractor::Avcc { format: source })
        } else if source.is_annexb() {
            Ok(Extractor::AnnexB {
                format: source,
                keep_nal_header: config.keep_nal_header,
            })
        } else {
            Err(ReformatError::unsupported("select extractor", source))
        }
    }

    fn extract_avcc(
        format: MediaFormat,
        buffer: &mut ByteBuffer,
        position: usize,
    ) -> Result<usize> {
        let width = nalu_length_size(format)?;
        if width == 0 {
            return Err(ReformatError::UnsupportedFormat {
                op: "extract avcc chunk",
                format,
                offset: position,
                detail: "not length prefixed".into(),
            });
        }

        if position == buffer.len() {
            return Ok(0);
        }
        if position > buffer.len() {
            return Err(ReformatError::malformed(
                "extract avcc chunk",
                format,
                position,
                format!("position beyond buffer of {} bytes", buffer.len()),
            ));
        }

        let length = read_length(buffer, position, width)?;
        if length == 0 {
            return Err(ReformatError::malformed(
                "extract avcc chunk",
                format,
                position,
                "zero length NAL unit",
            ));
        }
        Ok(length)
    }

    fn extract_annexb(
        format: MediaFormat,
        keep_nal_header: bool,
        buffer: &mut ByteBuffer,
        position: usize,
    ) -> Result<usize> {
        // An AUD is always consumed whole, even when other header bytes are
        // kept. Header-only units have no payload left and are dropped.
        loop {
            if position >= buffer.len() {
                return Ok(0);
            }

            let code = find_nalu_start(&buffer[position..]).ok_or(
                ReformatError::StartCodeNotFound {
                    op: "extract annexb chunk",
                    format,
                    offset: position,
                },
            )?;
            if code.offset > 0 {
                log::debug!(
                    "skipping {} bytes before start code at offset {}",
                    code.offset,
                    position
                );
            }

            let nal_offset = position + code.header_offset();
            let (content, _) = decode_at(buffer[nal_offset], nal_offset)?;
            let mut header_len = code.header_offset();
            if content == NaluContent::AccessUnitDelimiter {
                header_len += 2;
            } else if !keep_nal_header {
                header_len += 1;
            }
            if header_len > buffer.remaining(position) {
                return Err(ReformatError::malformed(
                    "extract annexb chunk",
                    format,
                    nal_offset,
                    "truncated access unit delimiter",
                ));
            }

            let payload_start = position + header_len;
            let end = match find_nalu_start(&buffer[payload_start..]) {
                Some(next) => payload_start + next.offset,
                None => buffer.len(),
            };

            buffer.remove_range(position..payload_start);
            let chunk_length = end - payload_start;
            if chunk_length > 0 {
                return Ok(chunk_length);
            }
            log::trace!("dropped header-only NAL unit at offset {}", position);
        }
    }
}

impl ChunkExtractor for Extractor {
    fn format(&self) -> MediaFormat {
        match self {
            Extractor::Avcc { format } | Extractor::AnnexB { format, .. } => *format,
        }
    }

    fn extract(&self, buffer: &mut ByteBuffer, position: usize) -> Result<usize> {
        match *self {
            Extractor::Avcc { format } => Self::extract_avcc(format, buffer, position),
            Extractor::AnnexB {
                format,
                keep_nal_header,
            } => Self::extract_annexb(format, keep_nal_header, buffer, position),
        }
    }
}

/// Delimiter writer for one format family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inserter {
    /// Writes length prefixes of the width `format` uses
    Avcc {
        /// AVCC kind being written
        format: MediaFormat,
    },
    /// Writes a 4-byte start code and an access unit delimiter
    AnnexB {
        /// Annex-B kind being written
        format: MediaFormat,
    },
}

impl Inserter {
    /// Picks the inserter that writes `target` data
    pub fn for_target(target: MediaFormat) -> Result<Self> {
        if target.is_avcc() {
            Ok(Inserter::Avcc { format: target })
        } else if target.is_annexb() {
            Ok(Inserter::AnnexB { format: target })
        } else {
            Err(ReformatError::unsupported("select inserter", target))
        }
    }

    /// Delimiter written before every Annex-B chunk.
    ///
    /// The chunk's own NAL header is not reconstructed, every chunk is
    /// introduced as an access unit delimiter with any slice type.
    pub fn annexb_delimiter() -> [u8; 6] {
        [
            0x00,
            0x00,
            0x00,
            0x01,
            encode_nalu_byte(NaluContent::AccessUnitDelimiter, NaluPriority::Zero),
            AUD_ANY_SLICE,
        ]
    }
}

impl ChunkInserter for Inserter {
    fn format(&self) -> MediaFormat {
        match self {
            Inserter::Avcc { format } | Inserter::AnnexB { format } => *format,
        }
    }

    fn insert(
        &self,
        chunk_length: usize,
        buffer: &mut ByteBuffer,
        position: usize,
    ) -> Result<usize> {
        match *self {
            Inserter::Avcc { format } => {
                let width = nalu_length_size(format)?;
                if width == 0 {
                    return Err(ReformatError::UnsupportedFormat {
                        op: "insert avcc chunk",
                        format,
                        offset: position,
                        detail: "not length prefixed".into(),
                    });
                }
                let written = write_length(buffer, width, chunk_length, position)?;
                Ok(position + written)
            }
            Inserter::AnnexB { .. } => {
                let delimiter = Self::annexb_delimiter();
                buffer.insert_at(position, &delimiter);
                Ok(position + delimiter.len())
            }
        }
    }
}
