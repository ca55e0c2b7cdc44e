//! # H.264/AVC Delimiter Reformatting
//!
//! H.264 elementary streams travel in two framings:
//!
//! - **AVCC**: every NAL unit is preceded by a big-endian length of 1, 2 or
//!   4 bytes (MP4, platform decoders)
//! - **Annex-B**: every NAL unit is preceded by a `00 00 01` or
//!   `00 00 00 01` start code (MPEG-TS, raw `.h264` files, RTSP sinks)
//!
//! This module rewrites a packet from one framing to the other in place.
//! It provides:
//!
//! - NAL unit header classification
//! - Start code detection that ignores `00 00 01` runs not followed by a
//!   plausible header byte
//! - Length prefix reading and writing
//! - A chunk loop driven by a pluggable extractor/inserter pair
//!
//! ## Example: AVCC to Annex-B
//!
//! ```rust
//! use h264_reformat::av::MediaFormat;
//! use h264_reformat::codec::h264::convert_to_format;
//! use h264_reformat::config::Config;
//! use h264_reformat::utils::ByteBuffer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut format = MediaFormat::H264Avcc32;
//! let mut data = ByteBuffer::from(vec![0x00, 0x00, 0x00, 0x02, 0xAA, 0xBB]);
//!
//! convert_to_format(&mut format, MediaFormat::H264Es, &mut data, &Config::default())?;
//!
//! assert_eq!(format, MediaFormat::H264Es);
//! assert_eq!(&data[..], &[0x00, 0x00, 0x00, 0x01, 0x09, 0xF0, 0xAA, 0xBB]);
//! # Ok(())
//! # }
//! ```
//!
//! Every Annex-B chunk is written behind an access unit delimiter rather than
//! its original NAL header. Set [`Config::keep_nal_header`](crate::config::Config)
//! to carry the original header byte through an Annex-B to AVCC conversion.

/// Orchestration of a whole-packet conversion
pub mod convert;
/// AVCC length prefixes
pub mod length;
/// NAL unit header byte encoding
pub mod nalu;
/// Format agnostic chunk loop and per-family extractors/inserters
pub mod reformat;
/// Format resolution and single header removal
pub mod resolve;
/// Annex-B start code detection
pub mod start_code;
/// NAL unit content and priority types
pub mod types;

#[doc(inline)]
pub use convert::{convert_to_es, convert_to_format};
#[doc(inline)]
pub use length::{nalu_length_size, read_length, write_length};
#[doc(inline)]
pub use nalu::{decode_nalu_byte, encode_nalu_byte};
#[doc(inline)]
pub use reformat::{reformat, ChunkExtractor, ChunkInserter, Extractor, Inserter};
#[doc(inline)]
pub use resolve::{remove_header, resolve_format};
#[doc(inline)]
pub use start_code::{find_nalu_start, is_start_code3, is_start_code4, start_code_len, StartCode};
#[doc(inline)]
pub use types::{NaluContent, NaluPriority};
