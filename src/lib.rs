#![doc(html_root_url = "https://docs.rs/h264-reformat/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

//! # h264-reformat - H.264 delimiter conversion
//!
//! `h264-reformat` rewrites H.264 elementary-stream packets between the two
//! framings used by encoders, decoders, muxers and platform media APIs:
//! length-prefixed **AVCC** and start-code delimited **Annex-B**.
//!
//! Conversion happens in place on a caller-owned buffer, one packet at a
//! time, and is a pure function of the packet bytes, its declared format
//! and the target format.
//!
//! ## Features
//!
//! - NAL unit header encoding and decoding with forbidden-bit validation
//! - 3- and 4-byte start code detection
//! - 1, 2 and 4 byte AVCC length prefixes
//! - Resolution of Annex-B packets into SPS, PPS or generic kinds
//! - Removal of a single leading delimiter for platform APIs
//! - Typed errors carrying the operation, formats and byte offset
//!
//! ## Quick Start
//!
//! ```rust
//! use h264_reformat::av::{MediaFormat, Packet};
//! use h264_reformat::config::Config;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut packet = Packet::new(
//!     vec![0x00, 0x00, 0x00, 0x02, 0xAA, 0xBB, 0x00, 0x00, 0x00, 0x01, 0xCC],
//!     MediaFormat::H264Avcc32,
//! )
//! .with_pts(3000);
//!
//! packet.convert_to(MediaFormat::H264Avcc16, &Config::default())?;
//! assert_eq!(&packet.data[..], &[0x00, 0x02, 0xAA, 0xBB, 0x00, 0x01, 0xCC]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - `av`: media format tags and the packet type
//! - `codec`: the H.264 classifier, scanner, codecs and reformat engine
//! - `config`: options that change the produced bytes
//! - `error`: error type and result alias
//! - `utils`: byte buffer with shifting inserts and removals

/// Media format tags and packets
pub mod av;

/// Codec implementations
pub mod codec;

/// Error types and utilities
pub mod error;

/// Common utilities and helper functions
pub mod utils;

/// Configuration module
pub mod config;

pub use error::{ReformatError, Result};
