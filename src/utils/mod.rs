//! # Utility Functions and Types
//!
//! Common helpers used by the reformatter. Currently this is the
//! [`ByteBuffer`] type, an owned byte buffer that supports inserting and
//! removing bytes in the middle, which is what delimiter rewriting needs.
//!
//! ```rust
//! use h264_reformat::utils::ByteBuffer;
//!
//! let mut buf = ByteBuffer::from(vec![0x00, 0x00, 0x00, 0x02, 0xAA, 0xBB]);
//! buf.remove_range(0..4);
//! buf.insert_at(0, &[0x00, 0x00, 0x01]);
//! assert_eq!(&buf[..], &[0x00, 0x00, 0x01, 0xAA, 0xBB]);
//! ```

/// Byte buffer with shifting inserts and removals
pub mod buffer;

pub use buffer::ByteBuffer;
