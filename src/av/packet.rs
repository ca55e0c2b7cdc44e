use std::time::Duration;

use super::MediaFormat;
use crate::codec::h264::convert_to_format;
use crate::config::Config;
use crate::error::Result;
use crate::utils::ByteBuffer;

/// A buffer of elementary-stream data tagged with its wire format.
///
/// One packet usually corresponds to one access unit and may hold several
/// concatenated NAL units sharing the declared format.
#[derive(Debug, Clone)]
pub struct Packet {
    /// Packet payload, delimiters included
    pub data: ByteBuffer,
    /// Wire format of `data`
    pub format: MediaFormat,
    /// Presentation timestamp
    pub pts: Option<i64>,
    /// Decoding timestamp
    pub dts: Option<i64>,
    /// Index of the stream this packet belongs to
    pub stream_index: usize,
    /// Whether the packet starts a keyframe
    pub is_key: bool,
    /// Packet duration
    pub duration: Option<Duration>,
}

impl Packet {
    /// Creates a packet with no timing information
    pub fn new(data: impl Into<ByteBuffer>, format: MediaFormat) -> Self {
        Self {
            data: data.into(),
            format,
            pts: None,
            dts: None,
            stream_index: 0,
            is_key: false,
            duration: None,
        }
    }

    /// Sets the presentation timestamp
    pub fn with_pts(mut self, pts: i64) -> Self {
        self.pts = Some(pts);
        self
    }

    /// Sets the decoding timestamp
    pub fn with_dts(mut self, dts: i64) -> Self {
        self.dts = Some(dts);
        self
    }

    /// Sets the stream index
    pub fn with_stream_index(mut self, index: usize) -> Self {
        self.stream_index = index;
        self
    }

    /// Marks the packet as a keyframe or not
    pub fn with_key_flag(mut self, is_key: bool) -> Self {
        self.is_key = is_key;
        self
    }

    /// Sets the packet duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Rewrites the packet's delimiters in place so it is tagged `target`.
    ///
    /// Timing metadata is untouched. On error the format tag is unchanged.
    pub fn convert_to(&mut self, target: MediaFormat, config: &Config) -> Result<()> {
        convert_to_format(&mut self.format, target, &mut self.data, config)
    }
}
