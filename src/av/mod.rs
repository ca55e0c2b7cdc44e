use std::fmt;

/// Codec family of a [`MediaFormat`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecType {
    /// H.264/AVC video
    H264,
    /// H.265/HEVC video
    H265,
    /// AAC audio
    AAC,
    /// Opus audio
    OPUS,
}

/// Wire format tag attached to a packet of elementary-stream data.
///
/// The H.264 kinds come in two families. The AVCC kinds prefix every NAL unit
/// with a big-endian length of 1, 2 or 4 bytes. The Annex-B kinds prefix every
/// NAL unit with a `00 00 01` or `00 00 00 01` start code and only differ in
/// what the packet is known to hold.
///
/// The remaining kinds are carried so that collaborators can hand any stream
/// to the H.264 operations and get a typed rejection back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaFormat {
    /// AVCC with 1-byte length prefixes
    H264Avcc8,
    /// AVCC with 2-byte length prefixes
    H264Avcc16,
    /// AVCC with 4-byte length prefixes
    H264Avcc32,
    /// Annex-B elementary stream of unknown content
    H264Es,
    /// Annex-B elementary stream starting with a sequence parameter set
    H264SpsEs,
    /// Annex-B elementary stream starting with a picture parameter set
    H264PpsEs,
    /// H.265/HEVC, not handled by the H.264 reformatter
    H265,
    /// AAC audio
    Aac,
    /// Opus audio
    Opus,
}

impl MediaFormat {
    /// Codec family the format belongs to
    pub fn codec_type(&self) -> CodecType {
        match self {
            MediaFormat::H264Avcc8
            | MediaFormat::H264Avcc16
            | MediaFormat::H264Avcc32
            | MediaFormat::H264Es
            | MediaFormat::H264SpsEs
            | MediaFormat::H264PpsEs => CodecType::H264,
            MediaFormat::H265 => CodecType::H265,
            MediaFormat::Aac => CodecType::AAC,
            MediaFormat::Opus => CodecType::OPUS,
        }
    }

    /// Any H.264 kind, AVCC or Annex-B
    pub fn is_h264(&self) -> bool {
        self.codec_type() == CodecType::H264
    }

    /// Length-prefixed H.264
    pub fn is_avcc(&self) -> bool {
        matches!(
            self,
            MediaFormat::H264Avcc8 | MediaFormat::H264Avcc16 | MediaFormat::H264Avcc32
        )
    }

    /// Start-code delimited H.264
    pub fn is_annexb(&self) -> bool {
        matches!(
            self,
            MediaFormat::H264Es | MediaFormat::H264SpsEs | MediaFormat::H264PpsEs
        )
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MediaFormat::H264Avcc8 => "h264/avcc-8",
            MediaFormat::H264Avcc16 => "h264/avcc-16",
            MediaFormat::H264Avcc32 => "h264/avcc-32",
            MediaFormat::H264Es => "h264/annexb",
            MediaFormat::H264SpsEs => "h264/annexb-sps",
            MediaFormat::H264PpsEs => "h264/annexb-pps",
            MediaFormat::H265 => "h265",
            MediaFormat::Aac => "aac",
            MediaFormat::Opus => "opus",
        };
        f.write_str(name)
    }
}

mod packet;
pub use packet::*;
