use std::fmt;

/// Content type of a NAL unit, the low five bits of its header byte.
///
/// `Unspecified` (0) doubles as the sentinel for values that do not fit in
/// five bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum NaluContent {
    /// Unspecified, also the fallback for out of range values
    Unspecified = 0,
    /// Coded slice of a non-IDR picture
    SliceNonIdrPicture = 1,
    /// Coded slice data partition A
    SliceCodedPartitionA = 2,
    /// Coded slice data partition B
    SliceCodedPartitionB = 3,
    /// Coded slice data partition C
    SliceCodedPartitionC = 4,
    /// Coded slice of an IDR picture
    SliceCodedIdrPicture = 5,
    /// Supplemental enhancement information (SEI)
    SupplementalEnhancementInformation = 6,
    /// Sequence parameter set (SPS)
    SequenceParameterSet = 7,
    /// Picture parameter set (PPS)
    PictureParameterSet = 8,
    /// Access unit delimiter (AUD)
    AccessUnitDelimiter = 9,
    /// End of sequence
    EndOfSequence = 10,
    /// End of stream
    EndOfStream = 11,
    /// Filler data
    FillerData = 12,
    /// Sequence parameter set extension
    SequenceParameterSetExtension = 13,
    /// Reserved (14)
    Reserved14 = 14,
    /// Reserved (15)
    Reserved15 = 15,
    /// Reserved (16)
    Reserved16 = 16,
    /// Reserved (17)
    Reserved17 = 17,
    /// Reserved (18)
    Reserved18 = 18,
    /// Coded slice of an auxiliary coded picture without partitioning
    SliceAuxCodedUnpartitioned = 19,
    /// Reserved (20)
    Reserved20 = 20,
    /// Reserved (21)
    Reserved21 = 21,
    /// Reserved (22)
    Reserved22 = 22,
    /// Reserved (23)
    Reserved23 = 23,
    /// Unspecified (24)
    Unspecified24 = 24,
    /// Unspecified (25)
    Unspecified25 = 25,
    /// Unspecified (26)
    Unspecified26 = 26,
    /// Unspecified (27)
    Unspecified27 = 27,
    /// Unspecified (28)
    Unspecified28 = 28,
    /// Unspecified (29)
    Unspecified29 = 29,
    /// Unspecified (30)
    Unspecified30 = 30,
    /// Unspecified (31)
    Unspecified31 = 31,
}

impl From<u8> for NaluContent {
    fn from(value: u8) -> Self {
        match value {
            1 => NaluContent::SliceNonIdrPicture,
            2 => NaluContent::SliceCodedPartitionA,
            3 => NaluContent::SliceCodedPartitionB,
            4 => NaluContent::SliceCodedPartitionC,
            5 => NaluContent::SliceCodedIdrPicture,
            6 => NaluContent::SupplementalEnhancementInformation,
            7 => NaluContent::SequenceParameterSet,
            8 => NaluContent::PictureParameterSet,
            9 => NaluContent::AccessUnitDelimiter,
            10 => NaluContent::EndOfSequence,
            11 => NaluContent::EndOfStream,
            12 => NaluContent::FillerData,
            13 => NaluContent::SequenceParameterSetExtension,
            14 => NaluContent::Reserved14,
            15 => NaluContent::Reserved15,
            16 => NaluContent::Reserved16,
            17 => NaluContent::Reserved17,
            18 => NaluContent::Reserved18,
            19 => NaluContent::SliceAuxCodedUnpartitioned,
            20 => NaluContent::Reserved20,
            21 => NaluContent::Reserved21,
            22 => NaluContent::Reserved22,
            23 => NaluContent::Reserved23,
            24 => NaluContent::Unspecified24,
            25 => NaluContent::Unspecified25,
            26 => NaluContent::Unspecified26,
            27 => NaluContent::Unspecified27,
            28 => NaluContent::Unspecified28,
            29 => NaluContent::Unspecified29,
            30 => NaluContent::Unspecified30,
            31 => NaluContent::Unspecified31,
            _ => NaluContent::Unspecified,
        }
    }
}

impl NaluContent {
    /// Raw 5-bit value
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Coded slice of any kind, including auxiliary pictures
    pub fn is_slice(self) -> bool {
        matches!(
            self,
            NaluContent::SliceNonIdrPicture
                | NaluContent::SliceCodedPartitionA
                | NaluContent::SliceCodedPartitionB
                | NaluContent::SliceCodedPartitionC
                | NaluContent::SliceCodedIdrPicture
                | NaluContent::SliceAuxCodedUnpartitioned
        )
    }

    /// SPS, PPS or SPS extension
    pub fn is_parameter_set(self) -> bool {
        matches!(
            self,
            NaluContent::SequenceParameterSet
                | NaluContent::PictureParameterSet
                | NaluContent::SequenceParameterSetExtension
        )
    }
}

impl fmt::Display for NaluContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NaluContent::SliceNonIdrPicture => f.write_str("non-IDR slice"),
            NaluContent::SliceCodedPartitionA => f.write_str("slice partition A"),
            NaluContent::SliceCodedPartitionB => f.write_str("slice partition B"),
            NaluContent::SliceCodedPartitionC => f.write_str("slice partition C"),
            NaluContent::SliceCodedIdrPicture => f.write_str("IDR slice"),
            NaluContent::SupplementalEnhancementInformation => f.write_str("SEI"),
            NaluContent::SequenceParameterSet => f.write_str("SPS"),
            NaluContent::PictureParameterSet => f.write_str("PPS"),
            NaluContent::AccessUnitDelimiter => f.write_str("AUD"),
            NaluContent::EndOfSequence => f.write_str("end of sequence"),
            NaluContent::EndOfStream => f.write_str("end of stream"),
            NaluContent::FillerData => f.write_str("filler"),
            NaluContent::SequenceParameterSetExtension => f.write_str("SPS extension"),
            NaluContent::SliceAuxCodedUnpartitioned => f.write_str("auxiliary slice"),
            other => {
                let bits = other.bits();
                if bits == 0 || bits >= 24 {
                    write!(f, "unspecified({})", bits)
                } else {
                    write!(f, "reserved({})", bits)
                }
            }
        }
    }
}

/// Reference priority of a NAL unit, the two `nal_ref_idc` bits.
///
/// `Invalid` is only produced when a header cannot be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NaluPriority {
    /// Header could not be classified
    Invalid,
    /// `nal_ref_idc` 0, not used for reference
    Zero,
    /// `nal_ref_idc` 1
    One,
    /// `nal_ref_idc` 2
    Two,
    /// `nal_ref_idc` 3, parameter sets and IDR slices
    Important,
}

impl From<u8> for NaluPriority {
    fn from(value: u8) -> Self {
        match value {
            0 => NaluPriority::Zero,
            1 => NaluPriority::One,
            2 => NaluPriority::Two,
            3 => NaluPriority::Important,
            _ => NaluPriority::Invalid,
        }
    }
}

impl NaluPriority {
    /// Raw `nal_ref_idc`; `Invalid` encodes as 0
    pub fn idc(self) -> u8 {
        match self {
            NaluPriority::Invalid | NaluPriority::Zero => 0,
            NaluPriority::One => 1,
            NaluPriority::Two => 2,
            NaluPriority::Important => 3,
        }
    }
}
