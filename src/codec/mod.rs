/// H.264 classification, delimiter scanning and reformatting
pub mod h264;

// Re-export common types and functions
pub use h264::{convert_to_format, NaluContent, NaluPriority};
