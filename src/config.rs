use std::env;
use std::fs;
use std::path::Path;

use crate::error::Result;

const ENV_STRIP_NAL_BYTE: &str = "H264_REFORMAT_STRIP_NAL_BYTE";
const ENV_KEEP_NAL_HEADER: &str = "H264_REFORMAT_KEEP_NAL_HEADER";

const CONFIG_PATHS: [&str; 2] = ["./h264_reformat.toml", "./config.toml"];

/// Options that change the bytes the reformatter produces.
///
/// The defaults reproduce the plain conversion: start codes are stripped
/// without the NAL header byte, and Annex-B extraction consumes the NAL
/// header byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// `remove_header` also drops the NAL header byte after a start code
    pub strip_nal_byte: bool,
    /// Annex-B extraction leaves the NAL header byte in the payload
    pub keep_nal_header: bool,
}

impl Config {
    /// Defaults overridden by environment variables
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Defaults, then environment variables, then the first config file found
    /// in the working directory
    pub fn load() -> Self {
        Config::load_from(&CONFIG_PATHS)
    }

    fn load_from<P: AsRef<Path>>(paths: &[P]) -> Self {
        let mut config = Config::from_env();
        for path in paths {
            let path = path.as_ref();
            if let Ok(content) = fs::read_to_string(path) {
                log::debug!("loading reformat config from {}", path.display());
                config.apply_str(&content);
                break;
            }
        }
        config
    }

    /// Defaults overridden by the `key = value` lines of `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Config::parse(&content))
    }

    /// Defaults overridden by `key = value` lines. Unknown keys and
    /// unparsable values are ignored.
    pub fn parse(content: &str) -> Self {
        let mut config = Config::default();
        config.apply_str(content);
        config
    }

    fn apply_env(&mut self) {
        if let Some(value) = env::var(ENV_STRIP_NAL_BYTE).ok().and_then(|v| parse_bool(&v)) {
            self.strip_nal_byte = value;
        }
        if let Some(value) = env::var(ENV_KEEP_NAL_HEADER).ok().and_then(|v| parse_bool(&v)) {
            self.keep_nal_header = value;
        }
    }

    fn apply_str(&mut self, content: &str) {
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim().trim_matches('"').trim_matches('\'');
            let Some(value) = parse_bool(value) else {
                log::warn!("ignoring config line with non-boolean value: {}", line);
                continue;
            };
            match key.trim() {
                "strip_nal_byte" => self.strip_nal_byte = value,
                "keep_nal_header" => self.keep_nal_header = value,
                other => log::debug!("ignoring unknown config key {}", other),
            }
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Creates a default config template file if it doesn't exist
pub fn create_default_config_template<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
    if !path.as_ref().exists() {
        let template = r#"# h264-reformat configuration
# Environment variables H264_REFORMAT_STRIP_NAL_BYTE and
# H264_REFORMAT_KEEP_NAL_HEADER take the same values.

# remove_header also drops the NAL header byte after a start code
strip_nal_byte = false

# Annex-B to AVCC conversion keeps each NAL header byte in the payload
keep_nal_header = false
"#;
        fs::write(path, template)?;
    }
    Ok(())
}
