//! Swatch exchange encoding
//!
//! Writes the binary swatch exchange layout understood by design tools:
//! a 12-byte header (`ASEF`, version 1.0, block count) followed by
//! big-endian blocks. Names are stored as length-prefixed, null-terminated
//! UTF-16BE; colors as a 4-byte model tag and 32-bit floats in [0, 1].
//!
//! Only writing is supported.

mod writer;

use serde::{Deserialize, Serialize};

pub use writer::SwatchFile;

use crate::Result;
use crate::color::Rgb;

/// File signature
pub const SIGNATURE: &[u8; 4] = b"ASEF";

/// Format version written to the header
pub const VERSION_MAJOR: u16 = 1;
pub const VERSION_MINOR: u16 = 0;

/// Block type tags
pub const BLOCK_GROUP_START: u16 = 0xC001;
pub const BLOCK_GROUP_END: u16 = 0xC002;
pub const BLOCK_COLOR: u16 = 0x0001;

/// Color model tag for RGB entries, space padded
pub const COLOR_MODEL_RGB: &[u8; 4] = b"RGB ";

/// Group used when none is configured
pub const DEFAULT_GROUP_NAME: &str = "Traditional Chinese Colors";

/// Swatch color type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u16)]
pub enum ColorType {
    Global = 0,
    Spot = 1,
    #[default]
    Normal = 2,
}

/// Swatch export configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwatchOptions {
    /// Name of the enclosing group
    pub group_name: String,
}

impl Default for SwatchOptions {
    fn default() -> Self {
        Self {
            group_name: DEFAULT_GROUP_NAME.to_string(),
        }
    }
}

/// Encode one named color inside the default group
///
/// The output holds exactly two blocks, a group start and the color entry.
/// No group end block is written.
pub fn encode_swatch(color_name: &str, hex: &str) -> Result<Vec<u8>> {
    encode_swatch_with(color_name, hex, &SwatchOptions::default())
}

/// Encode one named color inside the configured group
pub fn encode_swatch_with(color_name: &str, hex: &str, options: &SwatchOptions) -> Result<Vec<u8>> {
    let rgb = Rgb::from_hex(hex)?;
    let mut file = SwatchFile::new();
    file.group_start(&options.group_name)?
        .color(color_name, rgb, ColorType::Normal)?;
    Ok(file.to_bytes())
}

/// Encode a closed group of named colors
///
/// Every hex is validated before anything is written.
pub fn encode_palette<N, H>(group_name: &str, colors: &[(N, H)]) -> Result<Vec<u8>>
where
    N: AsRef<str>,
    H: AsRef<str>,
{
    let mut parsed = Vec::with_capacity(colors.len());
    for (name, hex) in colors {
        parsed.push((name.as_ref(), Rgb::from_hex(hex.as_ref())?));
    }

    let mut file = SwatchFile::new();
    file.group_start(group_name)?;
    for (name, rgb) in parsed {
        file.color(name, rgb, ColorType::Normal)?;
    }
    file.group_end();
    Ok(file.to_bytes())
}

/// Download file name for a swatch: whitespace runs become `_`
pub fn swatch_file_name(color_name: &str) -> String {
    let mut out = String::with_capacity(color_name.len() + 4);
    let mut in_space = false;
    for c in color_name.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out.push_str(".ase");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn f32_at(bytes: &[u8], at: usize) -> f32 {
        f32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    }

    #[test]
    fn test_test_red_layout() {
        let bytes = encode_swatch("Test Red", "#FF0000").unwrap();
        assert_eq!(&bytes[0..4], b"ASEF");
        assert_eq!(&bytes[4..8], &[0x00, 0x01, 0x00, 0x00]);
        assert_eq!(&bytes[8..12], &[0x00, 0x00, 0x00, 0x02]);

        // Group start: tag, length 2 + 27 * 2, name
        assert_eq!(&bytes[12..14], &[0xc0, 0x01]);
        assert_eq!(&bytes[14..18], &56u32.to_be_bytes());
        assert_eq!(&bytes[18..20], &27u16.to_be_bytes());
        let color_block = 18 + 56;

        assert_eq!(&bytes[color_block..color_block + 2], &[0x00, 0x01]);
        let name = color_block + 6;
        assert_eq!(&bytes[name..name + 2], &9u16.to_be_bytes());
        let model = name + 2 + 9 * 2;
        assert_eq!(&bytes[model..model + 4], b"RGB ");
        assert_eq!(f32_at(&bytes, model + 4), 1.0);
        assert_eq!(f32_at(&bytes, model + 8), 0.0);
        assert_eq!(f32_at(&bytes, model + 12), 0.0);
        assert_eq!(&bytes[model + 16..], &[0x00, 0x02]);
    }

    #[test]
    fn test_channel_floats() {
        let bytes = encode_swatch("Carmine", "#9d2933").unwrap();
        let model = bytes.len() - 2 - 12 - 4;
        assert_eq!(f32_at(&bytes, model + 4), (157.0_f64 / 255.0) as f32);
        assert_eq!(f32_at(&bytes, model + 8), (41.0_f64 / 255.0) as f32);
        assert_eq!(f32_at(&bytes, model + 12), (51.0_f64 / 255.0) as f32);
    }

    #[test]
    fn test_custom_group() {
        let options = SwatchOptions {
            group_name: "Nippon".into(),
        };
        let bytes = encode_swatch_with("Ai", "#165e83", &options).unwrap();
        assert_eq!(&bytes[14..18], &(2u32 + 7 * 2).to_be_bytes());
    }

    #[test]
    fn test_invalid_hex() {
        let err = encode_swatch("Bad", "ff0000").unwrap_err();
        assert!(matches!(err, Error::InvalidColorFormat(_)));
    }

    #[test]
    fn test_palette_is_closed_group() {
        let bytes = encode_palette("Reds", &[("A", "#ff0000"), ("B", "#800000")]).unwrap();
        assert_eq!(&bytes[8..12], &4u32.to_be_bytes());
        assert_eq!(&bytes[bytes.len() - 6..], &[0xc0, 0x02, 0, 0, 0, 0]);

        assert!(encode_palette("Reds", &[("A", "#ff0000"), ("B", "nope")]).is_err());
    }

    #[test]
    fn test_file_name() {
        assert_eq!(swatch_file_name("Test Red"), "Test_Red.ase");
        assert_eq!(swatch_file_name("Classic  \tBlue"), "Classic_Blue.ase");
        assert_eq!(swatch_file_name("胭脂"), "胭脂.ase");
    }

    #[test]
    fn test_options_default_group() {
        let options: SwatchOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.group_name, "Traditional Chinese Colors");
    }
}
