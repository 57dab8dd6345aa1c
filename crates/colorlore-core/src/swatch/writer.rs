//! Swatch exchange block writer

use std::io::Write;

use super::{
    BLOCK_COLOR, BLOCK_GROUP_END, BLOCK_GROUP_START, COLOR_MODEL_RGB, ColorType, SIGNATURE,
    VERSION_MAJOR, VERSION_MINOR,
};
use crate::color::Rgb;
use crate::{Error, Result};

/// In-memory swatch exchange file
///
/// Blocks are appended in call order and the header block count always
/// matches what was written. Group nesting is not checked; the format
/// allows colors outside any group.
///
/// ```
/// use colorlore_core::color::Rgb;
/// use colorlore_core::swatch::{ColorType, SwatchFile};
///
/// let mut file = SwatchFile::new();
/// file.group_start("Reds")?
///     .color("Red", Rgb::RED, ColorType::Normal)?
///     .group_end();
/// assert_eq!(file.block_count(), 3);
/// # Ok::<(), colorlore_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SwatchFile {
    body: Vec<u8>,
    blocks: u32,
}

impl SwatchFile {
    /// Create an empty file
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blocks written so far
    pub fn block_count(&self) -> u32 {
        self.blocks
    }

    /// Open a named group
    pub fn group_start(&mut self, name: &str) -> Result<&mut Self> {
        let name = utf16_name(name)?;
        self.block(BLOCK_GROUP_START, name.len());
        self.body.extend_from_slice(&name);
        Ok(self)
    }

    /// Add one RGB color entry
    pub fn color(&mut self, name: &str, rgb: Rgb, color_type: ColorType) -> Result<&mut Self> {
        let name = utf16_name(name)?;
        // name + model + 3 channels + color type
        self.block(BLOCK_COLOR, name.len() + 4 + 3 * 4 + 2);
        self.body.extend_from_slice(&name);
        self.body.extend_from_slice(COLOR_MODEL_RGB);
        for channel in rgb.to_unit() {
            self.body.extend_from_slice(&(channel as f32).to_be_bytes());
        }
        self.body.extend_from_slice(&(color_type as u16).to_be_bytes());
        Ok(self)
    }

    /// Close the current group
    pub fn group_end(&mut self) -> &mut Self {
        self.block(BLOCK_GROUP_END, 0);
        self
    }

    /// Header followed by all blocks
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(12 + self.body.len());
        out.extend_from_slice(SIGNATURE);
        out.extend_from_slice(&VERSION_MAJOR.to_be_bytes());
        out.extend_from_slice(&VERSION_MINOR.to_be_bytes());
        out.extend_from_slice(&self.blocks.to_be_bytes());
        out.extend_from_slice(&self.body);
        out
    }

    /// Write the encoded file to `writer`
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    fn block(&mut self, block_type: u16, len: usize) {
        self.body.extend_from_slice(&block_type.to_be_bytes());
        // names are capped at u16::MAX units, so every block length fits
        self.body.extend_from_slice(&(len as u32).to_be_bytes());
        self.blocks += 1;
    }
}

/// Length-prefixed, null-terminated UTF-16BE string
fn utf16_name(name: &str) -> Result<Vec<u8>> {
    let units: Vec<u16> = name.encode_utf16().chain(std::iter::once(0)).collect();
    let count = u16::try_from(units.len()).map_err(|_| Error::NameTooLong {
        name: name.chars().take(32).collect(),
        units: units.len(),
    })?;

    let mut out = Vec::with_capacity(2 + units.len() * 2);
    out.extend_from_slice(&count.to_be_bytes());
    for unit in units {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    Ok(out)
}
