//! Swatch exchange reader for tests
//!
//! Walks blocks by their declared lengths the way design tools do, so a
//! wrong length in the writer shows up as a parse failure here rather
//! than as silently shifted fields.

use anyhow::{Context, Result, bail, ensure};

/// A parsed swatch exchange file
#[derive(Debug, Clone, PartialEq)]
pub struct AseFile {
    pub version: (u16, u16),
    /// Block count declared in the header
    pub declared_blocks: u32,
    pub blocks: Vec<AseBlock>,
}

/// One block of a swatch exchange file
#[derive(Debug, Clone, PartialEq)]
pub enum AseBlock {
    GroupStart {
        name: String,
    },
    GroupEnd,
    Color {
        name: String,
        model: [u8; 4],
        values: Vec<f32>,
        color_type: u16,
    },
}

impl AseFile {
    /// Parse a complete file
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(data);

        let signature = cursor.take(4).context("header")?;
        ensure!(signature == b"ASEF", "bad signature {signature:02x?}");
        let version = (cursor.u16()?, cursor.u16()?);
        let declared_blocks = cursor.u32()?;

        let mut blocks = Vec::new();
        while !cursor.is_empty() {
            let index = blocks.len();
            let block_type = cursor.u16().with_context(|| format!("block {index} type"))?;
            let len = cursor.u32().with_context(|| format!("block {index} length"))? as usize;
            let body = cursor
                .take(len)
                .with_context(|| format!("block {index} body of {len} bytes"))?;
            blocks.push(parse_block(block_type, body).with_context(|| format!("block {index}"))?);
        }

        ensure!(
            blocks.len() == declared_blocks as usize,
            "header declares {declared_blocks} blocks, found {}",
            blocks.len()
        );

        Ok(Self {
            version,
            declared_blocks,
            blocks,
        })
    }

    /// Names and values of all color blocks in order
    pub fn colors(&self) -> Vec<(&str, &[f32])> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                AseBlock::Color { name, values, .. } => Some((name.as_str(), values.as_slice())),
                _ => None,
            })
            .collect()
    }
}

fn parse_block(block_type: u16, body: &[u8]) -> Result<AseBlock> {
    let mut cursor = Cursor::new(body);
    let block = match block_type {
        0xC001 => AseBlock::GroupStart {
            name: cursor.utf16_name()?,
        },
        0xC002 => AseBlock::GroupEnd,
        0x0001 => {
            let name = cursor.utf16_name()?;
            let model: [u8; 4] = cursor.take(4)?.try_into()?;
            let channels = match &model {
                b"RGB " | b"LAB " => 3,
                b"CMYK" => 4,
                b"Gray" => 1,
                _ => bail!("unknown color model {model:02x?}"),
            };
            let values = (0..channels)
                .map(|_| cursor.f32())
                .collect::<Result<Vec<_>>>()?;
            let color_type = cursor.u16()?;
            AseBlock::Color {
                name,
                model,
                values,
                color_type,
            }
        }
        other => bail!("unknown block type {other:#06x}"),
    };
    ensure!(cursor.is_empty(), "{} trailing bytes in block", cursor.remaining());
    Ok(block)
}

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        ensure!(
            n <= self.remaining(),
            "need {n} bytes at offset {}, have {}",
            self.pos,
            self.remaining()
        );
        let out = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    fn u16(&mut self) -> Result<u16> {
        Ok(u16::from_be_bytes(self.take(2)?.try_into()?))
    }

    fn u32(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.take(4)?.try_into()?))
    }

    fn f32(&mut self) -> Result<f32> {
        Ok(f32::from_be_bytes(self.take(4)?.try_into()?))
    }

    fn utf16_name(&mut self) -> Result<String> {
        let units = self.u16()? as usize;
        ensure!(units > 0, "name length must include the terminator");
        let mut code_units = Vec::with_capacity(units);
        for _ in 0..units {
            code_units.push(self.u16()?);
        }
        ensure!(code_units.pop() == Some(0), "name is not null terminated");
        Ok(String::from_utf16(&code_units)?)
    }
}
