use crate::error::*;
use byteorder::{ReadBytesExt, WriteBytesExt, LE};
use std::io::{Read, Write};

/// The fixed 16-byte body of a canonical PCM "fmt " chunk.
#[derive(Debug, Clone)]
pub struct FormatHeader {
    pub audio_format: u16,
    pub num_channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

impl FormatHeader {
    /// Serialized size of the header body.
    pub const SIZE: u32 = 16;

    /// Reads the body after a declared chunk size of 16 has been checked.
    pub(crate) fn read(reader: &mut impl Read) -> Result<Self> {
        let audio_format = reader.read_u16::<LE>()?;
        let num_channels = reader.read_u16::<LE>()?;
        let sample_rate = reader.read_u32::<LE>()?;
        let byte_rate = reader.read_u32::<LE>()?;
        let block_align = reader.read_u16::<LE>()?;
        let bits_per_sample = reader.read_u16::<LE>()?;

        Ok(FormatHeader {
            audio_format,
            num_channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
        })
    }

    pub(crate) fn write(&self, writer: &mut impl Write) -> Result<()> {
        writer.write_u16::<LE>(self.audio_format)?;
        writer.write_u16::<LE>(self.num_channels)?;
        writer.write_u32::<LE>(self.sample_rate)?;
        writer.write_u32::<LE>(self.byte_rate)?;
        writer.write_u16::<LE>(self.block_align)?;
        writer.write_u16::<LE>(self.bits_per_sample)?;
        Ok(())
    }

    /// Whole bytes per sample, or an error for depths the codec cannot
    /// decode.
    pub(crate) fn bytes_per_sample(&self) -> Result<u32> {
        match self.bits_per_sample {
            8 | 16 | 32 => Ok(u32::from(self.bits_per_sample) / 8),
            other => Err(WavError::BitDepth(other)),
        }
    }
}
