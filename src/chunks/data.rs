use crate::codec;
use crate::error::*;
use byteorder::{ReadBytesExt, LE};
use std::io::Read;

/// Decodes a "data" chunk body of `data_length` bytes into normalized
/// samples, one fixed-width group at a time.
///
/// Consumes exactly `data_length` bytes: if the declared length is not a
/// multiple of the sample width, the trailing remainder is read and
/// discarded so the cursor lands on the next chunk boundary. A short read
/// anywhere fails the whole chunk.
pub(crate) fn read_samples(
    reader: &mut impl Read,
    data_length: u32,
    bits_per_sample: u16,
) -> Result<Vec<f64>> {
    let bytes_per_sample = match bits_per_sample {
        8 | 16 | 32 => u32::from(bits_per_sample) / 8,
        other => return Err(WavError::BitDepth(other)),
    };

    let count = (data_length / bytes_per_sample) as usize;
    // The declared length is untrusted; cap the reservation so a bogus
    // length fails on the first short read instead of on allocation.
    let mut samples = Vec::with_capacity(count.min(64 * 1024));

    for _ in 0..count {
        let sample = match bits_per_sample {
            8 => codec::decode_u8(reader.read_u8()?),
            16 => codec::decode_i16(reader.read_i16::<LE>()?),
            32 => codec::decode_i32(reader.read_i32::<LE>()?),
            _ => unreachable!(),
        };
        samples.push(sample);
    }

    let remainder = data_length % bytes_per_sample;
    for _ in 0..remainder {
        reader.read_u8()?;
    }

    Ok(samples)
}
