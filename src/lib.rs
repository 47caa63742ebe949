//! Basic support for RIFF/WAVE PCM file reading and writing.
//!
//! A [`WavFile`] is opened from a path, populated by chunk traversal
//! ([`WavFile::read_all`]), and then exposes its "fmt " header and a
//! normalized sample buffer for random access. [`WavFile::save`]
//! re-serializes the container; it either produces a complete file or
//! leaves nothing behind. Only canonical PCM files with 8, 16 or 32 bits
//! per sample are decodable; unrecognized chunks are skipped by their
//! declared size. Dropping the `WavFile` releases the file handle, the
//! header and the sample buffer together.

mod chunks;
mod codec;
mod error;
mod types;

pub use chunks::FormatHeader;
pub use error::{Result, WavError};
pub use types::ChunkTag;

use byteorder::{ReadBytesExt, WriteBytesExt, LE};
use std::cell::OnceCell;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

pub struct WavFile {
    reader: BufReader<File>,
    header: Option<FormatHeader>,
    samples: Vec<f64>,
    data_length: u32,
    format_chunk_found: bool,
    data_chunk_found: bool,
    exhausted: bool,
    sample_count: OnceCell<usize>,
}

impl WavFile {
    /// Opens a WAVE file and validates the outer RIFF envelope: "RIFF"
    /// magic, a 4-byte overall size field (ignored), "WAVE" magic. The
    /// chunks that follow are left for [`read_all`](Self::read_all).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<WavFile> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != b"RIFF" {
            return Err(WavError::InvalidFormat);
        }
        reader.seek(SeekFrom::Current(4))?;
        reader.read_exact(&mut magic)?;
        if &magic != b"WAVE" {
            return Err(WavError::InvalidFormat);
        }

        Ok(WavFile {
            reader,
            header: None,
            samples: Vec::new(),
            data_length: 0,
            format_chunk_found: false,
            data_chunk_found: false,
            exhausted: false,
            sample_count: OnceCell::new(),
        })
    }

    /// Processes chunks until the stream is exhausted or a recognized
    /// chunk fails to parse. On failure the container keeps whatever
    /// partial state it reached and [`is_ready`](Self::is_ready) stays
    /// false.
    pub fn read_all(&mut self) -> Result<()> {
        while self.process_next_chunk()? {}
        Ok(())
    }

    /// Reads one chunk tag and dispatches on it. Returns `Ok(false)` once
    /// a whole 4-byte tag can no longer be read; running out of input here
    /// is the normal end of traversal, not an error.
    pub fn process_next_chunk(&mut self) -> Result<bool> {
        let tag = match read_tag(&mut self.reader)? {
            Some(tag) => tag,
            None => {
                self.exhausted = true;
                return Ok(false);
            }
        };

        match ChunkTag::from(tag) {
            ChunkTag::Fmt => self.process_format_chunk()?,
            ChunkTag::Data => self.process_data_chunk()?,
            ChunkTag::Other(_) => self.skip_unknown_chunk()?,
        }
        Ok(true)
    }

    fn process_format_chunk(&mut self) -> Result<()> {
        let size = self.reader.read_u32::<LE>()?;
        if size != FormatHeader::SIZE {
            // Extended/non-canonical format chunks are out of scope.
            return Err(WavError::FormatChunkSize(size));
        }
        self.header = Some(FormatHeader::read(&mut self.reader)?);
        self.format_chunk_found = true;
        Ok(())
    }

    fn process_data_chunk(&mut self) -> Result<()> {
        let data_length = self.reader.read_u32::<LE>()?;
        let bits_per_sample = match &self.header {
            Some(header) => header.bits_per_sample,
            None => return Err(WavError::DataBeforeFormat),
        };

        self.samples = chunks::read_samples(&mut self.reader, data_length, bits_per_sample)?;
        self.data_length = data_length;
        self.data_chunk_found = true;
        Ok(())
    }

    /// Skips over a chunk this reader does not interpret, advancing the
    /// cursor by the declared size.
    fn skip_unknown_chunk(&mut self) -> Result<()> {
        let size = self.reader.read_u32::<LE>()?;
        self.reader.seek(SeekFrom::Current(i64::from(size)))?;
        Ok(())
    }

    /// True once both the "fmt " and "data" chunks were parsed and the
    /// stream was consumed to its end.
    pub fn is_ready(&self) -> bool {
        self.format_chunk_found && self.data_chunk_found && self.exhausted
    }

    /// Number of decoded samples, memoized from the declared data length
    /// and the sample width. 0 while the container is not ready.
    pub fn sample_count(&self) -> usize {
        if !self.is_ready() {
            return 0;
        }
        *self.sample_count.get_or_init(|| {
            let bytes_per_sample = self
                .header
                .as_ref()
                .and_then(|header| header.bytes_per_sample().ok())
                .unwrap_or(0);
            if bytes_per_sample == 0 {
                return 0;
            }
            (self.data_length / bytes_per_sample) as usize
        })
    }

    /// Returns the normalized sample at `index`, or `None` when the
    /// container is not ready or the index is out of bounds.
    pub fn get_sample(&self, index: usize) -> Option<f64> {
        if !self.is_ready() || index >= self.sample_count() {
            return None;
        }
        Some(self.samples[index])
    }

    /// Overwrites the sample at `index`. Same bounds policy as
    /// [`get_sample`](Self::get_sample); returns whether the write took
    /// place.
    pub fn set_sample(&mut self, index: usize, value: f64) -> bool {
        if !self.is_ready() || index >= self.sample_count() {
            return false;
        }
        self.samples[index] = value;
        true
    }

    pub fn header(&self) -> Option<&FormatHeader> {
        self.header.as_ref()
    }

    /// Bits per sample from the format header, or 0 when not ready.
    pub fn bits_per_sample(&self) -> u16 {
        if !self.is_ready() {
            return 0;
        }
        self.header.as_ref().map_or(0, |h| h.bits_per_sample)
    }

    /// Sample rate from the format header, or 0 when not ready.
    pub fn sample_rate(&self) -> u32 {
        if !self.is_ready() {
            return 0;
        }
        self.header.as_ref().map_or(0, |h| h.sample_rate)
    }

    /// Channel count from the format header, or 0 when not ready.
    pub fn num_channels(&self) -> u16 {
        if !self.is_ready() {
            return 0;
        }
        self.header.as_ref().map_or(0, |h| h.num_channels)
    }

    /// Serializes the container to `path`, re-encoding every sample to
    /// its original bit width. All-or-nothing: any write failure deletes
    /// the partial output before returning the error, so no truncated
    /// file is ever left behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);

        let result = self
            .write_contents(&mut writer)
            .and_then(|()| writer.flush().map_err(WavError::from));
        if let Err(err) = result {
            drop(writer);
            let _ = fs::remove_file(path);
            return Err(err);
        }
        Ok(())
    }

    fn write_contents(&self, writer: &mut impl Write) -> Result<()> {
        let header = match &self.header {
            Some(header) if self.data_chunk_found => header,
            _ => return Err(WavError::NotReady),
        };

        // The written length comes from the buffer, not the declared
        // length: remainder bytes of a non-aligned source length were
        // discarded on read and must not be declared on write.
        let data_length = self.samples.len() as u32 * header.bytes_per_sample()?;

        writer.write_all(b"RIFF")?;
        writer.write_u32::<LE>(8 + FormatHeader::SIZE + 8 + data_length)?;
        writer.write_all(b"WAVE")?;
        writer.write_all(b"fmt ")?;
        writer.write_u32::<LE>(FormatHeader::SIZE)?;
        header.write(writer)?;
        writer.write_all(b"data")?;
        writer.write_u32::<LE>(data_length)?;

        for &sample in &self.samples {
            match header.bits_per_sample {
                8 => writer.write_u8(codec::encode_u8(sample))?,
                16 => writer.write_i16::<LE>(codec::encode_i16(sample))?,
                32 => writer.write_i32::<LE>(codec::encode_i32(sample))?,
                other => return Err(WavError::BitDepth(other)),
            }
        }
        Ok(())
    }
}

/// Reads the next 4-byte chunk tag, retrying interrupted reads. Returns
/// `None` once the stream cannot supply a whole tag; running out here is
/// the normal end of traversal.
fn read_tag(reader: &mut impl Read) -> Result<Option<[u8; 4]>> {
    let mut tag = [0u8; 4];
    let mut filled = 0;
    while filled < tag.len() {
        match reader.read(&mut tag[filled..]) {
            Ok(0) => return Ok(None),
            Ok(n) => filled += n,
            Err(ref err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err.into()),
        }
    }
    Ok(Some(tag))
}
