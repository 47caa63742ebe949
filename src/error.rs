use thiserror::Error;

#[derive(Error, Debug)]
pub enum WavError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid format")]
    InvalidFormat,
    #[error("format chunk size is {0}, expected 16")]
    FormatChunkSize(u32),
    #[error("unsupported bit depth {0}")]
    BitDepth(u16),
    #[error("data chunk appears before format chunk")]
    DataBeforeFormat,

    #[error("missing format or data chunk")]
    NotReady,
}

pub type Result<T> = std::result::Result<T, WavError>;
