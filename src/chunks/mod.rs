mod data;
mod fmt;

pub(crate) use data::read_samples;
pub use fmt::FormatHeader;
