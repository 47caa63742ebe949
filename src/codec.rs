//! Conversions between fixed-width PCM integers and normalized samples.
//!
//! Decoded samples live nominally in [-1.0, 1.0]. Unsigned 8-bit PCM is
//! offset-mapped over its 255-step range; signed 16/32-bit PCM is scaled
//! by its power-of-two full-scale value. The forward maps are not
//! perfectly invertible at the representation boundaries, so a
//! decode/encode round trip may land one least-significant bit away from
//! the original integer. That is a property of the mapping, not a bug.

const I16_SCALE: f64 = 32768.0;
const I32_SCALE: f64 = 2147483648.0;

pub fn decode_u8(raw: u8) -> f64 {
    f64::from(raw) * (2.0 / 255.0) - 1.0
}

pub fn encode_u8(sample: f64) -> u8 {
    ((sample + 1.0) * (255.0 / 2.0)).round() as u8
}

pub fn decode_i16(raw: i16) -> f64 {
    f64::from(raw) / I16_SCALE
}

pub fn encode_i16(sample: f64) -> i16 {
    (sample * I16_SCALE).round() as i16
}

pub fn decode_i32(raw: i32) -> f64 {
    f64::from(raw) / I32_SCALE
}

pub fn encode_i32(sample: f64) -> i32 {
    (sample * I32_SCALE).round() as i32
}
