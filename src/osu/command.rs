//! Definitions of record data and their decoders.
//!
//! Structures in this module are the recurring sub-records of a beatmap line: hit object type
//! and sound bit flags, slider paths, sample overrides and colours. Section decoders in
//! [`super::parse`] call into here for every field they split out.

pub mod curve;
pub mod graphics;
pub mod hit_sound;
pub mod hit_type;
pub mod mixin;
pub mod sample;

use crate::osu::parse::{ParseError, Result};

/// Parses an integer field. A decimal literal such as `256.0` is truncated toward zero.
pub(crate) fn parse_int<T: TryFrom<i64>>(token: &str, field: &'static str) -> Result<T> {
    let token = token.trim();
    let invalid = || ParseError::InvalidNumber {
        field,
        token: token.to_owned(),
    };
    let value = match token.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            let float = token.parse::<f64>().map_err(|_| invalid())?;
            if !float.is_finite() {
                return Err(invalid());
            }
            float.trunc() as i64
        }
    };
    T::try_from(value).map_err(|_| invalid())
}

/// Parses a finite floating-point field.
pub(crate) fn parse_float(token: &str, field: &'static str) -> Result<f64> {
    let token = token.trim();
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            field,
            token: token.to_owned(),
        })
}
