//! Hit object type bit flags.

use crate::osu::parse::{ParseError, Result, config::BaseTypePolicy};

/// Bit of a hit circle.
pub const CIRCLE: u32 = 0x1;
/// Bit of a slider.
pub const SLIDER: u32 = 0x2;
/// Bit starting a new combo.
pub const NEW_COMBO: u32 = 0x4;
/// Bit of a spinner.
pub const SPINNER: u32 = 0x8;
/// Bits holding how many combo colours to skip on a new combo.
pub const COMBO_SKIP: u32 = 0x10 | 0x20 | 0x40;
/// Bit of an osu!mania column object.
pub const MANIA_COLUMN: u32 = 0x80;

/// The mutually exclusive base shape of a hit object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BaseType {
    /// A single tap.
    Circle,
    /// A tap followed along a path.
    Slider,
    /// A spin held until an end time.
    Spinner,
}

impl std::fmt::Display for BaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Circle => write!(f, "circle"),
            Self::Slider => write!(f, "slider"),
            Self::Spinner => write!(f, "spinner"),
        }
    }
}

/// The decoded `type` field of a hit object line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HitObjectType {
    /// The base shape.
    pub base: BaseType,
    /// Whether the object starts a new combo.
    pub new_combo: bool,
    /// How many combo colours are skipped, `0..=7`.
    pub combo_skip: u8,
    /// Whether the object is an osu!mania column object.
    pub mania_column: bool,
}

impl HitObjectType {
    /// Decodes the raw flags.
    ///
    /// The base type is checked in the order circle, slider, spinner and the first set bit wins,
    /// so `0b11` is a circle. The modifiers are read regardless of the base type.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedHitObjectType`] when no base bit is set and the policy is
    /// [`BaseTypePolicy::Reject`].
    pub fn decode(raw: u32, policy: BaseTypePolicy) -> Result<Self> {
        let base = if raw & CIRCLE != 0 {
            BaseType::Circle
        } else if raw & SLIDER != 0 {
            BaseType::Slider
        } else if raw & SPINNER != 0 {
            BaseType::Spinner
        } else {
            match policy {
                BaseTypePolicy::Reject => return Err(ParseError::MalformedHitObjectType(raw)),
                BaseTypePolicy::TreatAsCircle => BaseType::Circle,
            }
        };
        Ok(Self {
            base,
            new_combo: raw & NEW_COMBO != 0,
            combo_skip: ((raw & COMBO_SKIP) >> 4) as u8,
            mania_column: raw & MANIA_COLUMN != 0,
        })
    }
}
