//! Defines for graphics.

use crate::osu::parse::{ParseError, Result};

use super::parse_int;

/// A colour assigned to a combo or a skin element, in `r,g,b` order.
///
/// Components are kept as written; they are not clamped into `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red component.
    pub r: i32,
    /// Green component.
    pub g: i32,
    /// Blue component.
    pub b: i32,
}

impl Rgb {
    /// Creates a new colour.
    #[must_use]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Decodes the right-hand side of a colour line, such as `255,0,100`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedColourLine`] unless there are exactly three components,
    /// and [`ParseError::InvalidNumber`] when a component is not an integer.
    pub fn from_components(value: &str) -> Result<Self> {
        let components: Vec<&str> = value.split(',').map(str::trim).collect();
        let [r, g, b] = components.as_slice() else {
            return Err(ParseError::MalformedColourLine {
                components: components.len(),
            });
        };
        Ok(Self {
            r: parse_int(r, "red")?,
            g: parse_int(g, "green")?,
            b: parse_int(b, "blue")?,
        })
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}
