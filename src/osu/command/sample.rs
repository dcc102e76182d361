//! Sample sets and per-object sample overrides.

use crate::osu::parse::{ParseError, Result};

use super::parse_int;

/// A bank of hit sound samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SampleSet {
    /// `0`, inherit from the context.
    #[default]
    Auto,
    /// `1`
    Normal,
    /// `2`
    Soft,
    /// `3`
    Drum,
}

impl SampleSet {
    /// Decodes a sample set field.
    ///
    /// `None` and an empty token mean the field was absent from its line. An integer outside
    /// `0..=3` falls back to [`SampleSet::Auto`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UndefinedSampleSet`] if the field is absent, and
    /// [`ParseError::InvalidNumber`] if it is not an integer.
    pub fn decode(field: Option<&str>) -> Result<Self> {
        let token = field
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(ParseError::UndefinedSampleSet)?;
        let raw: i64 = parse_int(token, "sample set")?;
        Ok(Self::from(raw))
    }

    /// The name used in sample filenames, as in `drum-hitnormal.wav`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Normal => "normal",
            Self::Soft => "soft",
            Self::Drum => "drum",
        }
    }
}

impl From<i64> for SampleSet {
    fn from(value: i64) -> Self {
        match value {
            1 => Self::Normal,
            2 => Self::Soft,
            3 => Self::Drum,
            _ => Self::Auto,
        }
    }
}

impl std::fmt::Display for SampleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The sample override at the end of a hit object line, `sampleSet:additionSet:index:volume:filename`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extras {
    /// Sample set of the normal sound.
    pub sample_set: SampleSet,
    /// Sample set of the whistle, finish and clap sounds, as written.
    pub addition_set: i32,
    /// Custom sample index. `0` uses the timing point's index.
    pub custom_index: i32,
    /// Sample volume. `0` uses the timing point's volume.
    pub volume: i32,
    /// Custom sample filename replacing the normal sound.
    pub filename: Option<String>,
}

impl Extras {
    /// Decodes an extras field. Trailing fields may be omitted and default to zero or none.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UndefinedSampleSet`] if the leading sample set is empty, and
    /// [`ParseError::InvalidNumber`] for a non-integer numeric field.
    pub fn decode(field: &str) -> Result<Self> {
        let mut parts = field.splitn(5, ':');
        let sample_set = SampleSet::decode(parts.next())?;
        let mut next_int = |name| {
            parts
                .next()
                .filter(|token| !token.trim().is_empty())
                .map_or(Ok(0), |token| parse_int(token, name))
        };
        let addition_set = next_int("addition set")?;
        let custom_index = next_int("custom index")?;
        let volume = next_int("volume")?;
        let filename = parts
            .next()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToOwned::to_owned);
        Ok(Self {
            sample_set,
            addition_set,
            custom_index,
            volume,
            filename,
        })
    }
}

/// Sample sets of one slider edge, `normalSet:additionSet`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeSet {
    /// Sample set of the normal sound.
    pub normal: SampleSet,
    /// Sample set of the addition sounds.
    pub addition: SampleSet,
}

impl EdgeSet {
    /// Decodes one `normal:addition` token.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UndefinedSampleSet`] if either half is missing.
    pub fn decode(token: &str) -> Result<Self> {
        let mut parts = token.split(':');
        Ok(Self {
            normal: SampleSet::decode(parts.next())?,
            addition: SampleSet::decode(parts.next())?,
        })
    }
}
