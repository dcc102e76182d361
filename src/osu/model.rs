//! The decoded beatmap document.
//!
//! [`Osu`] holds one optional value per section. A section that did not appear in the source
//! stays `None`, which serializes as `null`.

pub mod hit_object;
pub mod timing;

use std::collections::HashMap;

use crate::osu::command::graphics::Rgb;

pub use self::{
    hit_object::{HitObject, HitObjectKind, Slider},
    timing::TimingPoint,
};

/// A parsed beatmap.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Osu {
    /// The number after `osu file format v`.
    pub format_version: u32,
    /// `[General]`
    pub general: Option<KeyValueSection>,
    /// `[Editor]`
    pub editor: Option<KeyValueSection>,
    /// `[Metadata]`
    pub metadata: Option<KeyValueSection>,
    /// `[Difficulty]`
    pub difficulty: Option<KeyValueSection>,
    /// `[Events]`, kept unparsed.
    pub events: Option<EventsSection>,
    /// `[TimingPoints]` in file order.
    pub timing_points: Option<Vec<TimingPoint>>,
    /// `[Colours]`
    pub colours: Option<ColourMap>,
    /// `[HitObjects]` in file order.
    pub hit_objects: Option<Vec<HitObject>>,
    /// Sample filenames the hit objects need, in first-use order. Present only when both timing
    /// points and hit objects are.
    pub required_samples: Option<Vec<String>>,
}

impl Osu {
    /// Returns the timing point in effect at `time`: the last one whose offset is not after it.
    #[must_use]
    pub fn timing_point_at(&self, time: i64) -> Option<&TimingPoint> {
        self.timing_points
            .as_deref()?
            .iter()
            .take_while(|point| point.offset <= time)
            .last()
    }
}

/// A value on the right of a `Key: value` line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// The trimmed text parsed fully as a finite number.
    Number(f64),
    /// Any other text, trimmed.
    Text(String),
}

impl Value {
    /// Trims `raw` and reads it as a number when it is one.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() => Self::Number(number),
            _ => Self::Text(trimmed.to_owned()),
        }
    }

    /// Returns the number, if this is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(_) => None,
        }
    }

    /// Returns the text, if this is not a number.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A section of `Key: value` lines.
///
/// Keys are stored exactly as written before the colon, so `"Title "` and `"Title"` differ.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct KeyValueSection(HashMap<String, Value>);

impl KeyValueSection {
    /// Inserts a value, replacing an earlier one with the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Looks up a value by its raw key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Looks up a numeric value.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_number)
    }

    /// Looks up a text value.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_text)
    }

    /// Iterates the entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// The number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the section has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The combo and skin colours of `[Colours]`, keyed by the trimmed name before the colon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ColourMap(HashMap<String, Rgb>);

impl ColourMap {
    /// Inserts a colour, replacing an earlier one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, colour: Rgb) {
        self.0.insert(name.into(), colour);
    }

    /// Looks up a colour by name, such as `Combo1`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.0.get(name).copied()
    }

    /// The combo colours `Combo1`, `Combo2`, ... in number order, stopping at the first gap.
    #[must_use]
    pub fn combo_colours(&self) -> Vec<Rgb> {
        (1..)
            .map_while(|n| self.get(&format!("Combo{n}")))
            .collect()
    }

    /// The number of colours.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no colour is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The `[Events]` section. Storyboard scripting is not interpreted; lines are kept as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventsSection {
    /// The trimmed lines of the section body.
    pub lines: Vec<String>,
}
