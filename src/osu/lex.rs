//! Line scanner of the osu! beatmap format.
//!
//! Raw [String] == [`Cursor`] ==> trimmed lines == [`crate::osu::parse`] ==> [`crate::osu::model::Osu`]
//!
//! The scanner knows three kinds of top-level lines: the version declaration that must come
//! first, `[Name]` section headers, and `//` comments. Everything inside a section belongs to
//! the section decoders.

pub mod cursor;

use crate::osu::{
    command::mixin::SourceRangeMixinExt,
    parse::{ParseError, ParseErrorWithRange},
};

use self::cursor::{Cursor, Line};

/// The text every beatmap starts with, followed by the format version.
pub const VERSION_PREFIX: &str = "osu file format v";

/// The closed set of sections a beatmap may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionKind {
    /// `[General]`
    General,
    /// `[Editor]`
    Editor,
    /// `[Metadata]`
    Metadata,
    /// `[Difficulty]`
    Difficulty,
    /// `[Events]`
    Events,
    /// `[TimingPoints]`
    TimingPoints,
    /// `[Colours]`
    Colours,
    /// `[HitObjects]`
    HitObjects,
}

impl SectionKind {
    /// Looks up a section by the name inside its brackets.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "General" => Self::General,
            "Editor" => Self::Editor,
            "Metadata" => Self::Metadata,
            "Difficulty" => Self::Difficulty,
            "Events" => Self::Events,
            "TimingPoints" => Self::TimingPoints,
            "Colours" => Self::Colours,
            "HitObjects" => Self::HitObjects,
            _ => return None,
        })
    }

    /// The name written inside the brackets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Editor => "Editor",
            Self::Metadata => "Metadata",
            Self::Difficulty => "Difficulty",
            Self::Events => "Events",
            Self::TimingPoints => "TimingPoints",
            Self::Colours => "Colours",
            Self::HitObjects => "HitObjects",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.as_str())
    }
}

/// Returns the name of a `[Name]` header line, or `None` if the line is not a header.
///
/// The name spans from the opening bracket to the last closing bracket.
#[must_use]
pub fn section_name<'a>(line: &Line<'a>) -> Option<&'a str> {
    let inner = line.text().strip_prefix('[')?;
    let close = inner.rfind(']')?;
    inner.get(..close)
}

/// Reads the version declaration from the first non-blank line.
///
/// # Errors
///
/// Returns [`ParseError::EmptyInput`] if there is no non-blank line, and
/// [`ParseError::MissingVersionHeader`] if the line is not `osu file format v<integer>`.
pub fn read_version(cursor: &mut Cursor<'_>) -> Result<u32, ParseErrorWithRange> {
    let line = cursor
        .next_non_blank()
        .ok_or_else(|| ParseError::EmptyInput.into_wrapper_range(0..0))?;
    line.text()
        .strip_prefix(VERSION_PREFIX)
        .and_then(|version| version.trim().parse().ok())
        .ok_or_else(|| {
            ParseError::MissingVersionHeader {
                found: line.text().to_owned(),
            }
            .into_wrapper_range(line.range())
        })
}
