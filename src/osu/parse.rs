//! Decoding of beatmap sections.
//!
//! Raw [String] == [lex] ==> lines == [parse] ==> [`Osu`] (in [`ParseOutput`])
//!
//! Every section kind has its own [`SectionDecoder`] that receives the body lines of the
//! section one by one. [`Osu::from_source`] scans the top level for headers, hands the
//! cursor to the decoder matching each header, and collects the results.
//!
//! [lex]: crate::osu::lex

pub mod colours;
pub mod config;
pub mod events;
pub mod hit_objects;
pub mod key_value;
pub mod timing;

use std::collections::HashSet;

use thiserror::Error;

use crate::osu::{
    command::{
        curve::CurveKind,
        mixin::{SourceRangeMixin, SourceRangeMixinExt},
    },
    lex::{SectionKind, cursor::Cursor, read_version, section_name},
    model::Osu,
};

use self::{
    colours::ColoursDecoder, config::ParseConfig, events::EventsDecoder,
    hit_objects::HitObjectsDecoder, key_value::KeyValueDecoder, timing::TimingPointsDecoder,
};

/// A failure that stops the parse. No partial document is produced alongside it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ParseError {
    /// The source has no non-blank line.
    #[error("the source is empty")]
    EmptyInput,
    /// The first non-blank line is not `osu file format v<integer>`.
    #[error("expected `osu file format v<version>`, but found `{found}`")]
    MissingVersionHeader {
        /// The line found instead.
        found: String,
    },
    /// A header names a section that is not known.
    #[error("unrecognized section `[{0}]`")]
    UnrecognizedSection(String),
    /// A `Key: value` line has no colon.
    #[error("expected `key: value`, but found `{0}`")]
    MalformedKeyValueLine(String),
    /// A colour does not have exactly three components.
    #[error("a colour needs 3 components, but found {components}")]
    MalformedColourLine {
        /// The number of components found.
        components: usize,
    },
    /// A timing point has fewer than 8 fields.
    #[error("a timing point needs 8 fields, but found {fields}")]
    MalformedTimingPointLine {
        /// The number of fields found.
        fields: usize,
    },
    /// An inherited timing point appears before any uninherited one, so it has no tempo to scale.
    #[error("inherited timing point at {offset}ms has no preceding uninherited point")]
    InheritedBeforeUninherited {
        /// Offset of the inherited point.
        offset: i64,
    },
    /// A hit object line is shorter than its type requires.
    #[error("hit object needs at least {expected} fields, but found {fields}")]
    MalformedHitObjectLine {
        /// The minimum number of fields.
        expected: usize,
        /// The number of fields found.
        fields: usize,
    },
    /// A hit object type has none of the circle, slider or spinner bits.
    #[error("hit object type {0} has no circle, slider or spinner bit")]
    MalformedHitObjectType(u32),
    /// A slider path has a point count its curve cannot take.
    #[error("{curve} slider path cannot have {points} points")]
    MalformedSliderPath {
        /// The declared curve.
        curve: CurveKind,
        /// The number of points found.
        points: usize,
    },
    /// A slider path point is not `x:y`.
    #[error("expected a curve point `x:y`, but found `{0}`")]
    MalformedCurvePoint(String),
    /// The edge sounds of a slider are not one more than its repeat count.
    #[error("slider needs {expected} edge hit sounds, but found {found}")]
    EdgeHitSoundCountMismatch {
        /// `repeat_count + 1`
        expected: usize,
        /// The number of edge sounds found.
        found: usize,
    },
    /// A sample set field is absent where one is required.
    #[error("sample set is undefined")]
    UndefinedSampleSet,
    /// A numeric field does not parse.
    #[error("invalid {field}: `{token}`")]
    InvalidNumber {
        /// What the field means.
        field: &'static str,
        /// The text found.
        token: String,
    },
}

/// Type alias of `core::result::Result<T, ParseError>`
pub(crate) type Result<T> = core::result::Result<T, ParseError>;

/// A parse error with the byte range of the line that caused it.
pub type ParseErrorWithRange = SourceRangeMixin<ParseError>;

/// A condition that does not stop the parse.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ParseWarning {
    /// A slider path starts with an unknown curve letter and was read as linear.
    #[error("unknown curve type `{0}`, read as linear")]
    UnknownCurveType(String),
    /// A bezier or catmull path was recorded without evaluating its geometry.
    #[error("{0} curve geometry is not evaluated")]
    UnevaluatedCurve(CurveKind),
    /// A line between sections that is not a header, a comment or blank. It was skipped.
    #[error("line outside of any section")]
    StrayLine,
    /// A section appears again and replaces the earlier one.
    #[error("duplicated section {0}")]
    DuplicateSection(SectionKind),
}

/// A parse warning with the byte range of the line that caused it.
pub type ParseWarningWithRange = SourceRangeMixin<ParseWarning>;

/// Osu Parse Output
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct ParseOutput {
    /// The output document, without derived data.
    pub osu: Osu,
    /// Warnings that occurred during parsing.
    pub parse_warnings: Vec<ParseWarningWithRange>,
}

/// A decoder of one section kind, fed the body lines of the section.
pub trait SectionDecoder {
    /// The decoded section.
    type Output;

    /// Decodes one body line. Warnings pushed to `warnings` get the range of this line.
    ///
    /// # Errors
    ///
    /// Returns the error that stops the parse.
    fn decode_line(&mut self, line: &str, warnings: &mut Vec<ParseWarning>) -> Result<()>;

    /// Finishes the section.
    fn finish(self) -> Self::Output;
}

/// Feeds the body of the current section to `decoder`, leaving the cursor after the section.
///
/// # Errors
///
/// Returns the first error of `decoder` with the range of the failing line.
pub fn decode_section<D: SectionDecoder>(
    cursor: &mut Cursor<'_>,
    config: ParseConfig,
    mut decoder: D,
    warnings: &mut Vec<ParseWarningWithRange>,
) -> core::result::Result<D::Output, ParseErrorWithRange> {
    let mut line_warnings = vec![];
    while let Some(line) = cursor.next_body_line(config.comment_policy()) {
        let decoded = decoder.decode_line(line.text(), &mut line_warnings);
        warnings.extend(
            line_warnings
                .drain(..)
                .map(|warning| warning.into_wrapper_range(line.range())),
        );
        decoded.map_err(|err| err.into_wrapper_range(line.range()))?;
    }
    Ok(decoder.finish())
}

impl Osu {
    /// Parses a whole beatmap source into [`Osu`], without the derived sample list.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] met, with the range of its line.
    pub fn from_source(
        source: &str,
        config: ParseConfig,
    ) -> core::result::Result<ParseOutput, ParseErrorWithRange> {
        let mut cursor = Cursor::new(source);
        let format_version = read_version(&mut cursor)?;
        let mut osu = Self {
            format_version,
            ..Self::default()
        };
        let mut parse_warnings = vec![];
        let mut seen = HashSet::new();

        while let Some(line) = cursor.next_line() {
            if line.is_blank() || line.is_comment() {
                continue;
            }
            let Some(name) = section_name(&line) else {
                parse_warnings.push(ParseWarning::StrayLine.into_wrapper_range(line.range()));
                continue;
            };
            let kind = SectionKind::from_name(name).ok_or_else(|| {
                ParseError::UnrecognizedSection(name.to_owned()).into_wrapper_range(line.range())
            })?;
            if !seen.insert(kind) {
                parse_warnings
                    .push(ParseWarning::DuplicateSection(kind).into_wrapper_range(line.range()));
            }

            let cursor = &mut cursor;
            let warnings = &mut parse_warnings;
            match kind {
                SectionKind::General => {
                    osu.general = Some(decode_section(
                        cursor,
                        config,
                        KeyValueDecoder::default(),
                        warnings,
                    )?);
                }
                SectionKind::Editor => {
                    osu.editor = Some(decode_section(
                        cursor,
                        config,
                        KeyValueDecoder::default(),
                        warnings,
                    )?);
                }
                SectionKind::Metadata => {
                    osu.metadata = Some(decode_section(
                        cursor,
                        config,
                        KeyValueDecoder::default(),
                        warnings,
                    )?);
                }
                SectionKind::Difficulty => {
                    osu.difficulty = Some(decode_section(
                        cursor,
                        config,
                        KeyValueDecoder::default(),
                        warnings,
                    )?);
                }
                SectionKind::Events => {
                    osu.events = Some(decode_section(
                        cursor,
                        config,
                        EventsDecoder::default(),
                        warnings,
                    )?);
                }
                SectionKind::TimingPoints => {
                    osu.timing_points = Some(decode_section(
                        cursor,
                        config,
                        TimingPointsDecoder::default(),
                        warnings,
                    )?);
                }
                SectionKind::Colours => {
                    osu.colours = Some(decode_section(
                        cursor,
                        config,
                        ColoursDecoder::default(),
                        warnings,
                    )?);
                }
                SectionKind::HitObjects => {
                    osu.hit_objects = Some(decode_section(
                        cursor,
                        config,
                        HitObjectsDecoder::new(config.base_type_policy()),
                        warnings,
                    )?);
                }
            }
        }

        Ok(ParseOutput {
            osu,
            parse_warnings,
        })
    }
}

#[cfg(feature = "diagnostics")]
mod report {
    use ariadne::{Color, Report, ReportKind};

    use super::{ParseErrorWithRange, ParseWarningWithRange};
    use crate::diagnostics::{SimpleSource, ToAriadne, build_report};

    impl ToAriadne for ParseWarningWithRange {
        fn to_report<'a>(
            &self,
            src: &SimpleSource<'a>,
        ) -> Report<'a, (String, std::ops::Range<usize>)> {
            build_report(
                src,
                ReportKind::Warning,
                self.range(),
                "parse warning",
                self.content(),
                Color::Blue,
            )
        }
    }

    impl ToAriadne for ParseErrorWithRange {
        fn to_report<'a>(
            &self,
            src: &SimpleSource<'a>,
        ) -> Report<'a, (String, std::ops::Range<usize>)> {
            build_report(
                src,
                ReportKind::Error,
                self.range(),
                "parse error",
                self.content(),
                Color::Red,
            )
        }
    }
}
