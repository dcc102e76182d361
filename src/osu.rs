//! The parser module of osu! beatmap (.osu) files.
//!
//! This module consists of three phases: line scanning, section decoding and derivation.
//!
//! `lex` splits the source into trimmed lines, checks the version declaration and finds the
//! `[Section]` headers.
//!
//! `parse` decodes each section body into the values of `model`, using the record decoders of
//! `command` for hit object flags, slider paths and sample overrides.
//!
//! `samples` derives the sample filenames needed by the hit objects after every section is read.
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8 (as required `&str` to input).
//! - Do not support writing a document back into text.
//! - Do not evaluate bezier and catmull slider geometry; their control points are kept raw.
//! - Stop at the first error. A parse returns a complete document or an error, never both.

pub mod command;
pub mod lex;
pub mod model;
pub mod parse;
pub mod prelude;
pub mod samples;

use self::{
    model::Osu,
    parse::{
        ParseErrorWithRange, ParseOutput, ParseWarningWithRange,
        config::{ParseConfig, default_config},
    },
    samples::required_samples,
};

/// Output of parsing an osu! beatmap.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct OsuOutput {
    /// The parsed document.
    pub osu: Osu,
    /// Warnings that occurred during parsing.
    pub warnings: Vec<ParseWarningWithRange>,
}

/// Parse an osu! beatmap from source text with the default configuration.
///
/// # Example
///
/// ```
/// use osu_format::osu::{OsuOutput, parse_osu};
///
/// let source = "osu file format v14\n\n[Metadata]\nTitle: Test Song\n";
/// let OsuOutput { osu, warnings } = parse_osu(source).unwrap();
/// let metadata = osu.metadata.unwrap();
/// assert_eq!(metadata.text("Title"), Some("Test Song"));
/// assert!(warnings.is_empty());
/// ```
///
/// # Errors
///
/// Returns the first [`parse::ParseError`] met, with the range of its line.
pub fn parse_osu(source: &str) -> Result<OsuOutput, ParseErrorWithRange> {
    parse_osu_with_config(source, default_config())
}

/// Parse an osu! beatmap from source text with a configuration.
///
/// [`parse_osu`] with the policies of `config`.
///
/// # Errors
///
/// Returns the first [`parse::ParseError`] met, with the range of its line.
pub fn parse_osu_with_config(
    source: &str,
    config: ParseConfig,
) -> Result<OsuOutput, ParseErrorWithRange> {
    let ParseOutput {
        mut osu,
        parse_warnings,
    } = Osu::from_source(source, config)?;

    if let (Some(timing_points), Some(hit_objects)) = (&osu.timing_points, &osu.hit_objects) {
        osu.required_samples = Some(required_samples(timing_points, hit_objects));
    }

    Ok(OsuOutput {
        osu,
        warnings: parse_warnings,
    })
}
