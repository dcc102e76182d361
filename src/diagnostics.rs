//! Fancy diagnostics support using `ariadne`.
//!
//! This module provides convenient methods to convert errors carrying `SourceRangeMixin`
//! (`ParseWarningWithRange` and `ParseErrorWithRange`) to `ariadne::Report` without modifying
//! the error type definitions.
//!
//! Since `SourceRangeMixin` holds byte offsets, ariadne handles row/column calculations for
//! display.
//!
//! # Usage Example
//!
//! ```rust
//! # #[cfg(feature = "diagnostics")]
//! # {
//! use osu_format::{diagnostics::emit_osu_warnings, osu::parse_osu};
//!
//! let source = "osu file format v14\n\nstray line\n\n[General]\nAudioFilename: a.mp3\n";
//! let output = parse_osu(source).unwrap();
//!
//! // Output all warnings
//! emit_osu_warnings("test.osu", source, &output.warnings);
//! # }
//! ```

#[cfg(feature = "diagnostics")]
use ariadne::{Color, Label, Report, ReportKind, Source};

/// Simple source container that holds the filename and source text.
///
/// ```rust
/// use osu_format::diagnostics::SimpleSource;
///
/// let source_text = "osu file format v14\n";
/// let source = SimpleSource::new("test.osu", source_text);
/// assert_eq!(source.text(), source_text);
/// assert_eq!(source.name(), "test.osu");
/// ```
pub struct SimpleSource<'a> {
    name: &'a str,
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container of the file `name` with the whole content `text`.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Trait for converting positioned errors to `ariadne::Report`.
///
/// ```rust
/// # #[cfg(feature = "diagnostics")]
/// # {
/// use ariadne::Source;
/// use osu_format::{
///     diagnostics::{SimpleSource, ToAriadne},
///     osu::parse_osu,
/// };
///
/// let source_text = "osu file format v14\n[Nope]\n";
/// let error = parse_osu(source_text).unwrap_err();
///
/// let source = SimpleSource::new("test.osu", source_text);
/// let report = error.to_report(&source);
/// let _ = report.eprint(("test.osu".to_string(), Source::from(source_text)));
/// # }
/// ```
#[cfg(feature = "diagnostics")]
pub trait ToAriadne {
    /// Convert error to ariadne Report. `src` gives the filename.
    fn to_report<'a>(&self, src: &SimpleSource<'a>)
    -> Report<'a, (String, std::ops::Range<usize>)>;
}

/// Helper to build a styled ariadne `Report` consistently.
#[cfg(feature = "diagnostics")]
#[must_use]
pub fn build_report<'a>(
    src: &SimpleSource<'a>,
    kind: ReportKind<'a>,
    range: std::ops::Range<usize>,
    title: &str,
    label_message: impl ToString,
    color: Color,
) -> Report<'a, (String, std::ops::Range<usize>)> {
    let filename = src.name().to_string();
    Report::build(kind, (filename.clone(), range.clone()))
        .with_message(title)
        .with_label(
            Label::new((filename, range))
                .with_message(label_message.to_string())
                .with_color(color),
        )
        .finish()
}

/// Convenience method: render a list of parse warnings to stderr.
///
/// * `name` - Name of the source file, used for display in diagnostic information
/// * `source` - Complete beatmap source text
/// * `warnings` - List of warnings to display
#[cfg(feature = "diagnostics")]
pub fn emit_osu_warnings<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a crate::osu::parse::ParseWarningWithRange>,
) {
    let simple = SimpleSource::new(name, source);
    let ariadne_source = Source::from(source);
    for w in warnings {
        let report = w.to_report(&simple);
        let _ = report.eprint((name.to_string(), ariadne_source.clone()));
    }
}

/// Collect `ariadne::Report` instances for a list of parse warnings without printing.
#[cfg(feature = "diagnostics")]
#[must_use]
pub fn collect_osu_reports<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a crate::osu::parse::ParseWarningWithRange>,
) -> Vec<Report<'a, (String, std::ops::Range<usize>)>> {
    let simple = SimpleSource::new(name, source);
    warnings.into_iter().map(|w| w.to_report(&simple)).collect()
}
