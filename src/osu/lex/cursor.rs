use std::ops::Range;

use crate::osu::parse::config::CommentPolicy;

/// A trimmed line of the source with the byte range of its trimmed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    text: &'a str,
    range: Range<usize>,
}

impl<'a> Line<'a> {
    /// The trimmed text. Surrounding whitespace and a trailing `\r` are removed.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// The byte range of [`Self::text`] in the source.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Whether the line is empty after trimming.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the line starts with `//`.
    #[must_use]
    pub fn is_comment(&self) -> bool {
        self.text.starts_with("//")
    }
}

/// A read cursor over the lines of a source text.
///
/// The top-level scan and every section decoder share one cursor, so a decoder leaves it
/// right after the blank line closing its section.
pub struct Cursor<'a> {
    lines: Vec<Line<'a>>,
    /// Index of the next line to read.
    index: usize,
}

impl<'a> Cursor<'a> {
    /// Splits `source` into trimmed lines. A leading byte-order mark is skipped.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let (source_start, body) = match source.strip_prefix('\u{feff}') {
            Some(rest) => ('\u{feff}'.len_utf8(), rest),
            None => (0, source),
        };
        let mut offset = source_start;
        let lines = body
            .split('\n')
            .map(|raw| {
                let start = offset + (raw.len() - raw.trim_start().len());
                let text = raw.trim();
                offset += raw.len() + 1;
                Line {
                    text,
                    range: start..start + text.len(),
                }
            })
            .collect();
        Self { lines, index: 0 }
    }

    /// Whether every line has been read.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.index >= self.lines.len()
    }

    /// Returns the next line without moving.
    #[must_use]
    pub fn peek_line(&self) -> Option<&Line<'a>> {
        self.lines.get(self.index)
    }

    /// Moves through and returns the next line.
    pub fn next_line(&mut self) -> Option<Line<'a>> {
        let line = self.lines.get(self.index).cloned()?;
        self.index += 1;
        Some(line)
    }

    /// Moves through blank lines and returns the first non-blank one.
    pub fn next_non_blank(&mut self) -> Option<Line<'a>> {
        std::iter::from_fn(|| self.next_line()).find(|line| !line.is_blank())
    }

    /// Moves through and returns the next line of a section body.
    ///
    /// Returns `None` once a blank line or the end of source closes the section; the blank line
    /// is consumed. Comment lines are returned as content unless `comments` is
    /// [`CommentPolicy::Everywhere`].
    pub fn next_body_line(&mut self, comments: CommentPolicy) -> Option<Line<'a>> {
        loop {
            let line = self.next_line()?;
            if line.is_blank() {
                return None;
            }
            if comments == CommentPolicy::Everywhere && line.is_comment() {
                continue;
            }
            return Some(line);
        }
    }

    /// The index of the next line, starting with 0.
    #[must_use]
    pub const fn line_index(&self) -> usize {
        self.index
    }
}
