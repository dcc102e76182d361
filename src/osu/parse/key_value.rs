//! `[General]`, `[Editor]`, `[Metadata]` and `[Difficulty]`.

use crate::osu::model::{KeyValueSection, Value};

use super::{ParseError, ParseWarning, Result, SectionDecoder};

/// Decoder of `Key: value` sections.
///
/// The key is everything before the first colon, untrimmed. The value is trimmed and read as
/// a number when it parses fully as one.
#[derive(Debug, Default)]
pub struct KeyValueDecoder {
    section: KeyValueSection,
}

impl SectionDecoder for KeyValueDecoder {
    type Output = KeyValueSection;

    fn decode_line(&mut self, line: &str, _: &mut Vec<ParseWarning>) -> Result<()> {
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| ParseError::MalformedKeyValueLine(line.to_owned()))?;
        self.section.insert(key, Value::parse(value));
        Ok(())
    }

    fn finish(self) -> Self::Output {
        self.section
    }
}
