//! `[Events]`, kept as raw lines.

use crate::osu::model::EventsSection;

use super::{ParseWarning, Result, SectionDecoder};

/// Decoder that records the body of `[Events]` without interpreting it.
#[derive(Debug, Default)]
pub struct EventsDecoder {
    lines: Vec<String>,
}

impl SectionDecoder for EventsDecoder {
    type Output = EventsSection;

    fn decode_line(&mut self, line: &str, _: &mut Vec<ParseWarning>) -> Result<()> {
        self.lines.push(line.to_owned());
        Ok(())
    }

    fn finish(self) -> Self::Output {
        EventsSection { lines: self.lines }
    }
}
