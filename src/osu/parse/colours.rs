//! `[Colours]`.

use crate::osu::{command::graphics::Rgb, model::ColourMap};

use super::{ParseError, ParseWarning, Result, SectionDecoder};

/// Decoder of `Name : r,g,b` lines.
#[derive(Debug, Default)]
pub struct ColoursDecoder {
    colours: ColourMap,
}

impl SectionDecoder for ColoursDecoder {
    type Output = ColourMap;

    fn decode_line(&mut self, line: &str, _: &mut Vec<ParseWarning>) -> Result<()> {
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| ParseError::MalformedKeyValueLine(line.to_owned()))?;
        self.colours.insert(name.trim(), Rgb::from_components(value)?);
        Ok(())
    }

    fn finish(self) -> Self::Output {
        self.colours
    }
}
