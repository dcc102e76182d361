//! `[TimingPoints]`.

use crate::osu::{
    command::{parse_float, parse_int, sample::SampleSet},
    model::TimingPoint,
};

use super::{ParseError, ParseWarning, Result, SectionDecoder};

/// Decoder of `offset,beatLength,meter,sampleSet,sampleIndex,volume,inherited,kiai` lines.
///
/// The beat length of the last uninherited point is carried from line to line to resolve
/// the inherited ones.
#[derive(Debug, Default)]
pub struct TimingPointsDecoder {
    points: Vec<TimingPoint>,
    last_uninherited_beat_length: Option<f64>,
}

impl TimingPointsDecoder {
    fn effective_beat_length(&mut self, offset: i64, raw: f64) -> Result<f64> {
        if raw < 0.0 {
            let base = self
                .last_uninherited_beat_length
                .ok_or(ParseError::InheritedBeforeUninherited { offset })?;
            return Ok(raw.abs() / 100.0 * base);
        }
        if raw > 0.0 {
            self.last_uninherited_beat_length = Some(raw);
        }
        Ok(raw)
    }
}

impl SectionDecoder for TimingPointsDecoder {
    type Output = Vec<TimingPoint>;

    fn decode_line(&mut self, line: &str, _: &mut Vec<ParseWarning>) -> Result<()> {
        let fields: Vec<&str> = line.split(',').collect();
        let &[offset, beat_length, meter, sample_set, sample_index, volume, inherited, kiai, ..] =
            fields.as_slice()
        else {
            return Err(ParseError::MalformedTimingPointLine {
                fields: fields.len(),
            });
        };

        let offset = parse_int(offset, "offset")?;
        let raw_beat_length = parse_float(beat_length, "beat length")?;
        let milliseconds_per_beat = self.effective_beat_length(offset, raw_beat_length)?;
        self.points.push(TimingPoint {
            offset,
            milliseconds_per_beat,
            raw_beat_length,
            meter: parse_int(meter, "meter")?,
            sample_set: SampleSet::decode(Some(sample_set))?,
            sample_index: parse_int(sample_index, "sample index")?,
            volume: parse_int(volume, "volume")?,
            inherited: parse_int::<i64>(inherited, "inherited")? == 1,
            kiai: parse_int::<i64>(kiai, "kiai")? == 1,
        });
        Ok(())
    }

    fn finish(self) -> Self::Output {
        self.points
    }
}
