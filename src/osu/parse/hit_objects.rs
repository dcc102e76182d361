//! `[HitObjects]`.
//!
//! A line is `x,y,time,type,hitSound` followed by fields depending on the base type:
//!
//! - circle: `,extras`
//! - slider: `,curve|points,repeat,length,edgeSounds,edgeSets,extras`
//! - spinner: `,endTime,extras`
//!
//! The trailing extras field is read only when the line has exactly the full field count of
//! its type. Slider edge sounds and edge sets may be omitted from the end as well.

use crate::osu::{
    command::{
        curve::{CurvePath, Point},
        hit_sound::HitSound,
        hit_type::{BaseType, HitObjectType},
        parse_float, parse_int,
        sample::{EdgeSet, Extras},
    },
    model::{HitObject, HitObjectKind, Slider},
};

use super::{ParseError, ParseWarning, Result, SectionDecoder, config::BaseTypePolicy};

/// `x,y,time,type,hitSound`
const COMMON_FIELDS: usize = 5;

/// Decoder of hit object lines.
#[derive(Debug, Default)]
pub struct HitObjectsDecoder {
    objects: Vec<HitObject>,
    policy: BaseTypePolicy,
}

impl HitObjectsDecoder {
    /// Creates a decoder reading objects without a base type as `policy` says.
    #[must_use]
    pub const fn new(policy: BaseTypePolicy) -> Self {
        Self {
            objects: Vec::new(),
            policy,
        }
    }
}

/// The minimum field count of a base type and the count that includes extras.
const fn field_counts(base: BaseType) -> (usize, usize) {
    match base {
        BaseType::Circle => (COMMON_FIELDS, COMMON_FIELDS + 1),
        BaseType::Spinner => (COMMON_FIELDS + 1, COMMON_FIELDS + 2),
        BaseType::Slider => (COMMON_FIELDS + 3, COMMON_FIELDS + 6),
    }
}

/// Returns the field at `index` unless it is absent or blank.
fn optional_field<'a>(fields: &[&'a str], index: usize) -> Option<&'a str> {
    fields
        .get(index)
        .copied()
        .filter(|field| !field.trim().is_empty())
}

fn decode_slider(fields: &[&str], warnings: &mut Vec<ParseWarning>) -> Result<Slider> {
    let Some(&[path, repeat_count, pixel_length]) = fields.get(COMMON_FIELDS..COMMON_FIELDS + 3)
    else {
        return Err(ParseError::MalformedHitObjectLine {
            expected: COMMON_FIELDS + 3,
            fields: fields.len(),
        });
    };
    let path = CurvePath::decode(path, warnings)?;
    let repeat_count: u32 = parse_int(repeat_count, "repeat count")?;
    let pixel_length = parse_float(pixel_length, "pixel length")?;

    let edges = (repeat_count as usize).saturating_add(1);
    let edge_hit_sounds = optional_field(fields, COMMON_FIELDS + 3)
        .map(|field| field.split('|').map(HitSound::decode).collect::<Result<Vec<_>>>())
        .transpose()?
        .unwrap_or_default();
    if !edge_hit_sounds.is_empty() && edge_hit_sounds.len() != edges {
        return Err(ParseError::EdgeHitSoundCountMismatch {
            expected: edges,
            found: edge_hit_sounds.len(),
        });
    }
    let edge_sets = optional_field(fields, COMMON_FIELDS + 4)
        .map(|field| field.split('|').map(EdgeSet::decode).collect::<Result<Vec<_>>>())
        .transpose()?
        .unwrap_or_default();

    Ok(Slider {
        path,
        repeat_count,
        pixel_length,
        edge_hit_sounds,
        edge_sets,
    })
}

impl SectionDecoder for HitObjectsDecoder {
    type Output = Vec<HitObject>;

    fn decode_line(&mut self, line: &str, warnings: &mut Vec<ParseWarning>) -> Result<()> {
        let fields: Vec<&str> = line.split(',').collect();
        let &[x, y, time, raw_type, hit_sound, ..] = fields.as_slice() else {
            return Err(ParseError::MalformedHitObjectLine {
                expected: COMMON_FIELDS,
                fields: fields.len(),
            });
        };
        let position = Point::new(parse_int(x, "x")?, parse_int(y, "y")?);
        let time = parse_int(time, "time")?;
        let ty = HitObjectType::decode(parse_int(raw_type, "type")?, self.policy)?;
        let hit_sound = HitSound::decode(hit_sound)?;

        let (min_fields, with_extras) = field_counts(ty.base);
        let too_short = || ParseError::MalformedHitObjectLine {
            expected: min_fields,
            fields: fields.len(),
        };
        if fields.len() < min_fields {
            return Err(too_short());
        }
        let kind = match ty.base {
            BaseType::Circle => HitObjectKind::Circle,
            BaseType::Spinner => {
                let &[_, _, _, _, _, end_time, ..] = fields.as_slice() else {
                    return Err(too_short());
                };
                HitObjectKind::Spinner {
                    end_time: parse_int(end_time, "end time")?,
                }
            }
            BaseType::Slider => HitObjectKind::Slider(decode_slider(&fields, warnings)?),
        };
        let extras = if fields.len() == with_extras {
            optional_field(&fields, with_extras - 1)
                .map(Extras::decode)
                .transpose()?
        } else {
            None
        };

        self.objects.push(HitObject {
            position,
            time,
            new_combo: ty.new_combo,
            combo_skip: ty.combo_skip,
            mania_column: ty.mania_column,
            hit_sound,
            extras,
            kind,
        });
        Ok(())
    }

    fn finish(self) -> Self::Output {
        self.objects
    }
}
