//! Derivation of the sample files a beatmap needs.
//!
//! Each hit object strictly between two consecutive timing points plays its hit sounds from
//! the sample set and index of the earlier point. Objects at a timing point's offset, before
//! the first point, or after the last point are not covered.

use itertools::Itertools;

use crate::osu::{
    command::hit_sound::{HitSound, HitSoundKind},
    model::{HitObject, TimingPoint},
};

/// Builds the filename of one sample, as in `soft-hitclap2.wav`. Index `1` has no suffix.
#[must_use]
pub fn sample_filename(point: &TimingPoint, kind: HitSoundKind) -> String {
    let set = point.sample_set;
    if point.sample_index == 1 {
        format!("{set}-hit{kind}.wav")
    } else {
        format!("{set}-hit{kind}{}.wav", point.sample_index)
    }
}

/// The kinds a hit sound set plays. The empty set plays the normal sound.
fn played_kinds(sound: HitSound) -> Vec<HitSoundKind> {
    if sound.is_empty() {
        vec![HitSoundKind::Normal]
    } else {
        sound.iter().collect()
    }
}

/// Lists the sample filenames needed by `hit_objects` under `timing_points`, without
/// duplicates and in first-use order.
#[must_use]
pub fn required_samples(timing_points: &[TimingPoint], hit_objects: &[HitObject]) -> Vec<String> {
    timing_points
        .iter()
        .tuple_windows()
        .flat_map(|(point, next)| {
            hit_objects
                .iter()
                .filter(move |object| point.offset < object.time && object.time < next.offset)
                .flat_map(move |object| {
                    played_kinds(object.hit_sound)
                        .into_iter()
                        .map(move |kind| sample_filename(point, kind))
                })
        })
        .unique()
        .collect()
}
