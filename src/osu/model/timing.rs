use crate::osu::command::sample::SampleSet;

/// A tempo and sample context active from its offset until the next timing point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TimingPoint {
    /// Start time in milliseconds.
    pub offset: i64,
    /// The effective beat length. For an inherited point (negative raw value) this is
    /// `|raw| / 100` times the beat length of the last uninherited point.
    pub milliseconds_per_beat: f64,
    /// The beat length as written.
    pub raw_beat_length: f64,
    /// Beats per measure.
    pub meter: i32,
    /// Default sample set of hit objects.
    pub sample_set: SampleSet,
    /// Custom sample index, `1` for the default samples.
    pub sample_index: i32,
    /// Hit object volume, `0..=100`.
    pub volume: i32,
    /// The raw flag of the seventh field is `1`.
    pub inherited: bool,
    /// Kiai time is on.
    pub kiai: bool,
}

impl TimingPoint {
    /// Whether the raw beat length is negative, i.e. it scales the previous tempo.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.raw_beat_length < 0.0
    }

    /// Beats per minute from the effective beat length.
    #[must_use]
    pub fn bpm(&self) -> f64 {
        60_000.0 / self.milliseconds_per_beat
    }
}
