use crate::osu::command::{
    curve::{CurvePath, Point},
    hit_sound::HitSound,
    hit_type::BaseType,
    sample::{EdgeSet, Extras},
};

/// A gameplay object: a circle, a slider or a spinner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HitObject {
    /// Position in osu! pixels.
    pub position: Point,
    /// Hit time in milliseconds.
    pub time: i64,
    /// Starts a new combo.
    pub new_combo: bool,
    /// Combo colours skipped when starting a new combo.
    pub combo_skip: u8,
    /// An osu!mania column object.
    pub mania_column: bool,
    /// The sounds played on hit. May be empty.
    pub hit_sound: HitSound,
    /// The sample override, when the line carries one.
    pub extras: Option<Extras>,
    /// Variant specific data.
    pub kind: HitObjectKind,
}

impl HitObject {
    /// The base shape of this object.
    #[must_use]
    pub const fn base_type(&self) -> BaseType {
        match self.kind {
            HitObjectKind::Circle => BaseType::Circle,
            HitObjectKind::Slider(_) => BaseType::Slider,
            HitObjectKind::Spinner { .. } => BaseType::Spinner,
        }
    }

    /// The sound played at edge `edge` of a slider, `0` being its head.
    ///
    /// Returns `None` for a circle, a spinner or an edge past the last repeat.
    #[must_use]
    pub fn edge_hit_sound(&self, edge: usize) -> Option<HitSound> {
        match &self.kind {
            HitObjectKind::Slider(slider) => slider.edge_hit_sound(edge, self.hit_sound),
            HitObjectKind::Circle | HitObjectKind::Spinner { .. } => None,
        }
    }
}

/// The variant of a [`HitObject`] with its own fields.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")
)]
pub enum HitObjectKind {
    /// A hit circle.
    Circle,
    /// A slider.
    Slider(Slider),
    /// A spinner.
    Spinner {
        /// End time in milliseconds.
        end_time: i64,
    },
}

/// The fields only a slider has.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Slider {
    /// The declared path.
    pub path: CurvePath,
    /// Times the slider goes back along its path after the first pass.
    pub repeat_count: u32,
    /// Visual length in osu! pixels.
    pub pixel_length: f64,
    /// Sounds of each edge, `repeat_count + 1` of them, or empty when the line has none and
    /// every edge plays the object's own sound.
    pub edge_hit_sounds: Vec<HitSound>,
    /// Sample sets of each edge, empty when the line has none.
    pub edge_sets: Vec<EdgeSet>,
}

impl Slider {
    /// The number of edges, `repeat_count + 1`.
    #[must_use]
    pub const fn edge_count(&self) -> u64 {
        self.repeat_count as u64 + 1
    }

    /// The sound played at edge `edge`, taking `object_sound` when the line had no edge sounds.
    ///
    /// Returns `None` for an edge past the last repeat.
    #[must_use]
    pub fn edge_hit_sound(&self, edge: usize, object_sound: HitSound) -> Option<HitSound> {
        if edge as u64 >= self.edge_count() {
            return None;
        }
        if self.edge_hit_sounds.is_empty() {
            return Some(object_sound);
        }
        self.edge_hit_sounds.get(edge).copied()
    }
}
