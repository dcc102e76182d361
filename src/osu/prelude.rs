//! Prelude module for the osu! module.
//!
//! This module re-exports all public types from the osu! module for convenient access.
//! You can use `use osu_format::osu::prelude::*;` to import all of them at once.

// Re-export diagnostics from crate level
#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{SimpleSource, ToAriadne, collect_osu_reports, emit_osu_warnings};

pub use super::{
    OsuOutput,
    command::{
        curve::{CurveKind, CurvePath, Point},
        graphics::Rgb,
        hit_sound::{HitSound, HitSoundKind},
        hit_type::{BaseType, HitObjectType},
        mixin::{SourceRangeMixin, SourceRangeMixinExt},
        sample::{EdgeSet, Extras, SampleSet},
    },
    lex::{
        SectionKind, VERSION_PREFIX,
        cursor::{Cursor, Line},
    },
    model::{
        ColourMap, EventsSection, HitObject, HitObjectKind, KeyValueSection, Osu, Slider,
        TimingPoint, Value,
    },
    parse::{
        ParseError, ParseErrorWithRange, ParseOutput, ParseWarning, ParseWarningWithRange,
        SectionDecoder,
        config::{BaseTypePolicy, CommentPolicy, ParseConfig, default_config},
    },
    parse_osu, parse_osu_with_config,
    samples::{required_samples, sample_filename},
};
