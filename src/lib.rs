//! The osu! beatmap format parser.
//!
//! [osu!](https://osu.ppy.sh) stores each difficulty of a beatmap as a `.osu` text file: a
//! version declaration followed by `[Section]` blocks of `Key: value` pairs, comma separated
//! records and raw lines.
//!
//! # Usage
//!
//! - [`osu::parse_osu`] parses a whole source with the default configuration.
//! - [`osu::parse_osu_with_config`] takes a [`osu::parse::config::ParseConfig`] to change how
//!   comments and type-less hit objects are read.
//!
//! Parsing stops at the first error. Conditions that do not stop it are returned as warnings,
//! which [`diagnostics`] renders with `ariadne`.
//!
//! ```
//! use osu_format::osu::{model::HitObjectKind, parse_osu};
//!
//! let source = "\
//! osu file format v14
//!
//! [TimingPoints]
//! 0,500,4,2,1,60,1,0
//! 4000,500,4,2,1,60,1,0
//!
//! [HitObjects]
//! 256,192,1000,1,2
//! ";
//! let output = parse_osu(source).unwrap();
//! let objects = output.osu.hit_objects.unwrap();
//! assert_eq!(objects[0].kind, HitObjectKind::Circle);
//! assert_eq!(
//!     output.osu.required_samples.unwrap(),
//!     vec!["soft-hitwhistle.wav".to_string()]
//! );
//! ```
//!
//! # Features
//!
//! - `serde`: derives `Serialize` and `Deserialize` on the document types.
//! - `diagnostics`: renders warnings and errors with `ariadne`.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod diagnostics;
pub mod osu;
