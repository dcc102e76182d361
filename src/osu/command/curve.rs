//! Slider path descriptors.
//!
//! A path field looks like `B|380:120|332:96|332:96|304:124`: one curve letter followed by
//! `x:y` points. Only the declared shape is recorded here. Evaluating bezier or catmull
//! geometry is left to the consumer.

use crate::osu::parse::{ParseError, ParseWarning, Result};

use super::parse_int;

/// A point in osu! pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn decode(token: &str) -> Result<Self> {
        let (x, y) = token
            .split_once(':')
            .ok_or_else(|| ParseError::MalformedCurvePoint(token.to_owned()))?;
        Ok(Self {
            x: parse_int(x, "curve x")?,
            y: parse_int(y, "curve y")?,
        })
    }
}

/// The curve letter of a slider path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CurveKind {
    /// `L`
    Linear,
    /// `P`, a circular arc through three points.
    Perfect,
    /// `B`
    Bezier,
    /// `C`
    Catmull,
}

impl CurveKind {
    /// Reads a curve letter.
    #[must_use]
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "L" => Some(Self::Linear),
            "P" => Some(Self::Perfect),
            "B" => Some(Self::Bezier),
            "C" => Some(Self::Catmull),
            _ => None,
        }
    }
}

impl std::fmt::Display for CurveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Perfect => write!(f, "perfect"),
            Self::Bezier => write!(f, "bezier"),
            Self::Catmull => write!(f, "catmull"),
        }
    }
}

/// The declared path of a slider. Points are absolute; the slider's own position is the start.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")
)]
pub enum CurvePath {
    /// A straight segment to `end`.
    Linear {
        /// End of the segment.
        end: Point,
    },
    /// A circular arc through `passthrough` ending at `end`.
    Perfect {
        /// A point on the arc.
        passthrough: Point,
        /// End of the arc.
        end: Point,
    },
    /// Bezier control points, not evaluated.
    Bezier {
        /// The control points as written.
        control_points: Vec<Point>,
    },
    /// Catmull control points, not evaluated.
    Catmull {
        /// The control points as written.
        control_points: Vec<Point>,
    },
}

impl CurvePath {
    /// Decodes a path field.
    ///
    /// An unknown curve letter is read as linear and reported to `warnings`, as are bezier and
    /// catmull paths whose geometry is kept unevaluated.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedSliderPath`] when the number of points does not fit the
    /// curve (exactly one for linear, two for perfect, at least one otherwise), and
    /// [`ParseError::MalformedCurvePoint`] for a point that is not `x:y`.
    pub fn decode(field: &str, warnings: &mut Vec<ParseWarning>) -> Result<Self> {
        let mut tokens = field.split('|');
        let letter = tokens.next().unwrap_or_default().trim();
        let curve = CurveKind::from_letter(letter).unwrap_or_else(|| {
            warnings.push(ParseWarning::UnknownCurveType(letter.to_owned()));
            CurveKind::Linear
        });
        let points = tokens
            .filter(|token| !token.trim().is_empty())
            .map(Point::decode)
            .collect::<Result<Vec<_>>>()?;
        let malformed = || ParseError::MalformedSliderPath {
            curve,
            points: points.len(),
        };
        let path = match curve {
            CurveKind::Linear => match points.as_slice() {
                &[end] => Self::Linear { end },
                _ => return Err(malformed()),
            },
            CurveKind::Perfect => match points.as_slice() {
                &[passthrough, end] => Self::Perfect { passthrough, end },
                _ => return Err(malformed()),
            },
            CurveKind::Bezier | CurveKind::Catmull if points.is_empty() => {
                return Err(malformed());
            }
            CurveKind::Bezier => Self::Bezier {
                control_points: points,
            },
            CurveKind::Catmull => Self::Catmull {
                control_points: points,
            },
        };
        if matches!(curve, CurveKind::Bezier | CurveKind::Catmull) {
            warnings.push(ParseWarning::UnevaluatedCurve(curve));
        }
        Ok(path)
    }

    /// The curve letter this path was declared with.
    #[must_use]
    pub const fn kind(&self) -> CurveKind {
        match self {
            Self::Linear { .. } => CurveKind::Linear,
            Self::Perfect { .. } => CurveKind::Perfect,
            Self::Bezier { .. } => CurveKind::Bezier,
            Self::Catmull { .. } => CurveKind::Catmull,
        }
    }

    /// The last declared point of the path.
    #[must_use]
    pub fn end(&self) -> Option<Point> {
        match self {
            Self::Linear { end } | Self::Perfect { end, .. } => Some(*end),
            Self::Bezier { control_points } | Self::Catmull { control_points } => {
                control_points.last().copied()
            }
        }
    }
}
