//! Hit sound bit flags.

use crate::osu::parse::Result;

use super::parse_int;

/// One of the four hit sounds an object can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HitSoundKind {
    /// `0x1`
    Normal,
    /// `0x2`
    Whistle,
    /// `0x4`
    Finish,
    /// `0x8`
    Clap,
}

impl HitSoundKind {
    /// All kinds in bit order.
    pub const ALL: [Self; 4] = [Self::Normal, Self::Whistle, Self::Finish, Self::Clap];

    /// The bit of this kind in the raw flags.
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Self::Normal => 0x1,
            Self::Whistle => 0x2,
            Self::Finish => 0x4,
            Self::Clap => 0x8,
        }
    }

    /// The name used in sample filenames, as in `soft-hitclap.wav`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Whistle => "whistle",
            Self::Finish => "finish",
            Self::Clap => "clap",
        }
    }
}

impl std::fmt::Display for HitSoundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of hit sounds.
///
/// A raw value of `0` decodes to the empty set. It is NOT coerced to [`HitSoundKind::Normal`];
/// consumers that need a sound for an empty set decide that themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "Vec<HitSoundKind>", from = "Vec<HitSoundKind>")
)]
pub struct HitSound(u8);

impl HitSound {
    /// The empty set.
    pub const NONE: Self = Self(0);

    /// Keeps only the four known bits of the raw flags.
    #[must_use]
    pub const fn from_bits(raw: u8) -> Self {
        Self(raw & 0xF)
    }

    /// Decodes a raw hit sound field.
    ///
    /// # Errors
    ///
    /// Returns [`crate::osu::parse::ParseError::InvalidNumber`] if the field is not an integer.
    pub fn decode(token: &str) -> Result<Self> {
        let raw: u32 = parse_int(token, "hit sound")?;
        Ok(Self::from_bits((raw & 0xF) as u8))
    }

    /// The raw bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether no sound flag is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether `kind` is in the set.
    #[must_use]
    pub const fn contains(self, kind: HitSoundKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Iterates the kinds in the set, in bit order.
    pub fn iter(self) -> impl Iterator<Item = HitSoundKind> {
        HitSoundKind::ALL
            .into_iter()
            .filter(move |&kind| self.contains(kind))
    }
}

impl FromIterator<HitSoundKind> for HitSound {
    fn from_iter<I: IntoIterator<Item = HitSoundKind>>(iter: I) -> Self {
        Self(iter.into_iter().fold(0, |bits, kind| bits | kind.bit()))
    }
}

impl From<Vec<HitSoundKind>> for HitSound {
    fn from(kinds: Vec<HitSoundKind>) -> Self {
        kinds.into_iter().collect()
    }
}

impl From<HitSound> for Vec<HitSoundKind> {
    fn from(sound: HitSound) -> Self {
        sound.iter().collect()
    }
}
