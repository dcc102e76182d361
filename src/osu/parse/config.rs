//! Parsing policies.
//!
//! A [`ParseConfig`] is handed to [`crate::osu::parse_osu_with_config`]. Build one from
//! [`default_config`] and override what differs:
//!
//! ```
//! use osu_format::osu::parse::config::{BaseTypePolicy, CommentPolicy, default_config};
//!
//! let config = default_config()
//!     .comments(CommentPolicy::Everywhere)
//!     .unknown_base_type(BaseTypePolicy::TreatAsCircle);
//! assert_eq!(config.comment_policy(), CommentPolicy::Everywhere);
//! ```

/// Where `//` comment lines are skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CommentPolicy {
    /// Only between sections. Inside a section a comment line is content and goes to the
    /// section decoder like any other line.
    #[default]
    TopLevelOnly,
    /// Between sections and inside section bodies.
    Everywhere,
}

/// What a hit object type with none of the circle, slider or spinner bits becomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BaseTypePolicy {
    /// Fail with [`super::ParseError::MalformedHitObjectType`].
    #[default]
    Reject,
    /// Read the object as a circle.
    TreatAsCircle,
}

/// Policies of one parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[must_use]
pub struct ParseConfig {
    comments: CommentPolicy,
    unknown_base_type: BaseTypePolicy,
}

impl ParseConfig {
    /// Sets where comment lines are skipped.
    pub const fn comments(mut self, policy: CommentPolicy) -> Self {
        self.comments = policy;
        self
    }

    /// Sets how a hit object without a base type bit is read.
    pub const fn unknown_base_type(mut self, policy: BaseTypePolicy) -> Self {
        self.unknown_base_type = policy;
        self
    }

    /// Where comment lines are skipped.
    #[must_use]
    pub const fn comment_policy(&self) -> CommentPolicy {
        self.comments
    }

    /// How a hit object without a base type bit is read.
    #[must_use]
    pub const fn base_type_policy(&self) -> BaseTypePolicy {
        self.unknown_base_type
    }
}

/// The configuration [`crate::osu::parse_osu`] uses.
pub const fn default_config() -> ParseConfig {
    ParseConfig {
        comments: CommentPolicy::TopLevelOnly,
        unknown_base_type: BaseTypePolicy::Reject,
    }
}
