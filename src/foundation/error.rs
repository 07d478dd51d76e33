use crate::foundation::core::Category;

/// Convenience result type used across the crate.
pub type AvatarResult<T> = Result<T, AvatarError>;

/// Top-level error taxonomy used by public APIs.
#[derive(thiserror::Error, Debug)]
pub enum AvatarError {
    /// Malformed DNA string.
    #[error("format error: {0}")]
    Format(#[from] DnaFormatError),

    /// Invalid caller-provided options or indices.
    #[error("validation error: {0}")]
    Validation(String),

    /// Asset table that does not follow the six-part, ten-variant schema.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AvatarError {
    /// Build an [`AvatarError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AvatarError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build an [`AvatarError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Borrow the DNA format error, if this is one.
    pub fn as_format(&self) -> Option<&DnaFormatError> {
        match self {
            Self::Format(err) => Some(err),
            _ => None,
        }
    }
}

/// Why a DNA string was rejected.
///
/// Positions are 1-based segment positions in DNA order.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DnaFormatError {
    /// The input string was empty.
    #[error("DNA string is empty")]
    Empty,

    /// Splitting on `-` did not produce exactly six segments.
    #[error("DNA string must contain exactly 6 segments separated by '-', found {found}")]
    SegmentCount {
        /// Number of segments found.
        found: usize,
    },

    /// A segment is not a base-10 integer.
    #[error("DNA segment {position} ({category}) \"{segment}\" is not a base-10 integer")]
    NotANumber {
        /// 1-based segment position.
        position: usize,
        /// Category the segment encodes.
        category: Category,
        /// Offending segment text.
        segment: String,
    },

    /// A segment parsed but lies outside `0..=9`.
    #[error("DNA segment {position} ({category}) \"{segment}\" must be a number between 0-9")]
    OutOfRange {
        /// 1-based segment position.
        position: usize,
        /// Category the segment encodes.
        category: Category,
        /// Offending segment text.
        segment: String,
    },
}

impl DnaFormatError {
    /// Offending segment text, when the error is about one segment.
    pub fn segment(&self) -> Option<&str> {
        match self {
            Self::NotANumber { segment, .. } | Self::OutOfRange { segment, .. } => Some(segment),
            Self::Empty | Self::SegmentCount { .. } => None,
        }
    }

    /// Category of the offending segment, when the error is about one segment.
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::NotANumber { category, .. } | Self::OutOfRange { category, .. } => {
                Some(*category)
            }
            Self::Empty | Self::SegmentCount { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
