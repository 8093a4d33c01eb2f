//! Error types for the animation core

use lupine_api_core::ValueKind;

/// Failure while writing one sampled value onto a target.
///
/// Caught per track by `Animation::apply_to_scene`; never aborts a frame.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ApplyError {
    /// The sampled value could not be coerced into the shape the property needs
    #[error("cannot coerce {} into {expected} for property '{property}'", .found.name())]
    Coercion {
        property: String,
        expected: &'static str,
        found: ValueKind,
    },

    /// The target rejected the write or the method call
    #[error("target rejected '{property}': {reason}")]
    Target { property: String, reason: String },
}

impl ApplyError {
    pub fn target(property: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Target {
            property: property.into(),
            reason: reason.into(),
        }
    }
}

/// Failure while encoding or decoding the persisted JSON format.
#[derive(thiserror::Error, Debug)]
pub enum PersistError {
    #[error("missing required field '{field}' in {entity}")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("malformed {entity}: {reason}")]
    Malformed {
        entity: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Top-level error for library and player operations
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum AnimationError {
    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error("Animation not found: {name}")]
    AnimationNotFound { name: String },

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl AnimationError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::AnimationNotFound { name: name.into() }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Persist(PersistError::Io(_)) => "io",
            Self::Persist(_) => "serialization",
            Self::AnimationNotFound { .. } => "data",
            Self::InvalidArgument { .. } => "validation",
        }
    }
}

impl From<std::io::Error> for AnimationError {
    fn from(err: std::io::Error) -> Self {
        Self::Persist(PersistError::Io(err))
    }
}

impl From<serde_json::Error> for AnimationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Persist(PersistError::Json(err))
    }
}
