//! # Avatar Error Types
//!
//! Errors only surface while loading or validating static data at startup.
//! Assembly and animation never fail.

use thiserror::Error;

/// Errors raised by catalog/config loading and validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvatarError {
    /// A static color literal could not be parsed.
    #[error("invalid color literal {value:?} in {context}")]
    InvalidColor {
        /// Where the literal was found.
        context: String,
        /// The offending literal.
        value: String,
    },

    /// An animated skin declares no keyframe colors.
    #[error("animated skin {0:?} has no keyframe colors")]
    EmptySkinPalette(String),

    /// An animated skin speed or phase multiplier is not finite.
    #[error("animated skin {0:?} has a non-finite speed or phase multiplier")]
    InvalidSkinSpeed(String),

    /// The same id appears twice in one catalog table.
    #[error("duplicate id {id:?} in {table}")]
    DuplicateId {
        /// Catalog table name.
        table: &'static str,
        /// The repeated id.
        id: String,
    },

    /// A config value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML source failed to parse.
    #[error("toml parse error: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for AvatarError {
    fn from(err: toml::de::Error) -> Self {
        Self::Toml(err.to_string())
    }
}

/// Result type for avatar loading operations.
pub type AvatarResult<T> = Result<T, AvatarError>;
