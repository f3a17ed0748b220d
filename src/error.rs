//! Configuration error types.
//!
//! The simulation itself never fails: every step operates on bounded
//! in-memory collections. Only loading and validating a [`crate::Tuning`]
//! can go wrong, and those failures surface here instead of panicking.

use std::fmt;

/// Errors raised while loading or validating game balance data.
#[derive(Debug)]
pub enum ConfigError {
    /// The tuning file could not be read.
    Io {
        /// Path that was being read.
        path: String,
        source: std::io::Error,
    },

    /// The tuning JSON was malformed or had a field of the wrong type.
    Parse(serde_json::Error),

    /// A field parsed fine but its value would break a simulation invariant.
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },

    /// An unknown variant name was requested.
    UnknownVariant(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read tuning file '{}': {}", path, source)
            }
            ConfigError::Parse(err) => write!(f, "invalid tuning JSON: {}", err),
            ConfigError::Invalid {
                field,
                value,
                expected,
            } => write!(
                f,
                "tuning field '{}' = {} is outside accepted range {}",
                field, value, expected
            ),
            ConfigError::UnknownVariant(name) => {
                write!(f, "unknown game variant '{}' (expected classic or powerups)", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Convenience alias: a `Result` using `ConfigError` as the error type.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_display_names_field() {
        let err = ConfigError::Invalid {
            field: "player_radius",
            value: -1.0,
            expected: "(0, inf)",
        };
        let msg = err.to_string();
        assert!(msg.contains("player_radius"));
        assert!(msg.contains("-1"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_parse_error_has_source() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = ConfigError::from(json_err);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("invalid tuning JSON"));
    }
}
