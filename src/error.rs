use std::fmt;

/// A direction set that cannot be walked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The step is (0, 0) or has a component outside {-1, 0, 1}.
    InvalidDirection { dx: i8, dy: i8 },
    /// The same step appears twice in one set.
    DuplicateDirection { dx: i8, dy: i8 },
    /// Text that does not read as `dx,dy`.
    MalformedDirection(String),
    UnknownSlider(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDirection { dx, dy } => {
                write!(f, "invalid direction ({dx}, {dy}): steps must be in -1..=1 and not both zero")
            }
            ConfigError::DuplicateDirection { dx, dy } => {
                write!(f, "direction ({dx}, {dy}) appears more than once")
            }
            ConfigError::MalformedDirection(text) => {
                write!(f, "cannot read direction '{text}', expected 'dx,dy'")
            }
            ConfigError::UnknownSlider(name) => {
                write!(f, "unknown slider '{name}', expected rook, bishop or queen")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
