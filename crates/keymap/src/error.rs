use std::fmt;

#[derive(Debug)]
pub enum KeymapError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (missing enum type, bad mode combination, etc.).
    ConfigValidation(String),
    /// Reconciliation attempted before the key mode (and, for enum mode, a
    /// resolved enum descriptor) was configured.
    ParametersNotConfigured,
    /// The host resolved an enum descriptor for a different type than the
    /// config names.
    EnumTypeMismatch { expected: String, found: String },
    /// JSON rendering of an outcome failed.
    Serialize(String),
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::ParametersNotConfigured => {
                write!(f, "reconciliation parameters are not configured")
            }
            Self::EnumTypeMismatch { expected, found } => {
                write!(f, "enum descriptor mismatch: config names '{expected}', host resolved '{found}'")
            }
            Self::Serialize(msg) => write!(f, "serialize error: {msg}"),
        }
    }
}

impl std::error::Error for KeymapError {}
