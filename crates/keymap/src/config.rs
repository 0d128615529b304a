use serde::{Deserialize, Serialize};

use crate::error::KeymapError;

// ---------------------------------------------------------------------------
// Key mode
// ---------------------------------------------------------------------------

/// Kind of key the mapping carries. `None` doubles as "not configured":
/// with no key kind there is nothing to look entries up by, and every
/// operation treats the mapping as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyMode {
    None,
    Enum,
    Int,
}

impl Default for KeyMode {
    fn default() -> Self {
        Self::None
    }
}

impl std::fmt::Display for KeyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Enum => write!(f, "enum"),
            Self::Int => write!(f, "int"),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct KeymapConfig {
    pub name: String,
    #[serde(default)]
    pub key_mode: KeyMode,
    /// Sentinel key meaning "no explicit key assigned yet"; excluded from
    /// the lookup table.
    #[serde(default)]
    pub default_key: i32,
    /// Fully qualified identifier of the key enum; required in enum mode.
    #[serde(default)]
    pub enum_type: Option<String>,
}

impl KeymapConfig {
    pub fn from_toml(input: &str) -> Result<Self, KeymapError> {
        let config: KeymapConfig =
            toml::from_str(input).map_err(|e| KeymapError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), KeymapError> {
        match self.key_mode {
            KeyMode::Enum => match &self.enum_type {
                Some(t) if !t.is_empty() => Ok(()),
                _ => Err(KeymapError::ConfigValidation(
                    "enum key mode requires a non-empty enum_type".into(),
                )),
            },
            KeyMode::None if self.default_key != 0 => Err(KeymapError::ConfigValidation(
                format!("key mode 'none' cannot carry default_key {}", self.default_key),
            )),
            _ => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Enum descriptor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumVariant {
    pub name: String,
    pub value: i32,
}

/// Host-supplied description of a key enum. Reflection/metadata discovery
/// stays on the host side; the engine only consumes the resolved shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    pub type_id: String,
    pub variants: Vec<EnumVariant>,
}

impl EnumDescriptor {
    pub fn names(&self) -> Vec<&str> {
        self.variants.iter().map(|v| v.name.as_str()).collect()
    }

    pub fn value_of(&self, name: &str) -> Option<i32> {
        self.variants.iter().find(|v| v.name == name).map(|v| v.value)
    }

    pub fn contains_value(&self, value: i32) -> bool {
        self.variants.iter().any(|v| v.value == value)
    }
}

// ---------------------------------------------------------------------------
// Resolved parameters
// ---------------------------------------------------------------------------

/// Reconciliation parameters: the config's key mode and default key, plus
/// (for enum mode) the descriptor the host resolved for `enum_type`.
///
/// Unconfigured params are representable on purpose — `is_up_to_date`
/// reports stale and `reconcile` errors without touching anything, rather
/// than panicking on a half-set-up library.
#[derive(Debug, Clone)]
pub struct SyncParams {
    pub mode: KeyMode,
    pub default_key: i32,
    pub enum_type: Option<EnumDescriptor>,
}

impl SyncParams {
    /// Pair a validated config with the host's resolved descriptor.
    pub fn resolve(
        config: &KeymapConfig,
        descriptor: Option<EnumDescriptor>,
    ) -> Result<Self, KeymapError> {
        config.validate()?;

        if config.key_mode != KeyMode::Enum {
            return Ok(Self {
                mode: config.key_mode,
                default_key: config.default_key,
                enum_type: None,
            });
        }

        let descriptor = descriptor.ok_or(KeymapError::ParametersNotConfigured)?;
        let expected = config.enum_type.as_deref().unwrap_or_default();
        if descriptor.type_id != expected {
            return Err(KeymapError::EnumTypeMismatch {
                expected: expected.to_string(),
                found: descriptor.type_id,
            });
        }
        if !descriptor.contains_value(config.default_key) {
            return Err(KeymapError::ConfigValidation(format!(
                "default_key {} is not a value of enum '{}'",
                config.default_key, descriptor.type_id
            )));
        }

        Ok(Self {
            mode: KeyMode::Enum,
            default_key: config.default_key,
            enum_type: Some(descriptor),
        })
    }

    /// Params with no key mode set; every operation treats these as stale.
    pub fn unconfigured() -> Self {
        Self {
            mode: KeyMode::None,
            default_key: 0,
            enum_type: None,
        }
    }

    /// Plain integer keys, no enum metadata required.
    pub fn int_keys(default_key: i32) -> Self {
        Self {
            mode: KeyMode::Int,
            default_key,
            enum_type: None,
        }
    }

    pub fn is_configured(&self) -> bool {
        match self.mode {
            KeyMode::None => false,
            KeyMode::Enum => self.enum_type.is_some(),
            KeyMode::Int => true,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_ENUM: &str = r#"
name = "UI Illustrations"
key_mode = "enum"
default_key = 0
enum_type = "ui.Illustration"
"#;

    fn descriptor() -> EnumDescriptor {
        EnumDescriptor {
            type_id: "ui.Illustration".into(),
            variants: vec![
                EnumVariant { name: "None".into(), value: 0 },
                EnumVariant { name: "About".into(), value: 1 },
                EnumVariant { name: "Splash".into(), value: 2 },
            ],
        }
    }

    #[test]
    fn parse_valid_enum_config() {
        let config = KeymapConfig::from_toml(VALID_ENUM).unwrap();
        assert_eq!(config.name, "UI Illustrations");
        assert_eq!(config.key_mode, KeyMode::Enum);
        assert_eq!(config.default_key, 0);
        assert_eq!(config.enum_type.as_deref(), Some("ui.Illustration"));
    }

    #[test]
    fn parse_defaults_to_none_mode() {
        let config = KeymapConfig::from_toml("name = \"Bare\"").unwrap();
        assert_eq!(config.key_mode, KeyMode::None);
        assert_eq!(config.default_key, 0);
        assert!(config.enum_type.is_none());
    }

    #[test]
    fn reject_enum_mode_without_enum_type() {
        let input = r#"
name = "Bad"
key_mode = "enum"
"#;
        let err = KeymapConfig::from_toml(input).unwrap_err();
        assert!(err.to_string().contains("enum_type"));
    }

    #[test]
    fn reject_none_mode_with_default_key() {
        let input = r#"
name = "Bad"
key_mode = "none"
default_key = 3
"#;
        let err = KeymapConfig::from_toml(input).unwrap_err();
        assert!(err.to_string().contains("default_key"));
    }

    #[test]
    fn reject_unknown_key_mode() {
        let input = r#"
name = "Bad"
key_mode = "guid"
"#;
        assert!(KeymapConfig::from_toml(input).is_err());
    }

    #[test]
    fn resolve_enum_params() {
        let config = KeymapConfig::from_toml(VALID_ENUM).unwrap();
        let params = SyncParams::resolve(&config, Some(descriptor())).unwrap();
        assert!(params.is_configured());
        assert_eq!(params.mode, KeyMode::Enum);
        let d = params.enum_type.unwrap();
        assert_eq!(d.value_of("About"), Some(1));
        assert_eq!(d.value_of("Missing"), None);
        assert_eq!(d.names(), vec!["None", "About", "Splash"]);
    }

    #[test]
    fn resolve_rejects_missing_descriptor() {
        let config = KeymapConfig::from_toml(VALID_ENUM).unwrap();
        let err = SyncParams::resolve(&config, None).unwrap_err();
        assert!(matches!(err, KeymapError::ParametersNotConfigured));
    }

    #[test]
    fn resolve_rejects_mismatched_descriptor() {
        let config = KeymapConfig::from_toml(VALID_ENUM).unwrap();
        let other = EnumDescriptor {
            type_id: "ui.Theme".into(),
            variants: vec![EnumVariant { name: "Dark".into(), value: 0 }],
        };
        let err = SyncParams::resolve(&config, Some(other)).unwrap_err();
        assert!(err.to_string().contains("ui.Theme"));
    }

    #[test]
    fn resolve_rejects_default_key_outside_enum() {
        let input = r#"
name = "Bad Default"
key_mode = "enum"
default_key = 9
enum_type = "ui.Illustration"
"#;
        let config = KeymapConfig::from_toml(input).unwrap();
        let err = SyncParams::resolve(&config, Some(descriptor())).unwrap_err();
        assert!(err.to_string().contains("default_key 9"));
    }

    #[test]
    fn unconfigured_params_report_unconfigured() {
        assert!(!SyncParams::unconfigured().is_configured());
        assert!(SyncParams::int_keys(0).is_configured());
    }
}
