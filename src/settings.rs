//! Settings for the FX layer
//!
//! Handles loading/saving of the FX settings XML file.

use quick_xml::de::from_str;
use quick_xml::se::to_string;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// FX settings stored as XML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "SpriteFxSettings")]
pub struct FxSettings {
    /// Name of the FX-capable pipeline
    #[serde(rename = "fxPipeline", default = "default_fx_pipeline")]
    pub fx_pipeline: String,

    /// Name of the pipeline renderables return to when FX is disabled
    #[serde(rename = "defaultPipeline", default = "default_default_pipeline")]
    pub default_pipeline: String,

    /// Padding applied to new render objects (pixels, >= 0)
    #[serde(rename = "defaultPadding", default)]
    pub default_padding: f32,

    /// Texture key displacement effects use when none is given
    #[serde(rename = "displacementTexture", default = "default_displacement_texture")]
    pub displacement_texture: String,
}

fn default_fx_pipeline() -> String {
    "FxPipeline".to_string()
}

fn default_default_pipeline() -> String {
    "MultiPipeline".to_string()
}

fn default_displacement_texture() -> String {
    crate::effects::WHITE_TEXTURE.to_string()
}

impl Default for FxSettings {
    fn default() -> Self {
        Self {
            fx_pipeline: default_fx_pipeline(),
            default_pipeline: default_default_pipeline(),
            default_padding: 0.0,
            displacement_texture: default_displacement_texture(),
        }
    }
}

impl FxSettings {
    /// Negative (or NaN) padding becomes 0
    pub fn clamp_padding(&mut self) {
        self.default_padding = self.default_padding.max(0.0);
    }

    /// Parse settings from an XML string
    pub fn from_xml_str(xml: &str) -> Result<Self, SettingsError> {
        let mut settings: Self = from_str(xml).map_err(SettingsError::XmlParse)?;
        settings.clamp_padding();
        Ok(settings)
    }

    /// Serialize settings to an XML string (with declaration)
    pub fn to_xml_string(&self) -> Result<String, SettingsError> {
        let xml = to_string(self).map_err(SettingsError::XmlWrite)?;
        Ok(format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}", xml))
    }

    /// Load settings from an XML file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path).map_err(SettingsError::Io)?;
        Self::from_xml_str(&contents)
    }

    /// Save settings to an XML file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        let formatted = self.to_xml_string()?;
        fs::write(path, formatted).map_err(SettingsError::Io)?;
        Ok(())
    }

    /// Get the settings file path in the config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("SpriteFx");
            p.push("settings.xml");
            p
        })
    }

    /// Load settings from the config directory, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load FX settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to the config directory
    pub fn save(&self) -> Result<(), SettingsError> {
        let Some(path) = Self::default_path() else {
            return Err(SettingsError::NoConfigDir);
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(SettingsError::Io)?;
        }

        self.save_to_file(&path)
    }
}

/// Settings-related errors
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    XmlParse(quick_xml::DeError),
    XmlWrite(quick_xml::SeError),
    NoConfigDir,
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::XmlParse(e) => write!(f, "XML parse error: {}", e),
            SettingsError::XmlWrite(e) => write!(f, "XML write error: {}", e),
            SettingsError::NoConfigDir => write!(f, "Could not find config directory"),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = FxSettings::default();
        assert_eq!(settings.fx_pipeline, "FxPipeline");
        assert_eq!(settings.default_pipeline, "MultiPipeline");
        assert_eq!(settings.default_padding, 0.0);
        assert_eq!(settings.displacement_texture, "__WHITE");
    }

    #[test]
    fn test_xml_round_trip() {
        let settings = FxSettings {
            fx_pipeline: "PostFx".to_string(),
            default_padding: 8.0,
            ..Default::default()
        };

        let xml = settings.to_xml_string().unwrap();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<fxPipeline>PostFx</fxPipeline>"));

        let parsed = FxSettings::from_xml_str(&xml).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let xml = "<SpriteFxSettings><defaultPadding>-4</defaultPadding></SpriteFxSettings>";
        let parsed = FxSettings::from_xml_str(xml).unwrap();
        assert_eq!(parsed.fx_pipeline, "FxPipeline");
        // Padding is clamped on load
        assert_eq!(parsed.default_padding, 0.0);
    }

    #[test]
    fn test_parse_error() {
        let xml = "<SpriteFxSettings><defaultPadding>wide</defaultPadding></SpriteFxSettings>";
        let result = FxSettings::from_xml_str(xml);
        assert!(matches!(result, Err(SettingsError::XmlParse(_))));
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = std::env::temp_dir().join("sprite-fx-does-not-exist/settings.xml");
        let result = FxSettings::load_from_file(&path);
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }
}
