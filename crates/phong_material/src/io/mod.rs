//! Material files
//!
//! Materials can be stored as TOML or RON. The format is picked from the
//! file extension:
//!
//! ```toml
//! types = "PHONG"
//!
//! [[attributes]]
//! name = "DiffuseTexture"
//! value = { UnsignedInt = 5 }
//!
//! [[attributes]]
//! name = "Shininess"
//! value = { Float = 32.0 }
//! ```

use std::path::Path;

use log::{debug, info};
use serde::{de::DeserializeOwned, Serialize};

use crate::material::MaterialData;

/// Supported material file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl FileFormat {
    /// Format matching the path's extension
    pub fn from_path(path: &Path) -> Result<Self, FileError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(FileError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parse a value from text in this format
    pub fn parse<T: DeserializeOwned>(self, contents: &str) -> Result<T, FileError> {
        match self {
            Self::Toml => toml::from_str(contents).map_err(|e| FileError::Parse(e.to_string())),
            Self::Ron => ron::from_str(contents).map_err(|e| FileError::Parse(e.to_string())),
        }
    }

    /// Render a value as text in this format
    pub fn render<T: Serialize>(self, value: &T) -> Result<String, FileError> {
        match self {
            Self::Toml => toml::to_string_pretty(value).map_err(|e| FileError::Serialize(e.to_string())),
            Self::Ron => ron::ser::to_string_pretty(value, Default::default())
                .map_err(|e| FileError::Serialize(e.to_string())),
        }
    }
}

/// Types that can be loaded from and saved to material files
pub trait MaterialFile: Serialize + DeserializeOwned {
    /// Load from a `.toml` or `.ron` file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, FileError> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;
        let value = format.parse(&contents)?;
        info!("Loaded material file {}", path.display());
        Ok(value)
    }

    /// Save to a `.toml` or `.ron` file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), FileError> {
        let path = path.as_ref();
        let contents = FileFormat::from_path(path)?.render(self)?;
        std::fs::write(path, contents)?;
        debug!("Saved material file {}", path.display());
        Ok(())
    }
}

impl MaterialFile for MaterialData {}

/// Material file errors
#[derive(thiserror::Error, Debug)]
pub enum FileError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error, including materials that fail validation
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
