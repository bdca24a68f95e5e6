use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{validate_non_empty_list, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Column names and classification vocabulary of the source CSV.
///
/// The defaults match the Spanish-language Garmin Connect export. A TOML
/// file can swap in another locale without touching the converter; every
/// field falls back to its default, so a schema file only needs to name
/// what it changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSchema {
    pub columns: ColumnConfig,
    pub classification: ClassificationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub activity_type: String,
    pub date: String,
    pub distance: String,
    pub time: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            activity_type: "Tipo de actividad".to_string(),
            date: "Fecha".to_string(),
            distance: "Distancia".to_string(),
            time: "Tiempo".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    pub pool_keywords: Vec<String>,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            pool_keywords: vec![
                "pool".to_string(),
                "piscina".to_string(),
                "alberca".to_string(),
            ],
        }
    }
}

impl SourceSchema {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConvertError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConvertError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for SourceSchema {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("columns.activity_type", &self.columns.activity_type)?;
        validate_non_empty_string("columns.date", &self.columns.date)?;
        validate_non_empty_string("columns.distance", &self.columns.distance)?;
        validate_non_empty_string("columns.time", &self.columns.time)?;

        validate_non_empty_list(
            "classification.pool_keywords",
            &self.classification.pool_keywords,
        )?;
        // A blank keyword would classify every activity as pool.
        for keyword in &self.classification.pool_keywords {
            validate_non_empty_string("classification.pool_keywords", keyword)?;
        }

        Ok(())
    }
}
