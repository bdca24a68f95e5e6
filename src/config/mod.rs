pub mod cli;
pub mod schema;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "nadamillas-convert")]
#[command(about = "Converts a Garmin Connect CSV export to the nadamillas JSON format")]
pub struct CliConfig {
    /// The CSV file exported from Garmin Connect
    pub input_file: String,

    /// The starting id number
    #[arg(short = 'i', long, default_value_t = 0)]
    pub start_id: u64,

    /// Directory the JSON document is written into
    #[arg(long, default_value = ".")]
    pub output_path: String,

    /// TOML file overriding the source column names and pool keywords
    #[arg(long)]
    pub schema_file: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        &self.input_file
    }

    fn start_id(&self) -> u64 {
        self.start_id
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_file", &self.input_file)?;
        validate_path("output_path", &self.output_path)?;
        if let Some(schema_file) = &self.schema_file {
            validate_path("schema_file", schema_file)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["nadamillas-convert", "export.csv"]);
        assert_eq!(config.input_file, "export.csv");
        assert_eq!(config.start_id, 0);
        assert_eq!(config.output_path, ".");
        assert!(config.schema_file.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn test_cli_start_id_flag() {
        let config = CliConfig::parse_from(["nadamillas-convert", "export.csv", "-i", "945"]);
        assert_eq!(config.start_id, 945);

        let config =
            CliConfig::parse_from(["nadamillas-convert", "export.csv", "--start-id", "10"]);
        assert_eq!(config.start_id, 10);
    }

    #[test]
    fn test_validate_rejects_empty_paths() {
        let config = CliConfig {
            input_file: String::new(),
            start_id: 0,
            output_path: ".".to_string(),
            schema_file: None,
            verbose: false,
        };
        assert!(config.validate().is_err());
    }
}
