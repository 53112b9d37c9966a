//! Configuration loading and parsing

use anyhow::{Context, Result};
use puzzle_artifacts::{ArtifactFormat, GeneratorConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub grid: GridConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    pub format: Option<ArtifactFormat>,
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrackerConfig {
    pub start_position: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GridConfig {
    pub width: Option<usize>,
}

impl AppConfig {
    /// Build the library configuration, falling back to library defaults
    pub fn generator_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new();
        if let Some(format) = self.output.format {
            config = config.with_format(format);
        }
        if let Some(position) = self.tracker.start_position {
            config = config.with_start_position(position);
        }
        if let Some(width) = self.grid.width {
            config = config.with_grid_width(width);
        }
        config
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [input]
            file = "input.txt"

            [output]
            format = "verilog"
            path = "day_01_input.v"

            [tracker]
            start_position = 0

            [grid]
            width = 32
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.input.file, Some(PathBuf::from("input.txt")));
        assert_eq!(config.output.format, Some(ArtifactFormat::Verilog));

        let generator = config.generator_config();
        assert_eq!(generator.format, ArtifactFormat::Verilog);
        assert_eq!(generator.start_position, 0);
        assert_eq!(generator.grid_width, 32);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.input.file.is_none());
        assert_eq!(config.generator_config(), GeneratorConfig::new());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let toml_content = r#"
            [output]
            format = "bitmap"
        "#;
        assert!(toml::from_str::<AppConfig>(toml_content).is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/puzzle.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
