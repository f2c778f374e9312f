// ArmScript - A single-pass compiler for robot arm command scripts
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Analyzer configuration.
//!
//! Configuration is read from a TOML file:
//!
//! ```toml
//! gripper_mode = "opening"
//! default_delay_seconds = 5.0
//! ```
//!
//! Every key is optional and falls back to [`AnalyzerConfig::default`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seconds per movement before any `velocidad` assignment.
pub const DEFAULT_DELAY_SECONDS: f64 = 5.0;

/// How the `garra` command is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GripperMode {
    /// The gripper rotates like a sixth axis (0-360 degrees).
    #[default]
    Rotation,
    /// The gripper fingers open and close (0-85 mm).
    Opening,
}

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is outside what the analyzer accepts.
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Settings that shape validation and code generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Range selection for the `garra` command.
    pub gripper_mode: GripperMode,
    /// Delay registered for every robot at declaration.
    pub default_delay_seconds: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            gripper_mode: GripperMode::default(),
            default_delay_seconds: DEFAULT_DELAY_SECONDS,
        }
    }
}

impl AnalyzerConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Use a different gripper mode.
    pub fn with_gripper_mode(mut self, mode: GripperMode) -> Self {
        self.gripper_mode = mode;
        self
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_delay_seconds.is_finite() || self.default_delay_seconds <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "default_delay_seconds must be a positive number, got {}",
                self.default_delay_seconds
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.gripper_mode, GripperMode::Rotation);
        assert_eq!(config.default_delay_seconds, 5.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let config =
            AnalyzerConfig::from_toml_str("gripper_mode = \"opening\"\ndefault_delay_seconds = 2.5\n")
                .unwrap();
        assert_eq!(config.gripper_mode, GripperMode::Opening);
        assert_eq!(config.default_delay_seconds, 2.5);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = AnalyzerConfig::from_toml_str("").unwrap();
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = AnalyzerConfig::from_toml_str("speed = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_gripper_mode_rejected() {
        let err = AnalyzerConfig::from_toml_str("gripper_mode = \"claw\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_non_positive_delay_rejected() {
        let err = AnalyzerConfig::from_toml_str("default_delay_seconds = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "gripper_mode = \"opening\"").unwrap();
        let config = AnalyzerConfig::load(file.path()).unwrap();
        assert_eq!(config.gripper_mode, GripperMode::Opening);
    }

    #[test]
    fn test_load_missing_file() {
        let err = AnalyzerConfig::load(Path::new("/nonexistent/armscript.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
