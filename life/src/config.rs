//! Viewer/simulation settings loaded from `life.toml`, with defaults for
//! anything left out.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::history::DEFAULT_HISTORY_LEN;

pub const DEFAULT_CONFIG_FILE: &str = "life.toml";
pub const CONFIG_PATH_ENV: &str = "LIFE_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Visible cells horizontally.
    pub viewport_width: u32,
    /// Visible cells vertically.
    pub viewport_height: u32,
    /// Edge of one cell on screen, in points.
    pub cell_size: f32,
    /// Milliseconds between generations while running.
    pub tick_ms: u64,
    /// Fingerprints kept by the cycle detector.
    pub history_len: usize,
    pub window: [f32; 2],
    pub live_color: [u8; 3],
    pub dead_color: [u8; 3],
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            viewport_width: 50,
            viewport_height: 50,
            cell_size: 15.0,
            tick_ms: 200,
            history_len: DEFAULT_HISTORY_LEN,
            window: [800.0, 950.0],
            live_color: [0, 200, 0],
            dead_color: [40, 40, 40],
        }
    }
}

impl LifeConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let cfg: LifeConfig = toml::from_str(s)?;
        cfg.validate()
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let txt = std::fs::read_to_string(path)?;
        Self::from_toml_str(&txt)
    }

    /// Loads `$LIFE_CONFIG` or `./life.toml`; a missing file means defaults.
    pub fn load_or_default() -> ConfigResult<Self> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from_optional(&path)
    }

    fn load_from_optional(path: &Path) -> ConfigResult<Self> {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    fn validate(self) -> ConfigResult<Self> {
        if self.viewport_width == 0 || self.viewport_height == 0 {
            return Err(ConfigError::Invalid("viewport must be at least 1x1".into()));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::Invalid("tick_ms must be positive".into()));
        }
        if self.history_len == 0 {
            return Err(ConfigError::Invalid("history_len must be positive".into()));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::Invalid(format!("bad cell_size {}", self.cell_size)));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg = LifeConfig::from_toml_str("tick_ms = 50\nlive_color = [255, 0, 0]\n")
            .expect("parse");
        assert_eq!(cfg.tick_interval(), Duration::from_millis(50));
        assert_eq!(cfg.live_color, [255, 0, 0]);
        assert_eq!(cfg.viewport_width, 50);
    }

    #[test]
    fn zero_viewport_is_rejected() {
        let err = LifeConfig::from_toml_str("viewport_width = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn wrong_type_is_a_parse_error() {
        let err = LifeConfig::from_toml_str("tick_ms = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "viewport_height = 12").expect("write");
        let cfg = LifeConfig::load(file.path()).expect("load");
        assert_eq!(cfg.viewport_height, 12);
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = LifeConfig::load_from_optional(&dir.path().join("absent.toml")).expect("load");
        assert_eq!(cfg, LifeConfig::default());
    }
}
