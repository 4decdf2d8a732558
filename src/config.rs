use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/slimecalc.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Chunk radius around the origin chunk used by `map` when no region is given.
    pub map_radius: u32,
    /// Chunk radius searched by `nearest` when none is given.
    pub nearest_radius: u32,
    /// Glyph drawn for slime chunks on the ASCII map.
    pub slime_glyph: char,
    /// Glyph drawn for ordinary chunks on the ASCII map.
    pub empty_glyph: char,
    /// Emit JSON instead of text by default.
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            map_radius: 8,
            nearest_radius: 32,
            slime_glyph: '#',
            empty_glyph: '.',
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    AppConfig::default()
                }
            },
            Err(err) => {
                // A missing default file is the normal case.
                if path != Path::new(DEFAULT_CONFIG_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                AppConfig::default()
            }
        }
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("slimecalc-config-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn missing_file_uses_defaults() {
        let cfg = AppConfig::load_from_path(&temp_path("does-not-exist.toml"));
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg: AppConfig = toml::from_str("map_radius = 3\nslime_glyph = \"S\"").unwrap();
        assert_eq!(cfg.map_radius, 3);
        assert_eq!(cfg.slime_glyph, 'S');
        assert_eq!(cfg.nearest_radius, 32);
        assert_eq!(cfg.empty_glyph, '.');
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let path = temp_path("invalid.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "map_radius = \"wide\"").unwrap();
        assert_eq!(AppConfig::load_from_path(&path), AppConfig::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_path("nested/saved.toml");
        let cfg = AppConfig {
            map_radius: 4,
            nearest_radius: 10,
            slime_glyph: '@',
            empty_glyph: ' ',
            json: true,
        };
        cfg.save_to_path(&path).unwrap();
        assert_eq!(AppConfig::load_from_path(&path), cfg);
    }
}
