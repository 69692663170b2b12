use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::StripConfig;

/// Returns the platform-specific base config directory.
///
/// Resolution order:
/// 1. `XDG_CONFIG_HOME`
/// 2. `$HOME/.config`
/// 3. `%USERPROFILE%/.config`
pub fn config_base_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }
    std::env::var_os("USERPROFILE").map(|home| PathBuf::from(home).join(".config"))
}

/// Returns the path to `~/.config/tabstrip/config.ron`.
fn config_path() -> Option<PathBuf> {
    config_base_dir().map(|base| base.join("tabstrip").join("config.ron"))
}

/// Reads and parses the config file at `path`.
fn read_config(path: &Path) -> anyhow::Result<StripConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    ron::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

/// Loads the config from disk, falling back to defaults when the file
/// is missing or malformed.  A present-but-unreadable file is logged at
/// warn; a missing file is the normal first-run case.
pub fn load_config() -> StripConfig {
    let Some(path) = config_path() else {
        return StripConfig::default();
    };
    if !path.exists() {
        return StripConfig::default();
    }
    match read_config(&path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("falling back to default config: {err:#}");
            StripConfig::default()
        }
    }
}

/// Persists the config to disk. Errors are silently ignored.
pub fn save_config(config: &StripConfig) {
    let Some(path) = config_path() else {
        return;
    };
    let Some(dir) = path.parent() else {
        return;
    };
    if fs::create_dir_all(dir).is_err() {
        return;
    }
    let pretty = ron::ser::PrettyConfig::default();
    let Ok(serialized) = ron::ser::to_string_pretty(config, pretty) else {
        return;
    };
    let _ = fs::write(path, serialized);
}
