use anyhow::Context;
use std::path::Path;
use tracing::debug;

use super::Settings;

/// Load settings from the default per-user location. A missing file yields
/// the defaults.
pub fn load_settings() -> anyhow::Result<Settings> {
    match super::settings_path() {
        Some(path) => load_settings_from(&path),
        None => Ok(Settings::default()),
    }
}

/// Load settings from `path`. A missing file yields the defaults; a file that
/// exists but cannot be parsed is an error.
pub fn load_settings_from(path: &Path) -> anyhow::Result<Settings> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    let settings: Settings = toml::from_str(&text)
        .with_context(|| format!("parsing settings in {}", path.display()))?;
    debug!(path = %path.display(), variant = %settings.variant, "settings loaded");
    Ok(settings)
}
