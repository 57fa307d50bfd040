use anyhow::{anyhow, Context};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::Settings;

/// Persist settings to the default per-user location.
pub fn save_settings(settings: &Settings) -> anyhow::Result<()> {
    let path = super::settings_path().ok_or_else(|| anyhow!("no configuration directory"))?;
    save_settings_to(settings, &path)
}

/// Serialize `settings` as TOML to `path`, creating the parent directory.
/// The file is written next to its final name and renamed into place so a
/// failed write never leaves a truncated settings file behind.
pub fn save_settings_to(settings: &Settings, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let text = toml::to_string_pretty(settings).context("serializing settings")?;
    let tmp = path.with_extension("toml.tmp");
    fs::write(&tmp, text).with_context(|| format!("writing {}", tmp.display()))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("renaming into {}", path.display()));
    }
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::settings::load_settings_from;
    use crate::input::KeyCode;

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg").join("settings.toml");
        let mut s = Settings::default();
        s.preferences.music_volume = 15;
        s.keys.screenshot = KeyCode::PrintScreen;
        s.joystick.menu = Some(7);
        save_settings_to(&s, &path).unwrap();
        assert_eq!(load_settings_from(&path).unwrap(), s);
        assert!(!path.with_extension("toml.tmp").exists());
    }
}
