use directories_next::ProjectDirs;
use std::path::PathBuf;

const SETTINGS_FILE: &str = "settings.toml";

/// Per-user configuration directory, if the platform exposes one.
pub fn project_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gamemenu").map(|d| d.config_dir().to_path_buf())
}

/// Default location of the settings file.
pub fn settings_path() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join(SETTINGS_FILE))
}
