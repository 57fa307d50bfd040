use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::de::{DeserializeOwned, IntoDeserializer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gamemenu::app::settings::{
    config_dirs, load_settings, load_settings_from, save_settings, save_settings_to,
};
use gamemenu::app::types::{GameMode, GameVersion};
use gamemenu::app::MenuContext;
use gamemenu::host::RecordingHost;
use gamemenu::runner::event_loop_main::run_demo;
use gamemenu::saves::DirSaveStore;

/// Terminal demo of the in-game menus.
#[derive(Debug, Parser)]
#[command(name = "menu_demo", disable_version_flag = true)]
struct Args {
    /// Settings file (defaults to the per-user config directory).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Game mode: shareware, registered, commercial or retail.
    #[arg(long, value_parser = parse_enum::<GameMode>)]
    mode: Option<GameMode>,
    /// Executable version to emulate, e.g. doom1_9, ultimate, final, chex.
    #[arg(long, value_parser = parse_enum::<GameVersion>)]
    version: Option<GameVersion>,
    /// Directory for the log file.
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// Directory holding doomsav<N>.dsg files to list in the load menu.
    #[arg(long)]
    save_dir: Option<PathBuf>,
    /// Start as if a game were running.
    #[arg(long)]
    in_game: bool,
}

fn parse_enum<T: DeserializeOwned>(s: &str) -> Result<T, String> {
    T::deserialize(s.into_deserializer())
        .map_err(|e: serde::de::value::Error| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_dir = match args.log_dir.clone() {
        Some(dir) => dir,
        None => config_dirs::project_config_dir().unwrap_or_else(std::env::temp_dir),
    };
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;
    let appender = tracing_appender::rolling::never(&log_dir, "menu_demo.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gamemenu=debug,menu_demo=debug")),
        )
        .init();

    let mut settings = match &args.config {
        Some(path) => load_settings_from(path)?,
        None => load_settings()?,
    };
    if let Some(mode) = args.mode {
        settings.variant.mode = mode;
    }
    if let Some(version) = args.version {
        settings.variant.version = version;
    }
    info!(variant = %settings.variant, log_dir = %log_dir.display(), "starting menu demo");

    let mut host = if args.in_game {
        RecordingHost::in_game()
    } else {
        RecordingHost::new()
    };
    if let Some(dir) = args.save_dir {
        host = host.with_store(DirSaveStore::new(dir));
    }

    let mut ctx = MenuContext::new(settings);
    run_demo(&mut ctx, host)?;

    // Keep volume and option changes for the next run.
    match &args.config {
        Some(path) => save_settings_to(&ctx.settings, path)?,
        None => save_settings(&ctx.settings)?,
    }
    Ok(())
}
