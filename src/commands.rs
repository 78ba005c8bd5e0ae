use crate::cli::Args;
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use scout_portraits::config::Config;
use scout_portraits::error::AppError;
use scout_portraits::image_resolver::cache::{FileStore, MemoryStore, PortraitStore};
use scout_portraits::image_resolver::placeholders::{position_placeholder, team_placeholder};
use scout_portraits::{PlayerProfile, PlayerQuery, PortraitResolver, resolve_profile_image};
use std::io::stdout;
use std::sync::Arc;
use tracing::info;

fn print_line(label: &str, value: &str, color: Color) -> Result<(), AppError> {
    execute!(
        stdout(),
        SetForegroundColor(Color::Cyan),
        Print(format!("{label:<14}")),
        SetForegroundColor(color),
        Print(value),
        ResetColor,
        Print("\n"),
    )?;
    Ok(())
}

/// Handles the --version command.
pub fn handle_version_command() -> Result<(), AppError> {
    print_line("Version:", env!("CARGO_PKG_VERSION"), Color::White)?;
    print_line("Package:", env!("CARGO_PKG_NAME"), Color::White)?;
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles --set-backend and --clear-backend.
///
/// Starts from the saved file when there is one so other settings survive.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    if let Some(backend_url) = &args.new_backend_url {
        config.backend_url = Some(backend_url.clone());
    } else if args.clear_backend_url {
        config.backend_url = None;
        println!("Scouting backend URL cleared.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Handles the --clear-cache command.
pub async fn handle_clear_cache_command(config: &Config) -> Result<(), AppError> {
    let path = config.resolved_cache_file_path();
    let store = FileStore::open(&path).await;
    let removed = store.len().await;
    store.clear().await?;
    print_line(
        "Cleared:",
        &format!("{removed} cached portraits ({path})"),
        Color::Green,
    )
}

/// Handles a portrait lookup for the player named on the command line.
pub async fn handle_lookup_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let name = args
        .name
        .as_deref()
        .ok_or_else(|| AppError::config_error("A player name is required"))?;

    let store: Arc<dyn PortraitStore> = if args.no_cache {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(FileStore::open(config.resolved_cache_file_path()).await)
    };
    let resolver = PortraitResolver::from_config(config, store)?;

    if args.placeholder_only {
        let avatar = &resolver.endpoints().avatar;
        if let Some(team) = &args.team {
            print_line("Team:", &team_placeholder(avatar, name, team), Color::Yellow)?;
        }
        let position = args.position.as_deref().unwrap_or_default();
        print_line(
            "Position:",
            &position_placeholder(avatar, name, position),
            Color::Yellow,
        )?;
        return Ok(());
    }

    let url = if args.player_id.is_some() {
        let profile = PlayerProfile {
            id: args.player_id,
            name: name.to_string(),
            team: args.team.clone(),
            nation: args.nation.clone(),
            position: args.position.clone(),
        };
        resolve_profile_image(&resolver, &profile, config.lookup_deadline()).await
    } else {
        let query = PlayerQuery::new(name)
            .with_team(args.team.as_deref())
            .with_nation(args.nation.as_deref());
        resolver.resolve(&query).await
    };

    info!("Lookup for '{name}' finished: {url}");

    if resolver.is_placeholder(&url) {
        print_line("Placeholder:", &url, Color::Yellow)
    } else {
        print_line("Portrait:", &url, Color::Green)
    }
}
