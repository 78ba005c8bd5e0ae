use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Football player portrait finder
///
/// Looks up a photograph for a player on Wikipedia and Wikidata and prints
/// its URL. Results are cached on disk for 30 days. When nothing is found an
/// initials avatar URL is printed instead.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Player name, e.g. "Mohamed Salah"
    #[arg(required_unless_present_any = ["list_config", "clear_cache", "version", "new_backend_url", "clear_backend_url"])]
    pub name: Option<String>,

    /// Club the player belongs to; used to disambiguate encyclopedia titles
    #[arg(short = 't', long = "team", help_heading = "Lookup")]
    pub team: Option<String>,

    /// Player nationality; used to disambiguate encyclopedia titles
    #[arg(short = 'n', long = "nation", help_heading = "Lookup")]
    pub nation: Option<String>,

    /// Playing position; themes the placeholder when no photo is found
    #[arg(short = 'p', long = "position", help_heading = "Lookup")]
    pub position: Option<String>,

    /// Player id on the scouting backend. Enables the backend image fallback
    /// and applies the lookup deadline.
    #[arg(long = "player-id", help_heading = "Lookup")]
    pub player_id: Option<u64>,

    /// Print the team and position placeholders without any network access
    #[arg(long = "placeholder-only", help_heading = "Lookup")]
    pub placeholder_only: bool,

    /// Do not read or write the on-disk cache for this lookup
    #[arg(long = "no-cache", help_heading = "Lookup")]
    pub no_cache: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Save the scouting backend base URL to the config file
    #[arg(long = "set-backend", value_name = "URL", help_heading = "Configuration")]
    pub new_backend_url: Option<String>,

    /// Remove the scouting backend base URL from the config file
    #[arg(long = "clear-backend", help_heading = "Configuration")]
    pub clear_backend_url: bool,

    /// Delete every cached portrait
    #[arg(long = "clear-cache", help_heading = "Configuration")]
    pub clear_cache: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Also write logs to the terminal
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Whether the invocation only manages configuration or cache state
    pub fn is_maintenance(&self) -> bool {
        self.list_config
            || self.clear_cache
            || self.version
            || self.new_backend_url.is_some()
            || self.clear_backend_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lookup() {
        let args = Args::try_parse_from([
            "scout_portraits",
            "Jane Doe",
            "--team",
            "Arsenal",
            "-n",
            "Wales",
            "--position",
            "Goalkeeper",
        ])
        .unwrap();
        assert_eq!(args.name.as_deref(), Some("Jane Doe"));
        assert_eq!(args.team.as_deref(), Some("Arsenal"));
        assert_eq!(args.nation.as_deref(), Some("Wales"));
        assert_eq!(args.position.as_deref(), Some("Goalkeeper"));
        assert!(!args.is_maintenance());
    }

    #[test]
    fn test_name_required_for_lookup() {
        assert!(Args::try_parse_from(["scout_portraits", "--team", "Arsenal"]).is_err());
    }

    #[test]
    fn test_maintenance_without_name() {
        let args = Args::try_parse_from(["scout_portraits", "--clear-cache"]).unwrap();
        assert!(args.name.is_none());
        assert!(args.is_maintenance());

        let args =
            Args::try_parse_from(["scout_portraits", "--set-backend", "http://localhost:8000"])
                .unwrap();
        assert_eq!(args.new_backend_url.as_deref(), Some("http://localhost:8000"));
    }

    #[test]
    fn test_player_id() {
        let args =
            Args::try_parse_from(["scout_portraits", "Jane Doe", "--player-id", "42"]).unwrap();
        assert_eq!(args.player_id, Some(42));
    }
}
