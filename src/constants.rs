//! Application-wide constants and configuration values
//!
//! This module centralizes the tuning values of the portrait lookup so they can
//! be revisited in one place. The TTL and the candidate title suffixes are
//! heuristics carried over from the dashboard; neither is known to be optimal.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 32;

/// User agent sent to the Wikimedia APIs, which reject anonymous clients
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Portrait cache settings
pub mod cache {
    /// Entries older than this many days are treated as absent
    pub const DEFAULT_TTL_DAYS: u64 = 30;

    /// Milliseconds in one day, used to compare Unix millisecond timestamps
    pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

    /// Prefix of every cache key; the rest of the key is the lower-cased name
    pub const KEY_PREFIX: &str = "player_img_";

    /// Capacity of the in-memory store
    pub const MEMORY_CAPACITY: usize = 512;

    /// File name of the on-disk store inside the config directory
    pub const FILE_NAME: &str = "image_cache.json";
}

/// Default base URLs of the external services
pub mod endpoints {
    pub const WIKIPEDIA: &str = "https://en.wikipedia.org";
    pub const WIKIDATA: &str = "https://www.wikidata.org";
    pub const COMMONS: &str = "https://commons.wikimedia.org";
    pub const AVATAR: &str = "https://ui-avatars.com";
}

/// Thumbnail and avatar dimensions
pub mod images {
    /// Width requested from page images and the commons file path
    pub const THUMBNAIL_WIDTH: u32 = 600;

    /// Edge length of generated avatars
    pub const AVATAR_SIZE: u32 = 400;
}

/// Avatar color themes as (background, text) hex pairs without the leading '#'
pub mod themes {
    pub const NEUTRAL: (&str, &str) = ("1e293b", "60a5fa");
    pub const GOALKEEPER: (&str, &str) = ("dc2626", "ffffff");
    pub const DEFENDER: (&str, &str) = ("2563eb", "ffffff");
    pub const MIDFIELDER: (&str, &str) = ("16a34a", "ffffff");
    pub const FORWARD: (&str, &str) = ("f59e0b", "000000");
}

/// Suffixes appended to a player's name to guess encyclopedia titles
pub mod candidates {
    /// Appended to the trimmed name for every lookup, in priority order
    pub const NAME_SUFFIXES: [&str; 4] = ["", " (footballer)", " (soccer)", " footballer"];
}

/// Deadline applied when resolving a full player profile
pub const DEFAULT_LOOKUP_DEADLINE_MS: u64 = 3000;

/// Environment variable names
pub mod env_vars {
    /// Override for the encyclopedia base URL
    pub const WIKIPEDIA_URL: &str = "SCOUT_PORTRAITS_WIKIPEDIA_URL";

    /// Override for the scouting backend base URL
    pub const BACKEND_URL: &str = "SCOUT_PORTRAITS_BACKEND_URL";

    /// Override for the log file path
    pub const LOG_FILE: &str = "SCOUT_PORTRAITS_LOG_FILE";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "SCOUT_PORTRAITS_HTTP_TIMEOUT";

    /// Override for the cache TTL in days
    pub const CACHE_TTL_DAYS: &str = "SCOUT_PORTRAITS_CACHE_TTL_DAYS";
}
