//! Football player portrait resolver
//!
//! Finds a representative photograph for a player by trying, in order, a
//! cached result, encyclopedia page summaries, encyclopedia search, and the
//! linked structured-data entity, and falls back to a generated initials
//! avatar. The public entry point never fails.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use scout_portraits::{Config, PlayerQuery, PortraitResolver};
//! use scout_portraits::image_resolver::cache::MemoryStore;
//! use scout_portraits::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let resolver = PortraitResolver::from_config(&config, Arc::new(MemoryStore::new()))?;
//!
//!     let query = PlayerQuery::new("Mohamed Salah")
//!         .with_team(Some("Liverpool"))
//!         .with_nation(Some("Egypt"));
//!     println!("{}", resolver.resolve(&query).await);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod image_resolver;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use image_resolver::{PlayerProfile, PlayerQuery, PortraitResolver, resolve_profile_image};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
