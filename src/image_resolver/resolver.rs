//! The portrait resolution chain

use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::api::{Endpoints, create_http_client_with_timeout};
use super::cache::{PortraitCache, PortraitStore};
use super::candidates::{PlayerQuery, candidate_titles};
use super::placeholders;
use super::strategies::{ImageStrategy, LookupContext, default_strategies, first_success};
use crate::config::Config;
use crate::error::AppError;

/// Resolves a portrait URL for a player.
///
/// Order: fresh cache entry, the strategy list (summaries, search, structured
/// data by default), and finally a neutral initials avatar. Whatever is
/// produced after a cache miss is written back to the cache.
///
/// Clones share the HTTP connection pool, the cache store and the strategy
/// list, so a clone can be moved into a spawned task.
#[derive(Clone)]
pub struct PortraitResolver {
    client: Client,
    endpoints: Endpoints,
    cache: PortraitCache,
    strategies: Arc<Vec<Box<dyn ImageStrategy>>>,
}

impl std::fmt::Debug for PortraitResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortraitResolver")
            .field("endpoints", &self.endpoints)
            .field("cache", &self.cache)
            .field(
                "strategies",
                &self.strategies.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl PortraitResolver {
    pub fn new(client: Client, endpoints: Endpoints, cache: PortraitCache) -> Self {
        Self {
            client,
            endpoints,
            cache,
            strategies: Arc::new(default_strategies()),
        }
    }

    /// Builds a resolver from configuration around the given store.
    pub fn from_config(config: &Config, store: Arc<dyn PortraitStore>) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(
            client,
            Endpoints::from_config(config),
            PortraitCache::new(store, config.cache_ttl()),
        ))
    }

    /// Replaces the lookup strategies, keeping cache and placeholder handling.
    pub fn with_strategies(mut self, strategies: Vec<Box<dyn ImageStrategy>>) -> Self {
        self.strategies = Arc::new(strategies);
        self
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn cache(&self) -> &PortraitCache {
        &self.cache
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Returns a portrait URL for `query`. Never fails.
    ///
    /// A blank name skips every lookup and the cache and yields a neutral
    /// placeholder.
    #[instrument(skip(self, query), fields(name = %query.name))]
    pub async fn resolve(&self, query: &PlayerQuery) -> String {
        if !query.has_name() {
            debug!("Blank player name, returning placeholder without lookups");
            return placeholders::default_placeholder(&self.endpoints.avatar, "?");
        }

        if let Some(url) = self.cache.lookup(&query.name).await {
            return url;
        }

        let url = self.lookup_uncached(query).await;
        self.cache.remember(&query.name, &url).await;
        url
    }

    /// Runs the strategies and the placeholder fallback without touching the cache.
    pub async fn lookup_uncached(&self, query: &PlayerQuery) -> String {
        let titles = candidate_titles(query);
        let ctx = LookupContext {
            client: &self.client,
            endpoints: &self.endpoints,
            query,
            titles: &titles,
        };

        match first_success(&self.strategies, &ctx).await {
            Some((strategy, url)) => {
                info!(
                    "Resolved portrait for '{}' via {}: {}",
                    query.trimmed_name(),
                    strategy,
                    url
                );
                url
            }
            None => {
                info!(
                    "No portrait found for '{}', using placeholder",
                    query.trimmed_name()
                );
                self.default_placeholder(query.trimmed_name())
            }
        }
    }

    /// Neutral avatar for `name` on the configured avatar service
    pub fn default_placeholder(&self, name: &str) -> String {
        placeholders::default_placeholder(&self.endpoints.avatar, name)
    }

    /// Position-themed avatar on the configured avatar service
    pub fn position_placeholder(&self, name: &str, position: &str) -> String {
        placeholders::position_placeholder(&self.endpoints.avatar, name, position)
    }

    /// Club-themed avatar on the configured avatar service
    pub fn team_placeholder(&self, name: &str, team: &str) -> String {
        placeholders::team_placeholder(&self.endpoints.avatar, name, team)
    }

    /// Whether `url` came from the configured avatar service
    pub fn is_placeholder(&self, url: &str) -> bool {
        placeholders::is_placeholder_url(&self.endpoints.avatar, url)
    }
}
