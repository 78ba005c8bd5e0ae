//! Deadline-bound portrait lookup for a full player profile.

use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::api::fetch_backend_player_image;
use super::candidates::PlayerQuery;
use super::placeholders::team_theme;
use super::resolver::PortraitResolver;

/// A player as listed by the scouting backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerProfile {
    pub id: Option<u64>,
    pub name: String,
    pub team: Option<String>,
    pub nation: Option<String>,
    pub position: Option<String>,
}

impl PlayerProfile {
    pub fn query(&self) -> PlayerQuery {
        PlayerQuery::new(self.name.clone())
            .with_team(self.team.as_deref())
            .with_nation(self.nation.as_deref())
    }
}

/// Finds the best image for `profile` within `deadline`.
///
/// 1. The portrait chain, raced against `deadline`. A real photo wins; a
///    placeholder or a timeout moves on. The chain runs in its own task, so
///    on timeout it keeps going and still caches its result for next time.
/// 2. The scouting backend's image for the player id, when both are known.
/// 3. Club colors for a known team, otherwise position colors.
#[instrument(skip(resolver, profile), fields(name = %profile.name))]
pub async fn resolve_profile_image(
    resolver: &PortraitResolver,
    profile: &PlayerProfile,
    deadline: Duration,
) -> String {
    let chain = resolver.clone();
    let query = profile.query();
    let lookup = tokio::spawn(async move { chain.resolve(&query).await });

    // Dropping the handle on timeout detaches the task rather than cancelling it
    match tokio::time::timeout(deadline, lookup).await {
        Ok(Ok(url)) if !resolver.is_placeholder(&url) => return url,
        Ok(Ok(_)) => debug!("Portrait chain returned a placeholder for '{}'", profile.name),
        Ok(Err(e)) => warn!("Portrait chain task for '{}' failed: {e}", profile.name),
        Err(_) => warn!(
            "Portrait chain for '{}' exceeded {:?}, finishing in the background",
            profile.name, deadline
        ),
    }

    if let (Some(backend), Some(id)) = (resolver.endpoints().backend.as_deref(), profile.id) {
        match fetch_backend_player_image(resolver.client(), backend, id).await {
            Ok(Some(url)) => {
                info!("Using backend image for player {id}");
                return url;
            }
            Ok(None) => debug!("Backend has no image for player {id}"),
            Err(e) => warn!("Backend image lookup failed for player {id}: {e}"),
        }
    }

    themed_placeholder(resolver, profile)
}

/// Club-colored avatar for known teams, else position-colored.
pub fn themed_placeholder(resolver: &PortraitResolver, profile: &PlayerProfile) -> String {
    match profile.team.as_deref() {
        Some(team) if team_theme(team).is_some() => resolver.team_placeholder(&profile.name, team),
        _ => resolver.position_placeholder(
            &profile.name,
            profile.position.as_deref().unwrap_or_default(),
        ),
    }
}
