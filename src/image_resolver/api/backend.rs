//! Scouting backend image endpoint

use reqwest::Client;
use tracing::instrument;

use super::fetch_utils::fetch_json;
use super::urls::build_backend_image_url;
use crate::error::AppError;
use crate::image_resolver::models::BackendImageResponse;

/// Asks the scouting backend for a player's image by id.
#[instrument(skip(client, backend))]
pub async fn fetch_backend_player_image(
    client: &Client,
    backend: &str,
    player_id: u64,
) -> Result<Option<String>, AppError> {
    let url = build_backend_image_url(backend, player_id);
    let response: BackendImageResponse = fetch_json(client, &url).await?;
    Ok(response.image_url.filter(|url| !url.is_empty()))
}
