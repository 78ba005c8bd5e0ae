//! Structured-data entity lookups

use reqwest::Client;
use tracing::{debug, instrument};

use super::fetch_utils::fetch_json;
use super::urls::{build_entity_data_url, build_file_path_url};
use crate::error::AppError;
use crate::image_resolver::models::EntityDocument;

/// Fetches the entity document for `entity_id` and returns the media file
/// name held by its image property.
#[instrument(skip(client, wikidata))]
pub async fn fetch_entity_image_filename(
    client: &Client,
    wikidata: &str,
    entity_id: &str,
) -> Result<Option<String>, AppError> {
    let url = build_entity_data_url(wikidata, entity_id);
    let document: EntityDocument = fetch_json(client, &url).await?;
    let filename = document.image_filename(entity_id).map(str::to_string);
    debug!("Image property of {entity_id}: {filename:?}");
    Ok(filename)
}

/// Same as [`fetch_entity_image_filename`] but returns a renderable file URL.
pub async fn fetch_entity_image_url(
    client: &Client,
    wikidata: &str,
    commons: &str,
    entity_id: &str,
) -> Result<Option<String>, AppError> {
    Ok(fetch_entity_image_filename(client, wikidata, entity_id)
        .await?
        .map(|filename| build_file_path_url(commons, &filename)))
}
