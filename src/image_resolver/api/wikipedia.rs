//! Encyclopedia lookups: page summaries, full-text search, page images and page props

use reqwest::Client;
use tracing::{debug, instrument};

use super::fetch_utils::fetch_json;
use super::urls::{build_page_images_url, build_page_props_url, build_search_url, build_summary_url};
use crate::error::AppError;
use crate::image_resolver::models::{PageSummary, PagesResponse, SearchResponse};

/// Fetches the summary of `title` and returns its thumbnail URL, if it has one.
#[instrument(skip(client, wikipedia))]
pub async fn fetch_summary_thumbnail(
    client: &Client,
    wikipedia: &str,
    title: &str,
) -> Result<Option<String>, AppError> {
    let url = build_summary_url(wikipedia, title);
    let summary: PageSummary = fetch_json(client, &url).await?;
    let thumbnail = summary
        .thumbnail
        .map(|thumb| thumb.source)
        .filter(|source| !source.is_empty());
    debug!("Summary thumbnail for '{title}': {thumbnail:?}");
    Ok(thumbnail)
}

/// Runs a full-text search and returns the title of the top hit.
#[instrument(skip(client, wikipedia))]
pub async fn fetch_first_search_title(
    client: &Client,
    wikipedia: &str,
    query: &str,
) -> Result<Option<String>, AppError> {
    let url = build_search_url(wikipedia, query);
    let response: SearchResponse = fetch_json(client, &url).await?;
    Ok(response.first_title().map(str::to_string))
}

/// Fetches the page-images thumbnail of `title`.
#[instrument(skip(client, wikipedia))]
pub async fn fetch_page_image(
    client: &Client,
    wikipedia: &str,
    title: &str,
) -> Result<Option<String>, AppError> {
    let url = build_page_images_url(wikipedia, title);
    let response: PagesResponse = fetch_json(client, &url).await?;
    Ok(response.thumbnail_source().map(str::to_string))
}

/// Resolves `title` to the identifier of its linked structured-data entity.
#[instrument(skip(client, wikipedia))]
pub async fn fetch_wikibase_item(
    client: &Client,
    wikipedia: &str,
    title: &str,
) -> Result<Option<String>, AppError> {
    let url = build_page_props_url(wikipedia, title);
    let response: PagesResponse = fetch_json(client, &url).await?;
    Ok(response.wikibase_item().map(str::to_string))
}
