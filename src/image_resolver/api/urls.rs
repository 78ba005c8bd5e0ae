//! URL building utilities for the encyclopedia, structured-data, media and avatar services

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::Config;
use crate::constants::{endpoints, images};

/// Characters escaped when a value is placed in a path segment or query value.
/// Leaves `A-Z a-z 0-9 - _ . ! ~ * ' ( )` untouched, matching what browsers do
/// for `encodeURIComponent`, so generated URLs are the ones the services expect.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Base URLs of every service the resolver talks to.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub wikipedia: String,
    pub wikidata: String,
    pub commons: String,
    pub avatar: String,
    pub backend: Option<String>,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            wikipedia: endpoints::WIKIPEDIA.to_string(),
            wikidata: endpoints::WIKIDATA.to_string(),
            commons: endpoints::COMMONS.to_string(),
            avatar: endpoints::AVATAR.to_string(),
            backend: None,
        }
    }
}

impl Endpoints {
    /// Takes the base URLs from the configuration, dropping trailing slashes.
    pub fn from_config(config: &Config) -> Self {
        Self {
            wikipedia: trim_base(&config.wikipedia_url),
            wikidata: trim_base(&config.wikidata_url),
            commons: trim_base(&config.commons_url),
            avatar: trim_base(&config.avatar_url),
            backend: config.backend_url.as_deref().map(trim_base),
        }
    }

    /// Points every service at the same base URL, which is how tests wire a
    /// single mock server.
    pub fn single_host(base: &str) -> Self {
        let base = trim_base(base);
        Self {
            wikipedia: base.clone(),
            wikidata: base.clone(),
            commons: base.clone(),
            avatar: base.clone(),
            backend: Some(base),
        }
    }
}

fn trim_base(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}

/// Percent-encodes a single URL component.
///
/// # Example
/// ```
/// use scout_portraits::image_resolver::api::encode_component;
///
/// assert_eq!(encode_component("Jane Doe (footballer)"), "Jane%20Doe%20(footballer)");
/// assert_eq!(encode_component("Mbappé"), "Mbapp%C3%A9");
/// ```
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Builds the page summary URL for a title, following redirects.
///
/// # Example
/// ```
/// use scout_portraits::image_resolver::api::build_summary_url;
///
/// let url = build_summary_url("https://en.wikipedia.org", "Jane Doe");
/// assert_eq!(url, "https://en.wikipedia.org/api/rest_v1/page/summary/Jane%20Doe?redirect=true");
/// ```
pub fn build_summary_url(wikipedia: &str, title: &str) -> String {
    format!(
        "{wikipedia}/api/rest_v1/page/summary/{}?redirect=true",
        encode_component(title)
    )
}

/// Builds the full-text search URL for a query.
pub fn build_search_url(wikipedia: &str, query: &str) -> String {
    format!(
        "{wikipedia}/w/api.php?action=query&list=search&srsearch={}&format=json&origin=*",
        encode_component(query)
    )
}

/// Builds the page images URL for a title.
pub fn build_page_images_url(wikipedia: &str, title: &str) -> String {
    format!(
        "{wikipedia}/w/api.php?action=query&titles={}&prop=pageimages&pithumbsize={}&format=json&origin=*",
        encode_component(title),
        images::THUMBNAIL_WIDTH
    )
}

/// Builds the page props URL for a title, used to find its structured-data entity.
pub fn build_page_props_url(wikipedia: &str, title: &str) -> String {
    format!(
        "{wikipedia}/w/api.php?action=query&titles={}&prop=pageprops&format=json&origin=*",
        encode_component(title)
    )
}

/// Builds the entity document URL for a structured-data identifier.
///
/// # Example
/// ```
/// use scout_portraits::image_resolver::api::build_entity_data_url;
///
/// let url = build_entity_data_url("https://www.wikidata.org", "Q1354");
/// assert_eq!(url, "https://www.wikidata.org/wiki/Special:EntityData/Q1354.json");
/// ```
pub fn build_entity_data_url(wikidata: &str, entity_id: &str) -> String {
    format!(
        "{wikidata}/wiki/Special:EntityData/{}.json",
        encode_component(entity_id)
    )
}

/// Builds a directly renderable URL for a media file name.
///
/// # Example
/// ```
/// use scout_portraits::image_resolver::api::build_file_path_url;
///
/// let url = build_file_path_url("https://commons.wikimedia.org", "Jane Doe 2019.jpg");
/// assert_eq!(
///     url,
///     "https://commons.wikimedia.org/wiki/Special:FilePath/Jane%20Doe%202019.jpg?width=600"
/// );
/// ```
pub fn build_file_path_url(commons: &str, filename: &str) -> String {
    format!(
        "{commons}/wiki/Special:FilePath/{}?width={}",
        encode_component(filename),
        images::THUMBNAIL_WIDTH
    )
}

/// Builds an initials avatar URL with the given (background, text) colors.
///
/// # Example
/// ```
/// use scout_portraits::image_resolver::api::build_avatar_url;
///
/// let url = build_avatar_url("https://ui-avatars.com", "Jane Doe", ("1e293b", "60a5fa"));
/// assert_eq!(
///     url,
///     "https://ui-avatars.com/api/?name=Jane%20Doe&size=400&background=1e293b&color=60a5fa&bold=true&format=png&font-size=0.5"
/// );
/// ```
pub fn build_avatar_url(avatar: &str, name: &str, theme: (&str, &str)) -> String {
    let (background, color) = theme;
    format!(
        "{avatar}/api/?name={}&size={}&background={background}&color={color}&bold=true&format=png&font-size=0.5",
        encode_component(name),
        images::AVATAR_SIZE
    )
}

/// Builds the scouting backend's per-player image URL.
pub fn build_backend_image_url(backend: &str, player_id: u64) -> String {
    format!("{backend}/api/players/{player_id}/player_image/")
}
