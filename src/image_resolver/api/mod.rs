pub mod backend;
pub mod fetch_utils;
pub mod http_client;
pub mod urls;
pub mod wikidata;
pub mod wikipedia;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export lookups
pub use backend::fetch_backend_player_image;
pub use fetch_utils::fetch_json;
pub use wikidata::{fetch_entity_image_filename, fetch_entity_image_url};
pub use wikipedia::{
    fetch_first_search_title, fetch_page_image, fetch_summary_thumbnail, fetch_wikibase_item,
};
