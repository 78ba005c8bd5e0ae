//! Response shapes of the external services.
//!
//! Every field the resolver reads is optional or defaulted: a response that
//! parses but lacks the field is a normal "nothing here" answer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Thumbnail {
    pub source: String,
}

/// Page summary returned by the REST summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PageSummary {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchHit {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

/// `action=query&list=search` response.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: Option<SearchQuery>,
}

impl SearchResponse {
    /// Title of the top-ranked hit, if any
    pub fn first_title(&self) -> Option<&str> {
        self.query
            .as_ref()
            .and_then(|q| q.search.first())
            .map(|hit| hit.title.as_str())
            .filter(|title| !title.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PageProps {
    #[serde(default)]
    pub wikibase_item: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PageInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default)]
    pub pageprops: Option<PageProps>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PagesQuery {
    #[serde(default)]
    pub pages: HashMap<String, PageInfo>,
}

/// `action=query&titles=...` response, used for both page images and page props.
/// The pages map is keyed by page id; a single title yields a single entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PagesResponse {
    #[serde(default)]
    pub query: Option<PagesQuery>,
}

impl PagesResponse {
    fn first_page(&self) -> Option<&PageInfo> {
        self.query.as_ref().and_then(|q| q.pages.values().next())
    }

    pub fn thumbnail_source(&self) -> Option<&str> {
        self.first_page()
            .and_then(|page| page.thumbnail.as_ref())
            .map(|thumb| thumb.source.as_str())
            .filter(|source| !source.is_empty())
    }

    pub fn wikibase_item(&self) -> Option<&str> {
        self.first_page()
            .and_then(|page| page.pageprops.as_ref())
            .and_then(|props| props.wikibase_item.as_deref())
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataValue {
    #[serde(default)]
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Snak {
    #[serde(default)]
    pub datavalue: Option<DataValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Claim {
    #[serde(default)]
    pub mainsnak: Snak,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Entity {
    #[serde(default)]
    pub claims: HashMap<String, Vec<Claim>>,
}

/// Structured-data entity document, keyed by entity id.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EntityDocument {
    #[serde(default)]
    pub entities: HashMap<String, Entity>,
}

/// Property holding an entity's canonical image
pub const IMAGE_PROPERTY: &str = "P18";

impl EntityDocument {
    /// Media file name of the first image claim of `entity_id`
    pub fn image_filename(&self, entity_id: &str) -> Option<&str> {
        self.entities
            .get(entity_id)
            .and_then(|entity| entity.claims.get(IMAGE_PROPERTY))
            .and_then(|claims| claims.first())
            .and_then(|claim| claim.mainsnak.datavalue.as_ref())
            .and_then(|data| data.value.as_str())
            .filter(|name| !name.is_empty())
    }
}

/// Scouting backend reply for a player's image.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BackendImageResponse {
    #[serde(default)]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_without_thumbnail() {
        let summary: PageSummary =
            serde_json::from_str(r#"{"title": "Jane Doe", "extract": "..."}"#).unwrap();
        assert!(summary.thumbnail.is_none());
    }

    #[test]
    fn test_search_first_title() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"query": {"search": [{"title": "Jane Doe (footballer)", "size": 10}, {"title": "Other"}]}}"#,
        )
        .unwrap();
        assert_eq!(response.first_title(), Some("Jane Doe (footballer)"));

        let empty: SearchResponse = serde_json::from_str(r#"{"query": {"search": []}}"#).unwrap();
        assert_eq!(empty.first_title(), None);

        let batch: SearchResponse = serde_json::from_str(r#"{"batchcomplete": ""}"#).unwrap();
        assert_eq!(batch.first_title(), None);
    }

    #[test]
    fn test_pages_response_accessors() {
        let response: PagesResponse = serde_json::from_str(
            r#"{"query": {"pages": {"123": {
                "title": "Jane Doe",
                "thumbnail": {"source": "https://upload.example/jane.jpg", "width": 600},
                "pageprops": {"wikibase_item": "Q42"}
            }}}}"#,
        )
        .unwrap();
        assert_eq!(
            response.thumbnail_source(),
            Some("https://upload.example/jane.jpg")
        );
        assert_eq!(response.wikibase_item(), Some("Q42"));

        let missing: PagesResponse = serde_json::from_str(
            r#"{"query": {"pages": {"-1": {"title": "Nobody", "missing": ""}}}}"#,
        )
        .unwrap();
        assert_eq!(missing.thumbnail_source(), None);
        assert_eq!(missing.wikibase_item(), None);
    }

    #[test]
    fn test_entity_image_filename() {
        let document: EntityDocument = serde_json::from_str(
            r#"{"entities": {"Q42": {"claims": {
                "P18": [{"mainsnak": {"datavalue": {"value": "Jane Doe 2019.jpg", "type": "string"}}}],
                "P569": [{"mainsnak": {"datavalue": {"value": {"time": "+1990-01-01"}}}}]
            }}}}"#,
        )
        .unwrap();
        assert_eq!(document.image_filename("Q42"), Some("Jane Doe 2019.jpg"));
        assert_eq!(document.image_filename("Q1"), None);
    }

    #[test]
    fn test_entity_without_image_claim() {
        let document: EntityDocument =
            serde_json::from_str(r#"{"entities": {"Q42": {"claims": {}}}}"#).unwrap();
        assert_eq!(document.image_filename("Q42"), None);
    }
}
