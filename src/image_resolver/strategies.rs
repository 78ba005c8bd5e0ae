//! Ordered portrait lookup strategies.
//!
//! Each strategy answers `Some(url)` or `None`; network and parse failures are
//! logged and become `None` inside the strategy. [`first_success`] runs them in
//! order and stops at the first URL, so reordering or dropping a source only
//! changes the list passed in.

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::Client;
use tracing::{debug, warn};

use super::api::{
    Endpoints, fetch_entity_image_url, fetch_first_search_title, fetch_page_image,
    fetch_summary_thumbnail, fetch_wikibase_item,
};
use super::candidates::{PlayerQuery, search_queries};
use crate::error::AppError;

/// Everything a strategy may use for one resolution.
pub struct LookupContext<'a> {
    pub client: &'a Client,
    pub endpoints: &'a Endpoints,
    pub query: &'a PlayerQuery,
    /// Candidate titles, computed once and shared by the title-based strategies
    pub titles: &'a [String],
}

/// One way of finding a portrait.
pub trait ImageStrategy: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    fn lookup<'a>(&'a self, ctx: &'a LookupContext<'a>) -> BoxFuture<'a, Option<String>>;
}

/// Turns a lookup result into an optional URL, logging failures.
///
/// 404s and empty bodies are expected for guessed titles and are only logged
/// at debug level.
fn settle(result: Result<Option<String>, AppError>, what: &str) -> Option<String> {
    match result {
        Ok(found) => found,
        Err(e) if e.is_not_found() => {
            debug!("No result for {what}: {e}");
            None
        }
        Err(e) => {
            warn!("Lookup failed for {what}: {e}");
            None
        }
    }
}

/// Summary thumbnail of each candidate title, in order.
#[derive(Debug, Default, Clone, Copy)]
pub struct SummaryStrategy;

impl ImageStrategy for SummaryStrategy {
    fn name(&self) -> &'static str {
        "summary"
    }

    fn lookup<'a>(&'a self, ctx: &'a LookupContext<'a>) -> BoxFuture<'a, Option<String>> {
        async move {
            for title in ctx.titles {
                let result =
                    fetch_summary_thumbnail(ctx.client, &ctx.endpoints.wikipedia, title).await;
                if let Some(url) = settle(result, &format!("summary of '{title}'")) {
                    return Some(url);
                }
            }
            None
        }
        .boxed()
    }
}

/// Full-text search; the top hit's summary thumbnail, else its page image.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchStrategy;

impl SearchStrategy {
    async fn image_for_query(ctx: &LookupContext<'_>, search: &str) -> Option<String> {
        let wikipedia = &ctx.endpoints.wikipedia;
        let title = settle(
            fetch_first_search_title(ctx.client, wikipedia, search).await,
            &format!("search '{search}'"),
        )?;
        debug!("Search '{search}' matched page '{title}'");

        if let Some(url) = settle(
            fetch_summary_thumbnail(ctx.client, wikipedia, &title).await,
            &format!("summary of '{title}'"),
        ) {
            return Some(url);
        }

        settle(
            fetch_page_image(ctx.client, wikipedia, &title).await,
            &format!("page image of '{title}'"),
        )
    }
}

impl ImageStrategy for SearchStrategy {
    fn name(&self) -> &'static str {
        "search"
    }

    fn lookup<'a>(&'a self, ctx: &'a LookupContext<'a>) -> BoxFuture<'a, Option<String>> {
        async move {
            for search in search_queries(ctx.query) {
                if let Some(url) = Self::image_for_query(ctx, &search).await {
                    return Some(url);
                }
            }
            None
        }
        .boxed()
    }
}

/// Image property of the structured-data entity linked from each candidate title.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredDataStrategy;

impl StructuredDataStrategy {
    async fn image_for_title(ctx: &LookupContext<'_>, title: &str) -> Option<String> {
        let entity_id = settle(
            fetch_wikibase_item(ctx.client, &ctx.endpoints.wikipedia, title).await,
            &format!("page props of '{title}'"),
        )?;

        settle(
            fetch_entity_image_url(
                ctx.client,
                &ctx.endpoints.wikidata,
                &ctx.endpoints.commons,
                &entity_id,
            )
            .await,
            &format!("entity {entity_id}"),
        )
    }
}

impl ImageStrategy for StructuredDataStrategy {
    fn name(&self) -> &'static str {
        "structured-data"
    }

    fn lookup<'a>(&'a self, ctx: &'a LookupContext<'a>) -> BoxFuture<'a, Option<String>> {
        async move {
            for title in ctx.titles {
                if let Some(url) = Self::image_for_title(ctx, title).await {
                    return Some(url);
                }
            }
            None
        }
        .boxed()
    }
}

/// The production order: summaries, then search, then structured data.
pub fn default_strategies() -> Vec<Box<dyn ImageStrategy>> {
    vec![
        Box::new(SummaryStrategy),
        Box::new(SearchStrategy),
        Box::new(StructuredDataStrategy),
    ]
}

/// Runs `strategies` in order and returns the first URL found along with the
/// name of the strategy that found it.
pub async fn first_success(
    strategies: &[Box<dyn ImageStrategy>],
    ctx: &LookupContext<'_>,
) -> Option<(&'static str, String)> {
    for strategy in strategies {
        debug!("Trying portrait strategy '{}'", strategy.name());
        if let Some(url) = strategy.lookup(ctx).await {
            return Some((strategy.name(), url));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_resolver::api::http_client::create_test_http_client;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Fixed {
        name: &'static str,
        answer: Option<&'static str>,
        calls: Arc<AtomicUsize>,
    }

    fn fixed(
        name: &'static str,
        answer: Option<&'static str>,
        calls: &Arc<AtomicUsize>,
    ) -> Box<dyn ImageStrategy> {
        Box::new(Fixed {
            name,
            answer,
            calls: calls.clone(),
        })
    }

    impl ImageStrategy for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }

        fn lookup<'a>(&'a self, _ctx: &'a LookupContext<'a>) -> BoxFuture<'a, Option<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let answer = self.answer.map(str::to_string);
            async move { answer }.boxed()
        }
    }

    #[tokio::test]
    async fn test_first_success_stops_at_first_answer() {
        let calls = Arc::new(AtomicUsize::new(0));
        let strategies: Vec<Box<dyn ImageStrategy>> = vec![
            fixed("empty", None, &calls),
            fixed("hit", Some("https://img/a"), &calls),
            fixed("never", Some("https://img/b"), &calls),
        ];

        let client = create_test_http_client();
        let endpoints = Endpoints::default();
        let query = PlayerQuery::new("Jane Doe");
        let ctx = LookupContext {
            client: &client,
            endpoints: &endpoints,
            query: &query,
            titles: &[],
        };

        let found = first_success(&strategies, &ctx).await;
        assert_eq!(found, Some(("hit", "https://img/a".to_string())));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_first_success_all_empty() {
        let calls = Arc::new(AtomicUsize::new(0));
        let strategies: Vec<Box<dyn ImageStrategy>> = vec![
            fixed("a", None, &calls),
            fixed("b", None, &calls),
        ];

        let client = create_test_http_client();
        let endpoints = Endpoints::default();
        let query = PlayerQuery::new("Jane Doe");
        let ctx = LookupContext {
            client: &client,
            endpoints: &endpoints,
            query: &query,
            titles: &[],
        };

        assert_eq!(first_success(&strategies, &ctx).await, None);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_settle() {
        assert_eq!(settle(Ok(Some("u".to_string())), "x"), Some("u".to_string()));
        assert_eq!(settle(Ok(None), "x"), None);
        assert_eq!(settle(Err(AppError::api_not_found("u")), "x"), None);
        assert_eq!(settle(Err(AppError::network_timeout("u")), "x"), None);
    }

    #[test]
    fn test_default_order() {
        let names: Vec<_> = default_strategies().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["summary", "search", "structured-data"]);
    }
}
