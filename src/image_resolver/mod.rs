//! Player portrait resolution: cache, ordered lookups and placeholders.

pub mod api;
pub mod cache;
pub mod candidates;
pub mod models;
pub mod placeholders;
pub mod profile;
pub mod resolver;
pub mod strategies;

pub use candidates::{PlayerQuery, candidate_titles, search_queries};
pub use profile::{PlayerProfile, resolve_profile_image, themed_placeholder};
pub use resolver::PortraitResolver;
pub use strategies::{
    ImageStrategy, LookupContext, SearchStrategy, StructuredDataStrategy, SummaryStrategy,
    default_strategies, first_success,
};
