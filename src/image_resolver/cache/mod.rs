pub mod file_store;
pub mod memory_store;
pub mod portrait_cache;
pub mod store;
pub mod types;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use portrait_cache::{PortraitCache, cache_key};
pub use store::PortraitStore;
pub use types::{CacheEntry, now_millis};
