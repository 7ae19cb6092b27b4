//! Caching infrastructure for the catalog.
//!
//! Entries are grouped into namespaces (a Redis hash each) and never expire.
//! Nothing here evicts or invalidates; the latest write for a key wins.

mod cache_store;
pub mod cache_keys;
mod memory_cache;
mod redis_cache;

pub use cache_store::{CacheStore, CacheStoreExt};
pub use memory_cache::{InMemoryCacheStore, InMemoryCacheStoreParameters};
pub use redis_cache::{create_pool, RedisCacheStore, RedisCacheStoreParameters};
