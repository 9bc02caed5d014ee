//! Session store adapters.
//!
//! - `RedisSessionStore` - production store, JSON records with TTL
//! - `InMemorySessionStore` - process-local store for tests/development

mod memory;
mod redis_store;

pub use memory::InMemorySessionStore;
pub use redis_store::RedisSessionStore;
