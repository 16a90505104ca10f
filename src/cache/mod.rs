//! In-memory caches for upstream API responses
//!
//! This module provides a timed cache that keeps cloned values in memory with
//! a fixed TTL (time-to-live) per cache instance. Expired entries are evicted
//! lazily when they are next read. Every cached value remembers when it was
//! stored, so handlers can report cache age to clients.

mod timed;

pub use timed::{CachedValue, TimedCache};
