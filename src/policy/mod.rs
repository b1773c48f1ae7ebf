//! Eviction policies over the `ds` primitives.
//!
//! Only recency ordering is provided: [`lru::OrderedCache`] evicts the least
//! recently used entry once its fixed capacity is reached.

pub mod lru;
