//! ddbcache_core - functional core for the ddbcache key-value adapter.
//!
//! Everything in this crate is pure: logical values, the typed-attribute
//! codec, key normalization and the traits the imperative shell implements.
//! No AWS SDK types and no I/O live here.

pub mod attribute;
pub mod cache;
pub mod storage;
pub mod value;
