//! Key-value stores backing the tenant identity
//!
//! Both stores implement `edgeshield_core::KeyValueStore` and are safe to share
//! across tasks behind an `Arc`.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
