//! Storage layer (`SQLite` key/value items)

pub mod db;
pub mod items;
pub mod keys;
pub mod memory;
pub mod migrations;

pub use db::{Database, DatabaseError};
pub use items::{ItemStore, KeyValueStore, Scope};
pub use memory::MemoryStore;
