//! Catalog loading
//!
//! Decodes the bulk JSON card file into validated [`Card`](crate::core::Card)
//! records. This is the external-collaborator boundary: everything past it
//! works on an in-memory card list and never touches the file format again.

pub mod loader;

pub use loader::{CatalogError, cards_from_json, load_from_file};
