/// ubeat catalog API client
pub mod catalog;
/// Artist identifiers, records and catalog responses
pub mod entities;
/// Error types and result aliases
pub mod errors;

pub use catalog::CatalogClient;
pub use entities::{ArtistId, ArtistLookup, ArtistRecord};
