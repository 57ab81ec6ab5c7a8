//! Card system: definitions, the catalog interface and its registry.
//!
//! ## Key Types
//!
//! - `CardId`: String identifier shared by every copy of a card
//! - `CardCategory`: Base, Modifier or Null
//! - `Card`: Static catalog entry (cost, text, details)
//! - `CardCatalog`: Read-only lookup trait consumed by the engine
//! - `CardRegistry`: In-memory catalog implementation

pub mod catalog;
pub mod definition;
pub mod registry;

pub use catalog::{CardCatalog, CatalogError};
pub use definition::{Card, CardCategory, CardId};
pub use registry::{CardRegistry, CatalogData};
