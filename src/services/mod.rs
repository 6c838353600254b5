// Service exports
pub mod catalog;
pub mod session;

pub use catalog::{ProfileCatalog, Dataset, CatalogError};
pub use session::{SessionStore, SessionContext};
