pub mod models;
pub mod store;

pub use models::{Item, ItemId, Locale};
pub use store::{ItemStore, StoreError};
