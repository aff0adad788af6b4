// Service exports
pub mod loader;

pub use loader::{load_store, parse_universities, DatasetError};
