pub mod loader;
pub mod record;

pub use loader::{load_csv, LoadError, LoadReport};
pub use record::{Dataset, QuoteRecord};
