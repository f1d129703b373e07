//! Kotoba: In-Memory Anime Quotes API Server
//!
//! Serves a fixed, pre-loaded dataset of anime quotes through a small
//! read-only query API.
//!
//! # Features
//!
//! - **Random quote**: uniform draw over the dataset, with replacement
//! - **Substring filters**: case-insensitive matching on anime or character
//! - **Enumeration**: distinct anime names in first-occurrence order
//! - **Aggregates**: total quote and unique anime counts
//!
//! The dataset is loaded once at startup and never mutated afterwards, so
//! concurrent queries need no locking. A reload swaps in a whole new
//! dataset atomically.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use kotoba::data::{Dataset, QuoteRecord};
//! use kotoba::query::QueryEngine;
//! use kotoba::store::QuoteStore;
//!
//! let dataset = Dataset::new(vec![QuoteRecord {
//!     quote: "Believe it!".to_string(),
//!     character: "Naruto".to_string(),
//!     anime: "Naruto".to_string(),
//! }]);
//!
//! let engine = QueryEngine::new(Arc::new(QuoteStore::new(dataset)));
//! let quote = engine.random_quote().unwrap();
//! println!("{} - {}", quote.quote, quote.character);
//! ```

pub mod api;
pub mod data;
pub mod query;
pub mod store;

// Re-export commonly used types
pub use data::{load_csv, Dataset, LoadError, LoadReport, QuoteRecord};
pub use query::{QueryEngine, QueryError};
pub use store::QuoteStore;
