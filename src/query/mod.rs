pub mod engine;

pub use engine::{AnimeQuote, CharacterQuote, DatasetStats, QueryEngine};

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("dataset is empty")]
    EmptyDataset,
}
