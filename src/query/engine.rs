use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use serde::Serialize;

use super::QueryError;
use crate::data::{Dataset, QuoteRecord};
use crate::store::QuoteStore;

/// Projection returned when filtering by anime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimeQuote {
    pub quote: String,
    pub character: String,
}

/// Projection returned when filtering by character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterQuote {
    pub quote: String,
    pub anime: String,
}

/// Aggregate counts over the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub total_quotes: usize,
    pub total_unique_animes: usize,
}

/// Answers queries against the quote store without ever mutating it.
///
/// Every operation takes a single snapshot of the dataset up front and
/// reads only that snapshot, so results stay consistent even if the store
/// is reloaded mid-query.
pub struct QueryEngine {
    store: Arc<QuoteStore>,
}

impl QueryEngine {
    pub fn new(store: Arc<QuoteStore>) -> Self {
        Self { store }
    }

    /// Uniform random draw over the dataset, sampling with replacement.
    ///
    /// Uses the thread-local generator, so concurrent requests never share
    /// RNG state.
    pub fn random_quote(&self) -> Result<QuoteRecord, QueryError> {
        self.random_quote_with(&mut rand::thread_rng())
    }

    /// Same as [`random_quote`](Self::random_quote) but with a caller-owned
    /// generator, which makes the draw deterministic under a seeded rng.
    pub fn random_quote_with<R: Rng>(&self, rng: &mut R) -> Result<QuoteRecord, QueryError> {
        let snapshot = self.store.snapshot();
        if snapshot.is_empty() {
            return Err(QueryError::EmptyDataset);
        }
        let index = rng.gen_range(0..snapshot.len());
        Ok(snapshot.records()[index].clone())
    }

    /// Every record whose anime name contains `anime` ignoring ASCII case,
    /// in dataset order. An empty needle matches nothing; no match yields
    /// an empty vec, not an error.
    pub fn quotes_by_anime(&self, anime: &str) -> Vec<AnimeQuote> {
        if anime.is_empty() {
            return Vec::new();
        }
        let needle = anime.to_ascii_lowercase();
        self.store
            .snapshot()
            .records()
            .iter()
            .filter(|r| r.anime.to_ascii_lowercase().contains(&needle))
            .map(|r| AnimeQuote {
                quote: r.quote.clone(),
                character: r.character.clone(),
            })
            .collect()
    }

    /// Every record whose character name contains `character` ignoring
    /// ASCII case, in dataset order.
    pub fn quotes_by_character(&self, character: &str) -> Vec<CharacterQuote> {
        if character.is_empty() {
            return Vec::new();
        }
        let needle = character.to_ascii_lowercase();
        self.store
            .snapshot()
            .records()
            .iter()
            .filter(|r| r.character.to_ascii_lowercase().contains(&needle))
            .map(|r| CharacterQuote {
                quote: r.quote.clone(),
                anime: r.anime.clone(),
            })
            .collect()
    }

    /// Distinct anime names in order of first occurrence.
    pub fn unique_animes(&self) -> Vec<String> {
        distinct_animes(&self.store.snapshot())
    }

    pub fn stats(&self) -> DatasetStats {
        let snapshot = self.store.snapshot();
        DatasetStats {
            total_quotes: snapshot.len(),
            total_unique_animes: distinct_animes(&snapshot).len(),
        }
    }
}

fn distinct_animes(dataset: &Dataset) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut animes = Vec::new();
    for record in dataset.records() {
        if seen.insert(record.anime.as_str()) {
            animes.push(record.anime.clone());
        }
    }
    animes
}
