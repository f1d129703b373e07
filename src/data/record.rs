use serde::{Deserialize, Serialize};

/// One quote with its speaking character and originating anime.
///
/// All three fields are guaranteed non-empty once a record has made it
/// through the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub quote: String,
    pub character: String,
    pub anime: String,
}

/// Immutable ordered collection of quotes, fixed at load time.
///
/// Insertion order from the source file is preserved for every enumeration
/// operation. There are no mutating operations after construction; a reload
/// replaces the whole dataset through the store.
#[derive(Debug, Default)]
pub struct Dataset {
    records: Vec<QuoteRecord>,
}

impl Dataset {
    pub fn new(records: Vec<QuoteRecord>) -> Self {
        Self { records }
    }

    /// Number of records. O(1).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Read-only view of the records in insertion order.
    pub fn records(&self) -> &[QuoteRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(quote: &str, character: &str, anime: &str) -> QuoteRecord {
        QuoteRecord {
            quote: quote.to_string(),
            character: character.to_string(),
            anime: anime.to_string(),
        }
    }

    #[test]
    fn test_dataset_preserves_order() {
        let dataset = Dataset::new(vec![
            record("first", "A", "X"),
            record("second", "B", "Y"),
            record("third", "C", "X"),
        ]);

        assert_eq!(dataset.len(), 3);
        let quotes: Vec<&str> = dataset.records().iter().map(|r| r.quote.as_str()).collect();
        assert_eq!(quotes, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
    }
}
