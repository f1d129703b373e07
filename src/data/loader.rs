use std::path::Path;

use serde::Deserialize;

use super::record::{Dataset, QuoteRecord};

/// Column names required in the source file. This is the boundary contract
/// with the dataset, not a core behavior.
const REQUIRED_COLUMNS: [&str; 3] = ["Quote", "Character", "Anime"];

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read quotes file: {0}")]
    Csv(#[from] csv::Error),

    #[error("quotes file is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("quotes file contains no usable rows")]
    Empty,
}

/// Outcome of a load: how many rows were accepted and how many were
/// rejected. Rejected rows are never silently dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Raw shape of one CSV row before validation.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Quote")]
    quote: String,
    #[serde(rename = "Character")]
    character: String,
    #[serde(rename = "Anime")]
    anime: String,
}

impl RawRow {
    /// Validates the row, rejecting any record with an empty required field.
    fn into_record(self) -> Option<QuoteRecord> {
        let quote = self.quote.trim();
        let character = self.character.trim();
        let anime = self.anime.trim();

        if quote.is_empty() || character.is_empty() || anime.is_empty() {
            return None;
        }

        Some(QuoteRecord {
            quote: quote.to_string(),
            character: character.to_string(),
            anime: anime.to_string(),
        })
    }
}

/// Load the quotes dataset from a CSV file.
///
/// Row policy: a row that fails to parse or has an empty required value is
/// skipped, logged, and counted in the report. The load as a whole fails
/// only when the file is unreadable, a required column is absent, or no
/// rows survive validation.
pub fn load_csv(path: impl AsRef<Path>) -> Result<(Dataset, LoadReport), LoadError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    let mut skipped = 0;

    for (index, row) in reader.deserialize::<RawRow>().enumerate() {
        // Header is line 1, so data rows start at line 2
        let line = index + 2;
        match row {
            Ok(raw) => match raw.into_record() {
                Some(record) => records.push(record),
                None => {
                    skipped += 1;
                    tracing::warn!("Skipping row at line {}: empty required value", line);
                }
            },
            Err(e) => {
                skipped += 1;
                tracing::warn!("Skipping row at line {}: {}", line, e);
            }
        }
    }

    let loaded = records.len();
    if loaded == 0 {
        return Err(LoadError::Empty);
    }

    Ok((Dataset::new(records), LoadReport { loaded, skipped }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_well_formed_rows() {
        let file = write_csv(
            "Quote,Character,Anime\n\
             Believe it!,Naruto,Naruto\n\
             I am here!,All Might,My Hero Academia\n",
        );

        let (dataset, report) = load_csv(file.path()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(report, LoadReport { loaded: 2, skipped: 0 });
        assert_eq!(dataset.records()[0].character, "Naruto");
        assert_eq!(dataset.records()[1].anime, "My Hero Academia");
    }

    #[test]
    fn test_rows_with_empty_values_are_skipped_and_counted() {
        let file = write_csv(
            "Quote,Character,Anime\n\
             Believe it!,Naruto,Naruto\n\
             ,Missing Quote,Naruto\n\
             Some quote,,Naruto\n",
        );

        let (dataset, report) = load_csv(file.path()).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(report, LoadReport { loaded: 1, skipped: 2 });
    }

    #[test]
    fn test_malformed_row_is_skipped_not_fatal() {
        // Second data row has too few fields
        let file = write_csv(
            "Quote,Character,Anime\n\
             Believe it!,Naruto,Naruto\n\
             only-one-field\n",
        );

        let (dataset, report) = load_csv(file.path()).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_missing_column_fails_load() {
        let file = write_csv("Quote,Character\nBelieve it!,Naruto\n");

        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Anime")));
    }

    #[test]
    fn test_no_data_rows_fails_load() {
        let file = write_csv("Quote,Character,Anime\n");

        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn test_all_rows_rejected_fails_load() {
        let file = write_csv("Quote,Character,Anime\n,,\n,,\n");

        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn test_unreadable_file_fails_load() {
        let err = load_csv("/nonexistent/quotes.csv").unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn test_values_are_trimmed() {
        let file = write_csv("Quote,Character,Anime\n  Believe it!  , Naruto ,Naruto\n");

        let (dataset, _) = load_csv(file.path()).unwrap();
        assert_eq!(dataset.records()[0].quote, "Believe it!");
        assert_eq!(dataset.records()[0].character, "Naruto");
    }
}
