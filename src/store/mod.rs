use std::sync::Arc;

use parking_lot::RwLock;

use crate::data::Dataset;

/// Owns the loaded dataset and hands out read-only snapshots.
///
/// The dataset itself is immutable; the only mutation the store allows is
/// replacing it wholesale. Readers clone the `Arc` handle once per query,
/// so a reload never interleaves with an in-flight query.
pub struct QuoteStore {
    dataset: RwLock<Arc<Dataset>>,
}

impl QuoteStore {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: RwLock::new(Arc::new(dataset)),
        }
    }

    /// Current dataset handle. O(1); the snapshot stays consistent for as
    /// long as the caller holds it.
    pub fn snapshot(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset.read())
    }

    /// Number of records currently held. O(1).
    pub fn count(&self) -> usize {
        self.dataset.read().len()
    }

    /// Atomically replaces the dataset. Queries already holding a snapshot
    /// keep seeing the old one in full, never a partial mix.
    pub fn reload(&self, dataset: Dataset) {
        *self.dataset.write() = Arc::new(dataset);
    }
}
