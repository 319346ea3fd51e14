//! Feature derivation over the historical lounge series.

use std::path::Path;

use crate::api::{FeatureRow, HistoricalRecord};
use crate::error::{CoreError, CoreResult};

use super::csv_loader;

/// Owner of the historical series and the lag-augmented feature table.
///
/// The store is read-only after construction: forecasting and analytics
/// borrow from it, so concurrent callers need no locking.
#[derive(Debug, Clone)]
pub struct FeatureStore {
    records: Vec<HistoricalRecord>,
}

impl FeatureStore {
    /// Load the historical series from a CSV file.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let records = csv_loader::load_history_csv(path.as_ref())
            .map_err(|e| CoreError::data_unavailable(format!("{:#}", e)))?;
        log::info!(
            "loaded {} historical records from {}",
            records.len(),
            path.as_ref().display()
        );
        Self::from_records(records)
    }

    /// Build a store from in-memory records, validating time ordering.
    pub fn from_records(records: Vec<HistoricalRecord>) -> CoreResult<Self> {
        for pair in records.windows(2) {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(CoreError::data_unavailable(format!(
                    "historical series is not strictly ordered at {}",
                    pair[1].timestamp
                )));
            }
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[HistoricalRecord] {
        &self.records
    }

    /// Most recent feature row, with the previous hour's observed crowd as
    /// the lag feature. This is the seed for the autoregressive rollout.
    pub fn seed_row(&self) -> CoreResult<FeatureRow> {
        if self.records.len() < 2 {
            return Err(CoreError::data_unavailable(format!(
                "need at least 2 records to derive the lag feature, have {}",
                self.records.len()
            )));
        }

        let prev = &self.records[self.records.len() - 2];
        let last = &self.records[self.records.len() - 1];
        Ok(last.features_with_lag(prev.crowd))
    }

    /// The full lag-augmented table: one `(features, target)` pair per
    /// record after the first, whose lag is undefined. This is what an
    /// external fitting step consumes.
    pub fn feature_table(&self) -> Vec<(FeatureRow, f64)> {
        self.records
            .windows(2)
            .map(|pair| (pair[1].features_with_lag(pair[0].crowd), pair[1].crowd))
            .collect()
    }

    /// Observed crowd values in time order, for volatility estimation.
    pub fn crowd_history(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.crowd).collect()
    }

    /// Persist the lag-augmented table as CSV.
    ///
    /// Auditable but non-semantic: nothing downstream reads the file back
    /// within the pipeline.
    pub fn persist_processed<P: AsRef<Path>>(&self, path: P) -> CoreResult<()> {
        if self.records.len() < 2 {
            return Err(CoreError::data_unavailable(
                "nothing to persist: lag table is empty",
            ));
        }

        csv_loader::write_processed_csv(path.as_ref(), &self.records)
            .map_err(|e| CoreError::data_unavailable(format!("{:#}", e)))?;
        log::info!(
            "persisted lag-augmented series ({} rows) to {}",
            self.records.len() - 1,
            path.as_ref().display()
        );
        Ok(())
    }
}
