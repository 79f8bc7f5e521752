use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures while reading the weather dataset.
///
/// An empty dataset is not an error: it loads as zero observations and the
/// report falls back to the insufficient-data notice.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("{} not found", path.display())]
    DatasetNotFound { path: PathBuf },

    #[error("malformed dataset: {reason}")]
    DatasetMalformed { reason: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DatasetError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        DatasetError::DatasetMalformed { reason: reason.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DatasetError::DatasetNotFound { .. })
    }
}
