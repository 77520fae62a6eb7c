//! JSON snapshot file standing in for the hosted document store.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use stockpilot_inventory::InventorySnapshot;

#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The data source could not be read at all.
    #[error("inventory data unavailable at {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("inventory data at {} is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write inventory data to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<InventorySnapshot, SnapshotError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| SnapshotError::Unavailable {
            path: self.path.clone(),
            source,
        })?;
        let snapshot: InventorySnapshot =
            serde_json::from_str(&raw).map_err(|source| SnapshotError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        debug!(
            path = %self.path.display(),
            products = snapshot.products.len(),
            sales = snapshot.sales.len(),
            "loaded inventory snapshot"
        );
        Ok(snapshot)
    }

    /// Write the snapshot through a sibling temp file so readers never see a partial file.
    pub fn save(&self, snapshot: &InventorySnapshot) -> Result<(), SnapshotError> {
        let write_err = |source| SnapshotError::Write {
            path: self.path.clone(),
            source,
        };

        let body = serde_json::to_vec_pretty(snapshot).map_err(|e| write_err(io::Error::other(e)))?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, body).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;

        info!(path = %self.path.display(), "saved inventory snapshot");
        Ok(())
    }
}
