//! On-disk JSON snapshot of a [`crate::memory::MemoryStore`].

use std::path::Path;

use bookshelf_core::models::analysis::{AnalysisRecord, StoredSuggestion};
use bookshelf_core::models::document::DocumentRecord;
use bookshelf_core::models::term::MedicalTerm;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Current snapshot version. Bump this when changing the snapshot shape.
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub snapshot_version: u32,
    #[serde(default)]
    pub documents: Vec<DocumentRecord>,
    #[serde(default)]
    pub analyses: Vec<AnalysisRecord>,
    #[serde(default)]
    pub suggestions: Vec<StoredSuggestion>,
    #[serde(default)]
    pub terms: Vec<MedicalTerm>,
}

impl Snapshot {
    /// Read a snapshot. A missing file is an empty snapshot.
    pub fn read(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&contents)?;
        if snapshot.snapshot_version > CURRENT_VERSION {
            return Err(StoreError::UnsupportedSnapshot {
                found: snapshot.snapshot_version,
                supported: CURRENT_VERSION,
            });
        }
        Ok(snapshot)
    }

    /// Write the snapshot atomically: temp file, then rename.
    pub fn write(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir)?;
        }

        let mut stamped = self.clone();
        stamped.snapshot_version = CURRENT_VERSION;
        let json = serde_json::to_string_pretty(&stamped)?;

        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json.as_bytes())?;

        // Analyses hold patient descriptions.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
        }

        std::fs::rename(&tmp_path, path)?;
        Ok(())
    }
}
