//! Identification of a media file from its path.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tw_core::MediaIds;

use crate::ids::detect_ids;
use crate::scorer::Candidate;
use crate::segment::Segmenter;

/// Identification result for one file path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathIdentity {
    /// Cleanest of the file name and parent folder name.
    pub candidate: Candidate,
    /// Provider ids found in the file name, then the parent folder name.
    pub ids: MediaIds,
}

impl Segmenter {
    /// Identify a file from its name and the name of its parent folder.
    pub fn identify_path(&self, path: &Path) -> PathIdentity {
        let names: Vec<&str> = [Some(path), path.parent()]
            .into_iter()
            .flatten()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .filter(|n| !n.trim().is_empty())
            .collect();

        let mut ids = MediaIds::default();
        for name in &names {
            ids.merge(detect_ids(name));
        }

        let candidate = self.pick_cleanest(&names);
        tracing::debug!(
            path = %path.display(),
            title = %candidate.clean,
            year = ?candidate.year,
            "identified path"
        );
        PathIdentity { candidate, ids }
    }
}
