use std::path::Path;

use tracing::info;

use crate::common::error::Result;
use crate::domain::ScheduleSnapshot;

/// Writes snapshots to disk, creating parent directories as needed. This is
/// the terminus of the always-publish contract: whatever snapshot assembly
/// produced, it lands on disk as valid JSON.
pub struct SnapshotWriter {
    pretty: bool,
}

impl SnapshotWriter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn publish(&self, snapshot: &ScheduleSnapshot, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let body = if self.pretty {
            serde_json::to_string_pretty(snapshot)?
        } else {
            serde_json::to_string(snapshot)?
        };
        std::fs::write(path, body)?;
        info!(path = %path.display(), showings = snapshot.today_showings.len(), "published snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::assemble::assemble_failure;

    #[test]
    fn test_publishes_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public").join("schedule.json");
        let snapshot = assemble_failure(None, "network unreachable");

        SnapshotWriter::new(true).publish(&snapshot, &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: ScheduleSnapshot = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.error.as_deref(), Some("network unreachable"));
        assert!(parsed.today_showings.is_empty());
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.json");
        let snapshot = assemble_failure(None, "nope");

        SnapshotWriter::new(false).publish(&snapshot, &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw.lines().count(), 1);
    }
}
