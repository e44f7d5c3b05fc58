//! Marker existence probes.

use std::path::Path;
use tracing::{debug, trace};

/// Capability to check whether the orchestrator-mode marker exists
///
/// Implementations must only read. A probe that cannot tell must answer
/// `false`.
pub trait MarkerProbe: Send + Sync {
    /// Whether a marker exists at `path`
    fn is_present(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl MarkerProbe for FsProbe {
    fn is_present(&self, path: &Path) -> bool {
        match path.try_exists() {
            Ok(present) => {
                trace!(path = %path.display(), present, "Probed marker");
                present
            }
            Err(err) => {
                debug!(path = %path.display(), error = %err, "Marker probe failed, treating as absent");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_marker() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!FsProbe.is_present(&dir.path().join("orchestrator-mode")));
    }

    #[test]
    fn test_present_marker() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("orchestrator-mode");
        std::fs::write(&marker, "").unwrap();

        assert!(FsProbe.is_present(&marker));
    }

    #[test]
    fn test_marker_directory_counts_as_present() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("orchestrator-mode");
        std::fs::create_dir(&marker).unwrap();

        assert!(FsProbe.is_present(&marker));
    }

    #[test]
    fn test_probe_fault_is_absent() {
        // A regular file used as a directory component fails with ENOTDIR
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, "x").unwrap();

        assert!(!FsProbe.is_present(&file.join(".claude").join("orchestrator-mode")));
    }

    #[test]
    fn test_probe_does_not_touch_marker() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("orchestrator-mode");
        std::fs::write(&marker, "owned elsewhere").unwrap();

        FsProbe.is_present(&marker);
        FsProbe.is_present(&marker);
        assert_eq!(std::fs::read_to_string(&marker).unwrap(), "owned elsewhere");
    }
}
