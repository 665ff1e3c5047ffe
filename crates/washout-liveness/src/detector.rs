//! Process detectors answering "is the watched application running?".

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use sysinfo::{ProcessesToUpdate, System};
use tracing::debug;

/// Source of the running/not-running answer.
pub trait ProcessDetector: Send {
    /// Whether the watched application is currently alive.
    fn is_running(&mut self) -> bool;
}

/// Detector backed by the system process table.
///
/// Matches when any process name contains the pattern, ignoring case.
pub struct SysinfoDetector {
    pattern: String,
    system: System,
}

impl SysinfoDetector {
    /// Watch for processes whose name contains `pattern`.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into().to_lowercase(),
            system: System::new(),
        }
    }

    /// Lowercased pattern being matched.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl std::fmt::Debug for SysinfoDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SysinfoDetector")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

impl ProcessDetector for SysinfoDetector {
    fn is_running(&mut self) -> bool {
        self.system.refresh_processes(ProcessesToUpdate::All, true);
        let found = self.system.processes().values().any(|process| {
            process
                .name()
                .to_string_lossy()
                .to_lowercase()
                .contains(&self.pattern)
        });
        debug!(pattern = %self.pattern, found, "process table scanned");
        found
    }
}

/// Detector with an externally controlled answer.
#[derive(Debug, Clone, Default)]
pub struct StaticDetector {
    running: Arc<AtomicBool>,
}

impl StaticDetector {
    /// Detector answering `running` until changed.
    #[must_use]
    pub fn new(running: bool) -> Self {
        Self {
            running: Arc::new(AtomicBool::new(running)),
        }
    }

    /// Change the answer; visible through every clone.
    pub fn set_running(&self, running: bool) {
        self.running.store(running, Ordering::Relaxed);
    }
}

impl ProcessDetector for StaticDetector {
    fn is_running(&mut self) -> bool {
        self.running.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_detector_clones_share_state() {
        let detector = StaticDetector::new(false);
        let mut reader = detector.clone();
        assert!(!reader.is_running());
        detector.set_running(true);
        assert!(reader.is_running());
    }

    #[test]
    fn test_sysinfo_detector_finds_current_process() -> Result<(), Box<dyn std::error::Error>> {
        let exe = std::env::current_exe()?;
        let stem = exe
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let prefix: String = stem.chars().take(8).collect();

        let mut detector = SysinfoDetector::new(prefix.to_uppercase());
        assert_eq!(detector.pattern(), prefix.to_lowercase());
        assert!(detector.is_running(), "no process matching {prefix:?}");
        Ok(())
    }

    #[test]
    fn test_sysinfo_detector_misses_unknown_name() {
        let mut detector = SysinfoDetector::new("no-such-process-9f3c2a");
        assert!(!detector.is_running());
    }
}
