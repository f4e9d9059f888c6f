use thiserror::Error;

/// Parent-level failures that abort the whole run.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("parent directory '{0}' does not exist")]
    ParentMissing(String),

    #[error("'{0}' is not a directory")]
    ParentNotADirectory(String),

    #[error("no permission to read parent directory '{path}'")]
    ParentUnreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("no subdirectories found in '{0}'")]
    NoSubdirectories(String),
}

/// Why a listed subdirectory was skipped instead of analyzed.
///
/// The parent listing can go stale while the run is in progress, so each
/// subdirectory is re-checked at visit time. Skips never abort the run and
/// never flip the final outcome on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Vanished,
    NotADirectory,
    Unreadable,
}

/// Result of visiting one subdirectory. File names keep enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubdirOutcome {
    Analyzed {
        valid: Vec<String>,
        invalid: Vec<String>,
    },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdirReport {
    pub name: String,
    pub outcome: SubdirOutcome,
}

/// Aggregated results of one audit run. Rebuilt from scratch on every
/// invocation; nothing is persisted across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    pub subdirs: Vec<SubdirReport>,
    pub dirs_analyzed: usize,
    pub total_valid: usize,
    pub total_invalid: usize,
}

impl AuditReport {
    /// True when at least one non-conforming file was found among the
    /// successfully analyzed subdirectories.
    #[must_use]
    pub fn problem_detected(&self) -> bool {
        self.total_invalid > 0
    }
}
