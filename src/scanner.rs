use crate::types::{AuditError, AuditReport, SkipReason, SubdirOutcome, SubdirReport};
use log::debug;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Conforming quote files carry a DD_MM_YYYY date prefix before the literal
/// "devis" token. Anything may follow the token (extension, client reference).
static QUOTE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}_\d{2}_\d{4}_devis").unwrap());

#[must_use]
pub fn is_quote_name(name: &str) -> bool {
    QUOTE_NAME_REGEX.is_match(name)
}

/// Walks the immediate subdirectories of `parent` and classifies every plain
/// file inside them against the quote naming convention.
///
/// Parent-level failures abort the run with an error; per-subdirectory
/// failures are recorded as skips and the run continues. No ordering is
/// imposed beyond what `read_dir` returns.
pub fn audit_quotes(parent: &Path) -> Result<AuditReport, AuditError> {
    if !parent.exists() {
        return Err(AuditError::ParentMissing(parent.display().to_string()));
    }
    if !parent.is_dir() {
        return Err(AuditError::ParentNotADirectory(parent.display().to_string()));
    }

    let subdirs: Vec<PathBuf> = fs::read_dir(parent)
        .map_err(|source| AuditError::ParentUnreadable {
            path: parent.display().to_string(),
            source,
        })?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();

    if subdirs.is_empty() {
        return Err(AuditError::NoSubdirectories(parent.display().to_string()));
    }

    let mut report = AuditReport {
        subdirs: Vec::with_capacity(subdirs.len()),
        dirs_analyzed: 0,
        total_valid: 0,
        total_invalid: 0,
    };

    for dir in &subdirs {
        let name = dir.file_name().map_or_else(
            || dir.display().to_string(),
            |n| n.to_string_lossy().to_string(),
        );
        let outcome = visit_subdir(dir);

        match &outcome {
            SubdirOutcome::Analyzed { valid, invalid } => {
                report.dirs_analyzed += 1;
                report.total_valid += valid.len();
                report.total_invalid += invalid.len();
            }
            SubdirOutcome::Skipped(reason) => {
                debug!("skipped {}: {reason:?}", dir.display());
            }
        }

        report.subdirs.push(SubdirReport { name, outcome });
    }

    Ok(report)
}

fn visit_subdir(dir: &Path) -> SubdirOutcome {
    // The listing that produced this path may be stale by the time we get
    // here, so existence and type are checked again before descending.
    if !dir.exists() {
        return SubdirOutcome::Skipped(SkipReason::Vanished);
    }
    if !dir.is_dir() {
        return SubdirOutcome::Skipped(SkipReason::NotADirectory);
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("cannot list {}: {e}", dir.display());
            return SubdirOutcome::Skipped(SkipReason::Unreadable);
        }
    };

    // Fresh lists per subdirectory so results never bleed across folders
    let mut valid = Vec::new();
    let mut invalid = Vec::new();

    for entry in entries.filter_map(std::result::Result::ok) {
        if !entry.path().is_file() {
            // Nested directories are ignored, not recursed into
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if is_quote_name(&name) {
            valid.push(name);
        } else {
            invalid.push(name);
        }
    }

    SubdirOutcome::Analyzed { valid, invalid }
}
