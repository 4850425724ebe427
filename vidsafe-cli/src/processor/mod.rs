mod outcome;

use std::ffi::{OsStr, OsString};
use std::fs::{self, DirEntry};
use std::path::Path;

use safe_name::{has_extension, sanitize_filename};
use tracing::{debug, warn};

use crate::config::RenameConfig;
use crate::error::AppError;

pub use outcome::{RenameOutcome, RenameSummary};

/// Rename every candidate file in `config.dir`.
///
/// Each outcome is handed to `on_outcome` as soon as it is known. Only a
/// failure to read the directory listing is returned as an error; per-file
/// failures end up as [`RenameOutcome::Failed`] and the batch keeps going.
pub fn process_directory<F>(config: &RenameConfig, on_outcome: F) -> Result<RenameSummary, AppError>
where
    F: FnMut(&RenameOutcome),
{
    debug!("{config}");

    let entries = fs::read_dir(&config.dir)?;
    let candidates = entries.filter_map(|entry| match entry {
        Ok(entry) => candidate_name(&entry, &config.extensions),
        Err(e) => {
            warn!(error = %e, "Failed to read directory entry, skipping");
            None
        }
    });

    Ok(process_candidates(&config.dir, candidates, on_outcome))
}

/// Returns the entry's raw name if it ends with one of `extensions`.
///
/// Directories are not excluded; a folder named like a video is renamed too.
fn candidate_name(entry: &DirEntry, extensions: &[String]) -> Option<OsString> {
    let raw = entry.file_name();
    if has_extension(&raw.to_string_lossy(), extensions) {
        Some(raw)
    } else {
        debug!(file = ?raw, "Not a candidate, ignoring");
        None
    }
}

/// Process candidate names in the order given, one at a time.
pub fn process_candidates<I, F>(dir: &Path, names: I, mut on_outcome: F) -> RenameSummary
where
    I: IntoIterator<Item = OsString>,
    F: FnMut(&RenameOutcome),
{
    let mut summary = RenameSummary::default();
    for name in names {
        let outcome = process_file(dir, &name);
        on_outcome(&outcome);
        summary.record(&outcome);
    }
    summary
}

/// Rename a single entry in `dir` to its sanitized name, never overwriting.
///
/// Names that are not valid UTF-8 are sanitized from their lossy form, so
/// the invalid bytes become U+FFFD in the new name.
pub fn process_file(dir: &Path, raw: &OsStr) -> RenameOutcome {
    let original = raw.to_string_lossy().into_owned();
    let target = sanitize_filename(&original);

    if OsStr::new(&target) == raw {
        debug!(file = %original, "Name already safe");
        return RenameOutcome::AlreadySafe { name: original };
    }

    let target_path = dir.join(&target);
    // symlink_metadata so a dangling symlink still counts as taken
    if fs::symlink_metadata(&target_path).is_ok() {
        debug!(file = %original, target = %target, "Target exists, skipping");
        return RenameOutcome::Skipped { original, target };
    }

    // The target may appear between the check above and this call; not guarded.
    match fs::rename(dir.join(raw), &target_path) {
        Ok(()) => {
            debug!(file = %original, target = %target, "Renamed");
            RenameOutcome::Renamed { original, target }
        }
        Err(e) => {
            warn!(file = %original, target = %target, error = %e, "Rename failed");
            RenameOutcome::Failed {
                original,
                target,
                error: e.to_string(),
            }
        }
    }
}
