use crate::errors::CbtError;
use crate::output::Reporter;
use crate::utils::is_workspace;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory holding build artifacts inside a workspace.
pub const BUILD_DIR: &str = "build";

/// Deletion tally of a clear-build run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearSummary {
    pub removed: usize,
    pub failed: usize,
}

impl ClearSummary {
    /// Closing line printed after the deletions.
    pub fn message(&self) -> String {
        if self.removed + self.failed == 0 {
            "No object files to remove.".to_string()
        } else if self.failed == 0 {
            "All object files removed.".to_string()
        } else {
            format!("All object files removed except {}.", self.failed)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// There is no `build/` directory; nothing was touched.
    BuildMissing,
    Cleared(ClearSummary),
}

/// Deletes every non-directory entry below `workspace/build`.
///
/// Directories, and symlinks to directories, are kept. Entries are visited in
/// file-name order and a failed deletion does not stop the walk. Unreadable
/// entries are logged and skipped.
pub fn clear_build(workspace: &Path, reporter: &dyn Reporter) -> ClearOutcome {
    let build = if workspace == Path::new(".") {
        PathBuf::from(BUILD_DIR)
    } else {
        workspace.join(BUILD_DIR)
    };
    if !build.is_dir() {
        debug!("No build directory at {:?}", build);
        return ClearOutcome::BuildMissing;
    }

    let mut summary = ClearSummary::default();
    let entries: Vec<_> = WalkDir::new(&build).sort_by_file_name().into_iter().collect();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // Nothing was deleted, so this stays out of the tally.
                warn!("Failed to read build entry: {}", e);
                continue;
            }
        };
        // Follows symlinks: a link to a directory is kept.
        if entry.path().is_dir() {
            continue;
        }

        match fs::remove_file(entry.path()) {
            Ok(()) => {
                info!("Deleted {:?}", entry.path());
                reporter.deletion(entry.path(), true);
                summary.removed += 1;
            }
            Err(e) => {
                let error = CbtError::from_io_with_context(e, entry.path().to_path_buf());
                warn!("Failed to delete {:?}: {}", entry.path(), error);
                reporter.deletion(entry.path(), false);
                summary.failed += 1;
            }
        }
    }

    ClearOutcome::Cleared(summary)
}

/// Runs the clear-build subcommand in the current directory.
pub fn run_clear_build(reporter: &dyn Reporter) -> Result<(), CbtError> {
    if !is_workspace(".") {
        warn!("Current directory does not look like a cbt workspace (project.cfg, headers/, src/)");
    }

    match clear_build(Path::new("."), reporter) {
        ClearOutcome::BuildMissing => {
            reporter.warning(&format!("Directory '{}' does not exist!", BUILD_DIR));
        }
        ClearOutcome::Cleared(summary) => reporter.notice(&summary.message()),
    }
    Ok(())
}
