use crate::errors::CbtError;
use crate::output::Reporter;
use crate::render::render;
use crate::utils::write_new_file;
use log::{debug, info, warn};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// A task to either create a directory or a file, relative to the project root.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    Dir(String),
    File(String),
}

impl Task {
    pub fn path(&self) -> &str {
        match self {
            Task::Dir(path) | Task::File(path) => path,
        }
    }
}

/// One filesystem operation performed while scaffolding.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaffoldAction {
    DirectoryCreated(PathBuf),
    DirectorySkipped(PathBuf),
    DirectoryFailed(PathBuf, String),
    FileCreated(PathBuf),
    FileSkipped(PathBuf),
    FileCreateFailed(PathBuf, String),
}

impl ScaffoldAction {
    pub fn label(&self) -> &'static str {
        match self {
            ScaffoldAction::DirectoryCreated(_) => "DIR",
            ScaffoldAction::FileCreated(_) => "CREATE",
            ScaffoldAction::DirectorySkipped(_) | ScaffoldAction::FileSkipped(_) => "SKIP",
            ScaffoldAction::DirectoryFailed(..) | ScaffoldAction::FileCreateFailed(..) => "FAILED",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ScaffoldAction::DirectoryCreated(path)
            | ScaffoldAction::DirectorySkipped(path)
            | ScaffoldAction::DirectoryFailed(path, _)
            | ScaffoldAction::FileCreated(path)
            | ScaffoldAction::FileSkipped(path)
            | ScaffoldAction::FileCreateFailed(path, _) => path,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            ScaffoldAction::DirectoryFailed(_, reason)
            | ScaffoldAction::FileCreateFailed(_, reason) => Some(reason),
            _ => None,
        }
    }
}

/// Result of a directory creation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum DirOutcome {
    Created,
    AlreadyExists,
    Failed(String),
}

/// Result of a file creation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Created,
    Skipped,
    Failed(String),
}

/// Tally of a scaffolding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldSummary {
    pub dirs_created: usize,
    pub dirs_skipped: usize,
    pub files_created: usize,
    pub files_skipped: usize,
    pub failures: usize,
}

impl ScaffoldSummary {
    pub fn total(&self) -> usize {
        self.dirs_created + self.dirs_skipped + self.files_created + self.files_skipped + self.failures
    }
}

/// Flattens a YAML layout into tasks, parents first, in document order.
pub fn traverse_structure(yaml: &Value) -> Result<Vec<Task>, CbtError> {
    let mut tasks = Vec::new();
    collect_tasks(yaml, "", &mut tasks)?;
    Ok(tasks)
}

fn collect_tasks(node: &Value, prefix: &str, tasks: &mut Vec<Task>) -> Result<(), CbtError> {
    let Some(map) = node.as_mapping() else {
        return Ok(());
    };

    for (key, value) in map {
        let name = key
            .as_str()
            .ok_or_else(|| CbtError::invalid_layout(format!("non-string key {:?}", key)))?;
        let path = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", prefix, name)
        };

        match value {
            Value::Mapping(_) => {
                tasks.push(Task::Dir(path.clone()));
                collect_tasks(value, &path, tasks)?;
            }
            Value::Null => tasks.push(Task::File(path)),
            _ => {
                return Err(CbtError::invalid_layout(format!(
                    "'{}' must be a mapping or ~",
                    path
                )))
            }
        }
    }
    Ok(())
}

/// Joins `base` and `subpath` the way action lines display them.
///
/// A non-empty `subpath` gets a trailing `/`, and a leading `././` collapses to `./`.
pub fn target_path(base: &Path, subpath: &str) -> String {
    let mut full = format!("{}/{}", base.display(), subpath);
    if !subpath.is_empty() {
        full.push('/');
    }
    if full.starts_with("././") {
        full.replace_range(..4, "./");
    }
    full
}

/// Creates `base/subpath`, one level only unless `recursive` is set.
pub fn create_directory(
    base: &Path,
    subpath: &str,
    recursive: bool,
    reporter: &dyn Reporter,
) -> DirOutcome {
    let target = PathBuf::from(target_path(base, subpath));
    if target.is_dir() {
        debug!("Skipping directory creation, already exists: {:?}", target);
        reporter.scaffold_action(&ScaffoldAction::DirectorySkipped(target));
        return DirOutcome::AlreadyExists;
    }

    let result = if recursive {
        fs::create_dir_all(&target)
    } else {
        fs::create_dir(&target)
    };

    match result {
        Ok(()) => {
            info!("Created directory: {:?}", target);
            reporter.scaffold_action(&ScaffoldAction::DirectoryCreated(target));
            DirOutcome::Created
        }
        Err(e) if target.is_dir() => {
            debug!("Directory appeared concurrently {:?}: {}", target, e);
            reporter.scaffold_action(&ScaffoldAction::DirectorySkipped(target));
            DirOutcome::AlreadyExists
        }
        Err(e) => {
            let error = CbtError::from_io_with_context(e, target.clone());
            warn!("Failed to create directory {:?}: {}", target, error);
            let reason = error.summary();
            reporter.scaffold_action(&ScaffoldAction::DirectoryFailed(target, reason.clone()));
            DirOutcome::Failed(reason)
        }
    }
}

/// Creates `project_root/relative_path` with its rendered template.
///
/// Existing files are skipped and missing parent directories are created first.
pub fn create_file(project_root: &Path, relative_path: &str, reporter: &dyn Reporter) -> FileOutcome {
    let full_path = PathBuf::from(format!("{}/{}", project_root.display(), relative_path));
    if full_path.symlink_metadata().is_ok() {
        info!("Skipping file creation, already exists: {:?}", full_path);
        reporter.scaffold_action(&ScaffoldAction::FileSkipped(full_path));
        return FileOutcome::Skipped;
    }

    if let Some((parent, _)) = relative_path.rsplit_once('/') {
        if !Path::new(&target_path(project_root, parent)).is_dir() {
            if let DirOutcome::Failed(reason) = create_directory(project_root, parent, true, reporter) {
                reporter.scaffold_action(&ScaffoldAction::FileCreateFailed(full_path, reason.clone()));
                return FileOutcome::Failed(reason);
            }
        }
    }

    match write_new_file(&full_path, &render(relative_path)) {
        Ok(()) => {
            info!("Created file: {:?}", full_path);
            reporter.scaffold_action(&ScaffoldAction::FileCreated(full_path));
            FileOutcome::Created
        }
        Err(CbtError::AlreadyExists { .. }) => {
            info!("Skipping file creation, already exists: {:?}", full_path);
            reporter.scaffold_action(&ScaffoldAction::FileSkipped(full_path));
            FileOutcome::Skipped
        }
        Err(e) => {
            warn!("Failed to write file {:?}: {}", full_path, e);
            let reason = e.summary();
            reporter.scaffold_action(&ScaffoldAction::FileCreateFailed(full_path, reason.clone()));
            FileOutcome::Failed(reason)
        }
    }
}

/// Runs every task against `project_root`; failures are counted and the run continues.
pub fn scaffold(project_root: &Path, tasks: &[Task], reporter: &dyn Reporter) -> ScaffoldSummary {
    let mut summary = ScaffoldSummary::default();

    for task in tasks {
        match task {
            Task::Dir(path) => match create_directory(project_root, path, false, reporter) {
                DirOutcome::Created => summary.dirs_created += 1,
                DirOutcome::AlreadyExists => summary.dirs_skipped += 1,
                DirOutcome::Failed(_) => summary.failures += 1,
            },
            Task::File(path) => match create_file(project_root, path, reporter) {
                FileOutcome::Created => summary.files_created += 1,
                FileOutcome::Skipped => summary.files_skipped += 1,
                FileOutcome::Failed(_) => summary.failures += 1,
            },
        }
    }

    debug!("Scaffold summary for {:?}: {:?}", project_root, summary);
    summary
}
