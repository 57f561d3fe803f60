use crate::config::ProjectLayout;
use crate::errors::CbtError;
use crate::help::show_usage;
use crate::output::Reporter;
use crate::tasks::{create_directory, scaffold, DirOutcome, ScaffoldSummary};
use clap::ArgMatches;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// How a `create-project` invocation ended.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// Something already lives at the project path; nothing was touched.
    AlreadyExists,
    /// The project root could not be created.
    RootFailed(String),
    Created(ScaffoldSummary),
}

impl CreateOutcome {
    /// Closing line for project `name`.
    pub fn message(&self, name: &str) -> String {
        match self {
            CreateOutcome::AlreadyExists => format!("Directory '{}' already exists!", name),
            CreateOutcome::RootFailed(_) => format!("Could not create project '{}'!", name),
            CreateOutcome::Created(summary) if summary.failures == 0 => {
                format!("Project '{}' created", name)
            }
            CreateOutcome::Created(summary) => format!(
                "Project '{}' created with {} failed item(s)",
                name, summary.failures
            ),
        }
    }

    /// Prints the closing line; refusals go out as warnings.
    pub fn report(&self, name: &str, reporter: &dyn Reporter) {
        match self {
            CreateOutcome::Created(_) => reporter.notice(&self.message(name)),
            _ => reporter.warning(&self.message(name)),
        }
    }
}

/// Path of the project root; relative to the invocation directory when `base` is `.`.
pub fn project_root(base: &Path, name: &str) -> PathBuf {
    if base == Path::new(".") {
        PathBuf::from(name)
    } else {
        base.join(name)
    }
}

/// Creates `base/name` and scaffolds the standard layout inside it.
pub fn create_project(
    base: &Path,
    name: &str,
    reporter: &dyn Reporter,
) -> Result<CreateOutcome, CbtError> {
    if name.trim().is_empty() {
        return Err(CbtError::InvalidProjectName {
            name: name.to_string(),
        });
    }

    let layout = ProjectLayout::standard()?;
    let root = project_root(base, name);
    if root.symlink_metadata().is_ok() {
        return Ok(CreateOutcome::AlreadyExists);
    }

    match create_directory(&root, "", false, reporter) {
        DirOutcome::Created => {}
        DirOutcome::AlreadyExists => return Ok(CreateOutcome::AlreadyExists),
        DirOutcome::Failed(reason) => return Ok(CreateOutcome::RootFailed(reason)),
    }

    Ok(CreateOutcome::Created(scaffold(&root, &layout.tasks, reporter)))
}

/// Runs the create-project subcommand against the current directory.
pub fn run_create_project(matches: &ArgMatches, reporter: &dyn Reporter) -> Result<(), CbtError> {
    let Some(name) = matches.get_one::<String>("project_name") else {
        show_usage();
        return Ok(());
    };

    info!("Creating project {:?}", name);
    let start_time = Instant::now();

    let outcome = create_project(Path::new("."), name, reporter)?;
    match &outcome {
        CreateOutcome::RootFailed(reason) => {
            warn!("Project root {:?} not created: {}", name, reason);
        }
        CreateOutcome::Created(summary) => {
            info!("Scaffolded {:?} in {:?}: {:?}", name, start_time.elapsed(), summary);
        }
        CreateOutcome::AlreadyExists => {}
    }
    outcome.report(name, reporter);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::SilentReporter;
    use crate::test_utils::helpers::*;

    const EXPECTED_PATHS: [&str; 14] = [
        ".gitignore",
        ".project",
        "build",
        "build/binaries",
        "docs",
        "docs/LICENSE.txt",
        "docs/Roadmap.md",
        "headers",
        "headers/sample.hpp",
        "src",
        "src/main.cpp",
        "src/sample.cpp",
        "README.md",
        "project.cfg",
    ];

    #[test]
    fn test_project_root() {
        assert_eq!(project_root(Path::new("."), "demo"), PathBuf::from("demo"));
        assert_eq!(
            project_root(Path::new("/tmp/work"), "demo"),
            PathBuf::from("/tmp/work/demo")
        );
    }

    #[test]
    fn test_create_project_builds_full_tree() {
        let fs = TestFileSystem::new();
        let reporter = RecordingReporter::new();

        let outcome = create_project(&fs.root_path, "demo", &reporter).unwrap();

        let summary = match outcome {
            CreateOutcome::Created(summary) => summary,
            other => panic!("Expected Created, got {:?}", other),
        };
        assert_eq!(summary.failures, 0);
        assert_eq!(summary.dirs_created, 6);
        assert_eq!(summary.files_created, 8);

        for path in EXPECTED_PATHS {
            assert!(fs.path("demo").join(path).exists(), "missing {}", path);
        }
        assert_file_content(fs.path("demo/.gitignore"), "build\ntest\n");

        let actions = reporter.actions.borrow();
        assert_eq!(actions[0].label(), "DIR");
        assert_eq!(actions.len(), 15);
    }

    #[test]
    fn test_create_project_sample_files_use_own_stem() {
        let fs = TestFileSystem::new();
        create_project(&fs.root_path, "demo", &SilentReporter).unwrap();

        let header = std::fs::read_to_string(fs.path("demo/headers/sample.hpp")).unwrap();
        assert!(header.starts_with("#ifndef SAMPLE\n#define SAMPLE\n"));
        assert!(header.contains("namespace sample {"));

        let source = std::fs::read_to_string(fs.path("demo/src/sample.cpp")).unwrap();
        assert!(source.starts_with("#include \"sample.hpp\"\n"));
        assert!(source.contains("namespace sample {"));
    }

    #[test]
    fn test_create_project_existing_path_is_untouched() {
        let fs = TestFileSystem::new();
        fs.create_file("demo/keep.txt", "mine");
        let reporter = RecordingReporter::new();

        let outcome = create_project(&fs.root_path, "demo", &reporter).unwrap();

        assert_eq!(outcome, CreateOutcome::AlreadyExists);
        assert!(reporter.actions.borrow().is_empty());
        assert!(!fs.path("demo/.gitignore").exists());
        assert_file_content(fs.path("demo/keep.txt"), "mine");
    }

    #[test]
    fn test_create_project_existing_file_counts_as_conflict() {
        let fs = TestFileSystem::new();
        fs.create_file("demo", "not a directory");

        let outcome = create_project(&fs.root_path, "demo", &SilentReporter).unwrap();
        assert_eq!(outcome, CreateOutcome::AlreadyExists);
    }

    #[test]
    fn test_create_project_missing_parent_fails_root() {
        let fs = TestFileSystem::new();

        let outcome = create_project(&fs.root_path, "missing/demo", &SilentReporter).unwrap();

        assert!(matches!(outcome, CreateOutcome::RootFailed(_)));
        assert!(!fs.path("missing").exists());
    }

    #[test]
    fn test_create_project_rejects_empty_name() {
        let fs = TestFileSystem::new();
        let result = create_project(&fs.root_path, "  ", &SilentReporter);
        assert!(matches!(result, Err(CbtError::InvalidProjectName { .. })));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            CreateOutcome::AlreadyExists.message("demo"),
            "Directory 'demo' already exists!"
        );
        assert_eq!(
            CreateOutcome::RootFailed("denied".to_string()).message("demo"),
            "Could not create project 'demo'!"
        );
        assert_eq!(
            CreateOutcome::Created(ScaffoldSummary::default()).message("demo"),
            "Project 'demo' created"
        );
    }

    #[test]
    fn test_partial_failure_is_counted_in_notice() {
        let fs = TestFileSystem::new();
        fs.create_file("demo/docs", "blocks the docs directory");
        let layout = ProjectLayout::standard().unwrap();
        let summary = scaffold(&fs.path("demo"), &layout.tasks, &SilentReporter);
        assert_eq!(summary.failures, 3);
        let reporter = RecordingReporter::new();

        CreateOutcome::Created(summary).report("demo", &reporter);

        assert_eq!(
            *reporter.notices.borrow(),
            vec!["Project 'demo' created with 3 failed item(s)".to_string()]
        );
        assert!(reporter.warnings.borrow().is_empty());
    }

    #[test]
    fn test_refusals_are_reported_as_warnings() {
        let fs = TestFileSystem::new();
        fs.create_dir("demo");
        let reporter = RecordingReporter::new();

        let outcome = create_project(&fs.root_path, "demo", &reporter).unwrap();
        outcome.report("demo", &reporter);
        CreateOutcome::RootFailed("denied".to_string()).report("other", &reporter);

        assert_eq!(
            *reporter.warnings.borrow(),
            vec![
                "Directory 'demo' already exists!".to_string(),
                "Could not create project 'other'!".to_string(),
            ]
        );
        assert!(reporter.notices.borrow().is_empty());
    }

    #[test]
    fn test_parse_create_project_arguments() {
        let sub_m = create_project_matches(vec!["demo"]).expect("create-project should parse");
        assert_eq!(sub_m.get_one::<String>("project_name").unwrap(), "demo");

        assert!(create_project_matches(vec![]).is_none());
        assert!(create_project_matches(vec![""]).is_none());
    }
}
