//! Shared test utilities for reducing duplication across test modules
//!
//! This module provides common helper functions for:
//! - CLI argument parsing and testing
//! - Temporary file/directory creation
//! - Capturing reporter output
//! - Test assertion helpers

#[cfg(test)]
pub mod helpers {
    use crate::output::Reporter;
    use crate::tasks::ScaffoldAction;
    use clap::ArgMatches;
    use std::cell::RefCell;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::{tempdir, TempDir};

    /// Helper for creating CLI matches for a given subcommand with arguments
    pub fn create_cli_matches_for_subcommand(subcommand: &str, args: Vec<&str>) -> Option<ArgMatches> {
        let mut full_args = vec!["cbt", subcommand];
        full_args.extend(args);

        let matches = crate::build_cli().try_get_matches_from(full_args).ok()?;
        matches.subcommand_matches(subcommand).cloned()
    }

    /// Helper for creating CLI matches for create-project subcommand
    pub fn create_project_matches(args: Vec<&str>) -> Option<ArgMatches> {
        create_cli_matches_for_subcommand("create-project", args)
    }

    /// Create a temporary directory with test files
    pub struct TestFileSystem {
        #[allow(dead_code)]
        pub temp_dir: TempDir,
        pub root_path: PathBuf,
    }

    impl Default for TestFileSystem {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TestFileSystem {
        pub fn new() -> Self {
            let temp_dir = tempdir().expect("Failed to create temporary directory");
            let root_path = temp_dir.path().to_path_buf();

            Self { temp_dir, root_path }
        }

        /// Create a file with given content at the specified path (relative to temp dir)
        pub fn create_file<P: AsRef<Path>>(&self, path: P, content: &str) -> PathBuf {
            let full_path = self.root_path.join(path);

            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent).expect("Failed to create parent directories");
            }

            fs::write(&full_path, content).expect("Failed to write file");
            full_path
        }

        /// Create a directory at the specified path (relative to temp dir)
        pub fn create_dir<P: AsRef<Path>>(&self, path: P) -> PathBuf {
            let full_path = self.root_path.join(path);
            fs::create_dir_all(&full_path).expect("Failed to create directory");
            full_path
        }

        /// Get a path relative to the temp directory
        pub fn path<P: AsRef<Path>>(&self, relative_path: P) -> PathBuf {
            self.root_path.join(relative_path)
        }
    }

    /// Reporter that keeps every line it receives
    #[derive(Default)]
    pub struct RecordingReporter {
        pub actions: RefCell<Vec<ScaffoldAction>>,
        pub deletions: RefCell<Vec<(PathBuf, bool)>>,
        pub notices: RefCell<Vec<String>>,
        pub warnings: RefCell<Vec<String>>,
    }

    impl RecordingReporter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Labels of the recorded scaffold actions, in order
        pub fn labels(&self) -> Vec<String> {
            self.actions
                .borrow()
                .iter()
                .map(|action| action.label().to_string())
                .collect()
        }
    }

    impl Reporter for RecordingReporter {
        fn scaffold_action(&self, action: &ScaffoldAction) {
            self.actions.borrow_mut().push(action.clone());
        }

        fn deletion(&self, path: &Path, removed: bool) {
            self.deletions.borrow_mut().push((path.to_path_buf(), removed));
        }

        fn notice(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }

        fn warning(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }
    }

    /// Assert that a file exists and has expected content
    pub fn assert_file_content<P: AsRef<Path>>(path: P, expected_content: &str) {
        let path = path.as_ref();
        assert!(path.exists(), "File should exist: {}", path.display());

        let actual_content = fs::read_to_string(path).expect("Failed to read file content");
        assert_eq!(
            actual_content, expected_content,
            "File content mismatch for: {}",
            path.display()
        );
    }

    /// Assert that a directory exists
    pub fn assert_dir_exists<P: AsRef<Path>>(path: P) {
        let path = path.as_ref();
        assert!(path.exists(), "Directory should exist: {}", path.display());
        assert!(path.is_dir(), "Path should be a directory: {}", path.display());
    }
}
