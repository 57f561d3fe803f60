use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CbtError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // User-friendly error variants
    #[error("file not found: '{path}'\ntip: Check that the file exists and you have read permissions")]
    FileNotFound { path: PathBuf },

    #[error("directory not found: '{path}'\ntip: Verify the parent directory exists and is accessible")]
    DirectoryNotFound { path: PathBuf },

    #[error("permission denied: '{path}'\ntip: Check file/directory permissions or run with appropriate privileges")]
    PermissionDenied { path: PathBuf },

    #[error("already exists: '{path}'\ntip: Existing files are never overwritten; remove it first to regenerate")]
    AlreadyExists { path: PathBuf },

    #[error("invalid project name: '{name}'\ntip: Use a non-empty directory name such as 'my-project'")]
    InvalidProjectName { name: String },

    #[error("invalid project layout: {message}\ntip: Directories must be mappings and files must be empty leaves")]
    InvalidLayout { message: String },
}

impl CbtError {
    /// Creates a contextual IO error based on the operation and path
    pub fn from_io_with_context(error: io::Error, path: PathBuf) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => {
                let path_str = path.to_string_lossy();
                if path_str.ends_with('/') || path.extension().is_none() {
                    Self::DirectoryNotFound { path }
                } else {
                    Self::FileNotFound { path }
                }
            }
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            _ => Self::Io(error),
        }
    }

    /// First line of the message, without the tip.
    pub fn summary(&self) -> String {
        self.to_string().lines().next().unwrap_or_default().to_string()
    }

    /// Creates a user-friendly layout error
    pub fn invalid_layout(message: impl Into<String>) -> Self {
        Self::InvalidLayout {
            message: message.into(),
        }
    }
}

/// Prints the error to stderr and exits with status code 1
pub fn default_error_handler(err: CbtError) {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
