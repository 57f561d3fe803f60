use crate::errors::CbtError;
use crate::tasks::{traverse_structure, Task};
use serde_yaml::Value;

/// Tree scaffolded by `create-project`.
///
/// Mappings are directories, `~` leaves are files whose content comes from
/// the renderer. Key order is creation order.
pub const DEFAULT_LAYOUT: &str = r#"
.gitignore: ~
.project: {}
build:
  binaries: {}
docs:
  LICENSE.txt: ~
  Roadmap.md: ~
headers:
  sample.hpp: ~
src:
  main.cpp: ~
  sample.cpp: ~
README.md: ~
project.cfg: ~
"#;

/// Ordered list of directories and files that make up a new project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectLayout {
    pub tasks: Vec<Task>,
}

impl ProjectLayout {
    /// Parses the built-in layout.
    pub fn standard() -> Result<Self, CbtError> {
        Self::from_yaml_str(DEFAULT_LAYOUT)
    }

    /// Create a layout from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CbtError> {
        let root: Value = serde_yaml::from_str(yaml)?;
        if !root.is_mapping() {
            return Err(CbtError::invalid_layout("the document root must be a mapping"));
        }
        let tasks = traverse_structure(&root)?;
        Ok(Self { tasks })
    }

    /// Counts (files, directories) in the layout.
    pub fn stats(&self) -> (usize, usize) {
        self.tasks.iter().fold((0, 0), |(files, dirs), task| match task {
            Task::File(_) => (files + 1, dirs),
            Task::Dir(_) => (files, dirs + 1),
        })
    }
}
