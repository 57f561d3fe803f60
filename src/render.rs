//! Chooses and fills the template for a destination inside a project.

use crate::qualifier::{derive, QualifiedNames};
use crate::templates::{TemplateRole, FILE_NAME_TOKEN, GUARD_TOKEN, NAMESPACE_TOKEN};
use log::debug;

/// Extensions rendered from the sample header template.
pub const HEADER_EXTENSIONS: [&str; 1] = ["hpp"];
/// Extensions rendered from the sample source template.
pub const SOURCE_EXTENSIONS: [&str; 1] = ["cpp"];

const STATIC_FILES: [(&str, TemplateRole); 6] = [
    (".gitignore", TemplateRole::Gitignore),
    ("docs/LICENSE.txt", TemplateRole::License),
    ("docs/Roadmap.md", TemplateRole::Roadmap),
    ("src/main.cpp", TemplateRole::Main),
    ("README.md", TemplateRole::Readme),
    ("project.cfg", TemplateRole::ProjectConfig),
];

/// What kind of file a project-relative path receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// A well-known file written verbatim.
    Static(TemplateRole),
    Header,
    Source,
    /// Anything else is created empty.
    Unknown,
}

impl Destination {
    /// Classifies a `/`-separated path relative to the project root.
    pub fn classify(relative_path: &str) -> Self {
        if let Some((_, role)) = STATIC_FILES
            .iter()
            .find(|(name, _)| *name == relative_path)
        {
            return Destination::Static(*role);
        }

        // Suffix match, so a bare `.hpp` still counts as a header.
        let has_extension = |extensions: &[&str]| {
            extensions
                .iter()
                .any(|ext| relative_path.ends_with(&format!(".{}", ext)))
        };
        if has_extension(&HEADER_EXTENSIONS[..]) {
            Destination::Header
        } else if has_extension(&SOURCE_EXTENSIONS[..]) {
            Destination::Source
        } else {
            Destination::Unknown
        }
    }
}

/// Produces the full content of the file at `relative_path`.
pub fn render(relative_path: &str) -> String {
    let destination = Destination::classify(relative_path);
    debug!("Rendering {} as {:?}", relative_path, destination);

    match destination {
        Destination::Static(role) => role.text(),
        Destination::Header => substitute(
            &TemplateRole::SampleHeader.text(),
            &derive(relative_path),
            true,
        ),
        Destination::Source => substitute(
            &TemplateRole::SampleSource.text(),
            &derive(relative_path),
            false,
        ),
        Destination::Unknown => String::new(),
    }
}

/// Replaces every placeholder occurrence in `text`.
///
/// The guard token is only touched when `include_guard` is set.
pub fn substitute(text: &str, names: &QualifiedNames, include_guard: bool) -> String {
    let mut rendered = if include_guard {
        text.replace(GUARD_TOKEN, &names.guard)
    } else {
        text.to_string()
    };
    rendered = rendered.replace(FILE_NAME_TOKEN, &names.header_name());
    rendered.replace(NAMESPACE_TOKEN, &names.namespace)
}
