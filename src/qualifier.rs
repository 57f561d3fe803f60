/// Names derived from a file path and substituted into source templates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QualifiedNames {
    /// Final path segment without its extension.
    pub stem: String,
    /// Uppercase identifier used as the include guard.
    pub guard: String,
    /// Lowercase identifier used as the namespace.
    pub namespace: String,
}

impl QualifiedNames {
    /// Header a generated file includes for itself.
    pub fn header_name(&self) -> String {
        format!("{}.hpp", self.stem)
    }
}

/// Derives the stem, include guard and namespace of `file_path`.
///
/// Both `/` and `\` separate segments, and only the last extension is
/// removed. Characters that cannot appear in a C++ identifier become `_`.
pub fn derive(file_path: &str) -> QualifiedNames {
    let file_name = file_path
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();
    let stem = match file_name.rfind('.') {
        Some(dot) => &file_name[..dot],
        None => file_name,
    };

    QualifiedNames {
        stem: stem.to_string(),
        guard: identifier(stem).to_ascii_uppercase(),
        namespace: identifier(stem).to_ascii_lowercase(),
    }
}

fn identifier(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
