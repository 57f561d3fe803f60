use crate::errors::CbtError;
use crate::utils::is_workspace;
use std::fmt;

/// Rust edition the tool is built with.
pub const RUST_EDITION: &str = "2021";

/// Static metadata shown by `cbt info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: &'static str,
    pub author: &'static str,
    pub version: &'static str,
    pub edition: &'static str,
    pub platform: &'static str,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "cbt: C++ Build Tool",
            author: env!("CARGO_PKG_AUTHORS"),
            version: env!("CARGO_PKG_VERSION"),
            edition: RUST_EDITION,
            platform: platform(),
        }
    }
}

impl fmt::Display for ToolInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f)?;
        writeln!(f, "Author        - {}", self.author.replace(':', ", "))?;
        writeln!(f, "Version       - {}", self.version)?;
        writeln!(f)?;
        writeln!(f, "Rust Edition  - {}", self.edition)?;
        write!(f, "Platform      - {}", self.platform)
    }
}

/// Platform the binary was compiled for.
pub fn platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "Apple MacOS"
    } else if cfg!(target_os = "linux") {
        "Linux"
    } else if cfg!(unix) {
        "Unix"
    } else if cfg!(windows) {
        "Microsoft Windows"
    } else {
        "Unknown"
    }
}

/// Runs the info subcommand: prints tool metadata and whether the current
/// directory is a cbt workspace.
pub fn run_info() -> Result<(), CbtError> {
    println!();
    println!("{}", ToolInfo::current());
    println!(
        "Workspace     - {}",
        if is_workspace(".") { "detected" } else { "not detected" }
    );
    println!();
    Ok(())
}
