/// Usage listing printed by `cbt help`.
pub const USAGE: &str = "Usage:

cbt <options> [items]

Options:

create-project <project-name>   - Scaffold a new project

clear-build                     - Delete all object files under 'build/' directory

info                            - Show information regarding cbt
help                            - Shows this help message";

/// Line printed for anything that is not a known command.
pub const INVALID_USAGE: &str = "Invalid usage. Type 'cbt help' for available commands.";

pub fn show_help() {
    println!();
    println!("{}", USAGE);
    println!();
}

pub fn show_usage() {
    println!();
    println!("{}", INVALID_USAGE);
    println!();
}
