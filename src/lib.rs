//! # cbt
//!
//! C++ Build Tool: scaffolds C++ projects and clears their build artifacts.
//!
//! cbt provides both a CLI interface and a programmatic API for:
//! - Creating a project tree with sample headers, sources and a `project.cfg`
//! - Deleting the object files collected under `build/`
//! - Rendering the individual templates a project is made of
//!
//! ## Usage as a Library
//!
//! ```no_run
//! use cbt::{create_project, CreateOutcome, SilentReporter};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! match create_project(Path::new("./workspace"), "my-project", &SilentReporter)? {
//!     CreateOutcome::Created(summary) => {
//!         println!("Created {} files and {} directories", summary.files_created, summary.dirs_created);
//!     }
//!     other => println!("Nothing scaffolded: {:?}", other),
//! }
//! # Ok(())
//! # }
//! ```

pub mod clean;
pub mod config;
pub mod create;
pub mod errors;
pub mod help;
pub mod info;
pub mod output;
pub mod qualifier;
pub mod render;
pub mod tasks;
pub mod templates;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export key types for library users
pub use crate::clean::{clear_build, ClearOutcome, ClearSummary};
pub use crate::config::ProjectLayout;
pub use crate::create::{create_project, CreateOutcome};
pub use crate::errors::CbtError;
pub use crate::output::{DefaultReporter, OutputFormat, Reporter, SilentReporter};
pub use crate::render::{render, Destination};
pub use crate::tasks::{ScaffoldAction, ScaffoldSummary};

use clap::builder::NonEmptyStringValueParser;
use clap::{Arg, ArgAction, ArgMatches, Command};

/// Builds the command-line interface.
pub fn build_cli() -> Command {
    Command::new("cbt")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("cbt: C++ Build Tool")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no_color")
                .long("no-color")
                .global(true)
                .help("Print action labels without colors")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("create-project")
                .about("Scaffold a new project")
                .arg(
                    Arg::new("project_name")
                        .value_name("PROJECT_NAME")
                        .required(true)
                        .value_parser(NonEmptyStringValueParser::new())
                        .help("Name of the directory to create"),
                ),
        )
        .subcommand(
            Command::new("clear-build")
                .about("Delete all object files under 'build/' directory"),
        )
        .subcommand(Command::new("info").about("Show information regarding cbt"))
        .subcommand(Command::new("help").about("Shows the help message"))
}

/// Dispatches parsed arguments to the matching command.
pub fn run(matches: &ArgMatches, reporter: &dyn Reporter) -> Result<(), CbtError> {
    match matches.subcommand() {
        Some(("create-project", sub_m)) => create::run_create_project(sub_m, reporter),
        Some(("clear-build", _)) => clean::run_clear_build(reporter),
        Some(("info", _)) => info::run_info(),
        Some(("help", _)) => {
            help::show_help();
            Ok(())
        }
        _ => {
            help::show_usage();
            Ok(())
        }
    }
}
