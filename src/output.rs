use crate::tasks::ScaffoldAction;
use std::io::Write;
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Width of the right-aligned label column in action lines.
pub const LABEL_WIDTH: usize = 8;

/// Output formatting options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text output
    Plain,
    /// Colored labels
    Pretty,
}

/// Trait for reporting what a command does to the filesystem
pub trait Reporter {
    /// Report one scaffolding step
    fn scaffold_action(&self, action: &ScaffoldAction);

    /// Report the deletion attempt of a build artifact
    fn deletion(&self, path: &Path, removed: bool);

    /// Report a command result
    fn notice(&self, message: &str);

    /// Report a condition that stopped a command
    fn warning(&self, message: &str);
}

/// Formats an action label right-aligned in the label column.
pub fn pad_label(label: &str) -> String {
    format!("{:>width$}", format!("{} ", label), width = LABEL_WIDTH)
}

/// Default reporter writing to stdout
pub struct DefaultReporter {
    format: OutputFormat,
}

impl DefaultReporter {
    /// Create a new default reporter
    pub fn new() -> Self {
        Self::with_format(OutputFormat::Pretty)
    }

    /// Create a reporter with specific output format
    pub fn with_format(format: OutputFormat) -> Self {
        Self { format }
    }

    fn write_colored(&self, text: &str, color: Color) {
        let choice = match self.format {
            OutputFormat::Pretty => ColorChoice::Auto,
            OutputFormat::Plain => ColorChoice::Never,
        };
        let mut stdout = StandardStream::stdout(choice);
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(stdout, "{}", text);
        let _ = stdout.reset();
        let _ = stdout.flush();
    }

    fn labeled_line(&self, label: &str, color: Color, rest: &str) {
        self.write_colored(&pad_label(label), color);
        println!("{}", rest);
    }
}

impl Reporter for DefaultReporter {
    fn scaffold_action(&self, action: &ScaffoldAction) {
        let color = match action {
            ScaffoldAction::DirectoryCreated(_) => Color::Blue,
            ScaffoldAction::FileCreated(_) => Color::Green,
            ScaffoldAction::DirectorySkipped(_) | ScaffoldAction::FileSkipped(_) => Color::Yellow,
            ScaffoldAction::DirectoryFailed(..) | ScaffoldAction::FileCreateFailed(..) => Color::Red,
        };
        let rest = match action.reason() {
            Some(reason) => format!("{}: {}", action.path().display(), reason),
            None => action.path().display().to_string(),
        };
        self.labeled_line(action.label(), color, &rest);
    }

    fn deletion(&self, path: &Path, removed: bool) {
        if removed {
            self.write_colored("DELETE ", Color::Green);
        } else {
            self.write_colored("DELETE Failed: ", Color::Red);
        }
        println!("{}", path.display());
    }

    fn notice(&self, message: &str) {
        println!();
        println!("{}", message);
        println!();
    }

    fn warning(&self, message: &str) {
        println!();
        self.write_colored(message, Color::Yellow);
        println!();
        println!();
    }
}

impl Default for DefaultReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Silent reporter that produces no output
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn scaffold_action(&self, _action: &ScaffoldAction) {}
    fn deletion(&self, _path: &Path, _removed: bool) {}
    fn notice(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
}
