use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};
use std::env;

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

mod heading {
    pub const OUTPUT_PARAMETERS: &str = "Output Parameters";
}

#[derive(Clone, Debug, Default, Parser)]
#[command(version, about, next_line_help(false), styles(style::STYLES))]
pub struct AppArgs {
    /// Directory to create / project name. Used verbatim, also inside README.md
    #[arg(value_name = "PROJECT_NAME", allow_hyphen_values = true)]
    pub name: Option<String>,

    /// Replace an existing project directory without asking.
    #[arg(short, long, action, help_heading = heading::OUTPUT_PARAMETERS)]
    pub overwrite: bool,

    /// Generate the project below the given path instead of the current directory.
    #[arg(long, value_parser, value_name = "PATH", help_heading = heading::OUTPUT_PARAMETERS)]
    pub destination: Option<PathBuf>,

    /// Enables more verbose output.
    #[arg(long, short, action)]
    pub verbose: bool,
}

/// To get the arguments list from terminal
/// Return : work arguments
pub fn resolve_args(bin_name: &'static str) -> AppArgs {
    resolve_args_from(bin_name, env::args_os())
}

/// Parse `args` with the help text and usage naming `bin_name`.
/// Exits the process on `--help`, `--version` and malformed flags.
pub fn resolve_args_from<I, T>(bin_name: &'static str, args: I) -> AppArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = AppArgs::command()
        .name(bin_name)
        .bin_name(bin_name)
        .get_matches_from(args);
    AppArgs::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}
