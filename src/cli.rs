//! Command-line interface for genicodes.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, Command};

use crate::format::IntType;

/// CLI arguments parsed from command line
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Codepoint listing to read (`-` for stdin)
    pub input: Option<PathBuf>,

    /// File to write; stdout when absent
    pub output: Option<PathBuf>,

    /// Name of the generated module
    pub package: Option<String>,

    /// Integer type of the generated constants
    pub value_type: Option<String>,

    /// Spaces per indent level
    pub indent: Option<usize>,

    /// Fail on malformed input lines
    pub strict: bool,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Enable debug output
    pub debug: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("genicodes")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates a Rust module of named constants from an icon font codepoints file")
        .arg(
            Arg::new("input")
                .help("Codepoints file, one `<name> <hex>` pair per line (- for stdin)")
                .value_name("INPUT")
                .index(1)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .help("Output file [default: stdout]")
                .value_name("OUTPUT")
                .index(2)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("package")
                .short('p')
                .long("package")
                .help("Package (module) name [default: assets]")
                .value_name("NAME"),
        )
        .arg(
            Arg::new("type")
                .short('t')
                .long("type")
                .help("Integer type of the constants [default: u32]")
                .value_name("TYPE")
                .value_parser(PossibleValuesParser::new(IntType::NAMES)),
        )
        .arg(
            Arg::new("indent")
                .short('i')
                .long("indent")
                .help("Number of spaces per indent level [default: 4]")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail on malformed lines instead of skipping them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output (shows config, skipped lines, destination)")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        input: matches.get_one::<PathBuf>("input").cloned(),
        output: matches.get_one::<PathBuf>("output").cloned(),
        package: matches.get_one::<String>("package").cloned(),
        value_type: matches.get_one::<String>("type").cloned(),
        indent: matches.get_one::<usize>("indent").copied(),
        strict: matches.get_flag("strict"),
        config: matches.get_one::<PathBuf>("config").cloned(),
        debug: matches.get_flag("debug"),
    }
}
