//! genicodes - Icon font codepoints to Rust constants

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{bail, Context};
use genicodes::parser::SkippedLine;
use genicodes::{generate_source, parse_args, write_output, CliArgs, Config, Destination, Result};

fn main() -> Result<()> {
    // Bare invocation shows usage
    if std::env::args_os().len() <= 1 {
        print_usage();
        return Ok(());
    }

    let args = parse_args();
    let Some(input) = args.input.as_deref() else {
        bail!("input file not supplied");
    };
    let use_stdin = input.as_os_str() == "-";

    let config = build_config(&args, if use_stdin { None } else { Some(input) })?;

    let generated = if use_stdin {
        generate_source(io::stdin().lock(), &config)?
    } else {
        let file =
            File::open(input).with_context(|| format!("failed to open {}", input.display()))?;
        generate_source(BufReader::new(file), &config)
            .with_context(|| format!("failed to generate from {}", input.display()))?
    };

    let destination = Destination::from_path(args.output.as_deref());
    if args.debug {
        print_skipped_debug(&generated.skipped);
        eprintln!(
            "[DEBUG] Writing {} constants to {destination}",
            generated.entry_count
        );
    }

    write_output(&destination, generated.source.as_bytes())
}

/// Build configuration from CLI args and config files
///
/// With no explicit `--config`, files are discovered upward from `for_path`
/// (or the current directory when reading stdin).
fn build_config(args: &CliArgs, for_path: Option<&Path>) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        if args.debug {
            eprintln!(
                "[DEBUG] Using explicit config file: {}",
                config_path.display()
            );
        }
        Config::from_toml_file(config_path)?
    } else {
        let start = match for_path {
            Some(path) => path.to_path_buf(),
            None => std::env::current_dir().unwrap_or_default(),
        };
        if args.debug {
            let discovered = Config::discover_config_files(&start);
            if discovered.is_empty() {
                eprintln!("[DEBUG] No config files discovered for: {}", start.display());
            } else {
                eprintln!("[DEBUG] Discovered config files for {}:", start.display());
                for f in &discovered {
                    eprintln!("[DEBUG]   - {}", f.display());
                }
            }
        }
        Config::from_discovered_files(&start)?
    };

    // Override with CLI arguments
    if let Some(package) = &args.package {
        config.package.clone_from(package);
    }
    if let Some(value_type) = &args.value_type {
        config.value_type.clone_from(value_type);
    }
    if let Some(indent) = args.indent {
        config.indent = indent;
    }
    if args.strict {
        config.strict = true;
    }

    if args.debug {
        print_config_debug(&config);
    }

    if let Some(error) = config.validate() {
        bail!("Invalid configuration: {error}");
    }

    Ok(config)
}

/// Print configuration values in debug mode
fn print_config_debug(config: &Config) {
    eprintln!("[DEBUG] Configuration:");
    eprintln!("[DEBUG]   package: {}", config.package);
    eprintln!("[DEBUG]   value_type: {}", config.value_type);
    eprintln!("[DEBUG]   indent: {}", config.indent);
    eprintln!("[DEBUG]   strict: {}", config.strict);
    eprintln!("[DEBUG]   header: {:?}", config.header);
}

/// Report ignored input lines in debug mode
fn print_skipped_debug(skipped: &[SkippedLine]) {
    if skipped.is_empty() {
        return;
    }
    eprintln!("[DEBUG] Skipped {} input lines:", skipped.len());
    for line in skipped {
        eprintln!("[DEBUG]   line {}: {}", line.line_number, line.reason);
    }
}

fn print_usage() {
    println!("genicodes v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Generates a Rust module of named constants from an icon font codepoints file.");
    println!();
    println!("Usage:");
    println!("  genicodes [OPTIONS] <INPUT> [OUTPUT]");
    println!();
    println!("Examples:");
    println!("  genicodes codepoints                  # Print generated module to stdout");
    println!("  genicodes codepoints src/icons.rs     # Write generated module to a file");
    println!("  genicodes -p icons codepoints out.rs  # Name the module `icons`");
    println!("  genicodes - < codepoints              # Read from stdin");
    println!();
    println!("Options:");
    println!("  -p, --package <NAME>   Package (module) name [default: assets]");
    println!("  -t, --type <TYPE>      Constant type: u16, u32, u64 [default: u32]");
    println!("  -i, --indent <NUM>     Spaces per indent level [default: 4]");
    println!("      --strict           Fail on malformed lines instead of skipping them");
    println!("  -c, --config <FILE>    Config file path (overrides auto-discovery)");
    println!("  -D, --debug            Enable debug output");
    println!("  -h, --help             Print help");
    println!("  -V, --version          Print version");
    println!();
    println!("Input format:");
    println!("  One `<name> <hex>` pair per line, separated by a single space.");
    println!("  Blank and malformed lines are ignored unless --strict is given.");
    println!();
    println!("Config file auto-discovery:");
    println!("  Searches for genicodes.toml in the home directory, then in parent");
    println!("  directories from the root down to the input file's directory.");
    println!("  More specific configs (closer to the input) override less specific ones.");
}
