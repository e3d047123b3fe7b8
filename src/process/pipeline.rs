//! Parse → render → format
//!
//! Everything here is in memory; nothing is written until the caller hands
//! the result to the writer.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::format::format_source_with;
use crate::parser::{parse_document, SkippedLine};
use crate::render::render_mapped;
use crate::Result;

/// Output of a successful generation
#[derive(Debug, Clone)]
pub struct Generated {
    /// Formatted Rust source
    pub source: String,
    /// Number of constants emitted
    pub entry_count: usize,
    /// Input lines that produced no constant
    pub skipped: Vec<SkippedLine>,
}

/// Run the in-memory stages on `input`
///
/// # Errors
///
/// Fails on read errors, on skipped lines in strict mode, and when the rendered
/// text is rejected by the formatter. Formatter errors on a constant name the
/// input line and raw name it came from.
pub fn generate_source<R: BufRead>(input: R, config: &Config) -> Result<Generated> {
    let report = parse_document(input, config.strict)?;
    let rendered = render_mapped(&report.document, config);
    let source = format_source_with(&rendered.text, config.indent, |line_number| {
        rendered.describe_line(line_number)
    })?;

    Ok(Generated {
        source,
        entry_count: report.document.len(),
        skipped: report.skipped,
    })
}

/// Generate from `input` and write the formatted source to `output`
///
/// Nothing is written unless every stage succeeds.
pub fn generate<R: BufRead, W: Write>(input: R, output: &mut W, config: &Config) -> Result<()> {
    let generated = generate_source(input, config)?;
    output.write_all(generated.source.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_generate_small_listing() {
        let input = "gps_fixed e1b1\n24_hours ab12\njustoneword\n";
        let mut output = Vec::new();
        generate(Cursor::new(input), &mut output, &Config::default()).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.ends_with(
            "#[allow(non_upper_case_globals)]\npub mod assets {\n    pub const GpsFixed: u32 = 0xe1b1;\n    pub const N24Hours: u32 = 0xab12;\n}\n"
        ));
    }

    #[test]
    fn test_generate_source_reports_counts() {
        let generated =
            generate_source(Cursor::new("a 1\nbad\nb 2\n"), &Config::default()).unwrap();
        assert_eq!(generated.entry_count, 2);
        assert_eq!(generated.skipped.len(), 1);
        assert_eq!(generated.skipped[0].line_number, 2);
    }

    #[test]
    fn test_generate_writes_nothing_on_format_error() {
        let mut output = Vec::new();
        let result = generate(
            Cursor::new("home e88a\narrow-back e5c4\n"),
            &mut output,
            &Config::default(),
        );
        assert!(result.is_err());
        assert!(output.is_empty());
    }

    #[test]
    fn test_format_error_names_input_line() {
        let err = generate_source(Cursor::new("arrow-back e5c4\n"), &Config::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "input line 1 (`arrow-back`)");
        assert!(format!("{err:#}").contains("`Arrow-back` is not a valid identifier"));

        let err = generate_source(
            Cursor::new("home e88a\n\nbad\nself e000\n"),
            &Config::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "input line 4 (`self`)");
    }

    #[test]
    fn test_non_utf8_name_fails_at_its_input_line() {
        let skippable: &[u8] = b"home e88a\n\nnot\xe9s\nalarm e855\n";
        let generated = generate_source(Cursor::new(skippable), &Config::default()).unwrap();
        assert_eq!(generated.entry_count, 2);
        assert_eq!(generated.skipped[0].line_number, 3);

        let bad_name: &[u8] = b"home e88a\n\nnot\xe9s\nalarm e855\n\xffbad e000\n";
        let err = generate_source(Cursor::new(bad_name), &Config::default()).unwrap_err();
        assert!(err.to_string().starts_with("input line 5 "), "{err}");
    }

    #[test]
    fn test_generate_strict_mode() {
        let config = Config {
            strict: true,
            ..Default::default()
        };
        let mut output = Vec::new();
        assert!(generate(Cursor::new("home e88a\nbad\n"), &mut output, &config).is_err());
        assert!(output.is_empty());
    }
}
