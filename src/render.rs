//! Template rendering: turns a [`Document`] into Rust source text.
//!
//! The template is fixed: a provenance comment, then one module holding a
//! constant per entry. Layout is left to [`format_source`](crate::format::format_source).
//! [`render_mapped`] also remembers which input line produced each rendered
//! line, so later stages can report errors against the listing.

use crate::config::Config;
use crate::document::{Document, Origin};

/// Lint allowance for the TitleCase constant names
const MODULE_ATTRIBUTE: &str = "#[allow(non_upper_case_globals)]";

/// Rendered source plus the input origin of each of its lines
#[derive(Debug, Clone, Default)]
pub struct Rendered {
    pub text: String,
    /// Indexed by 0-based rendered line; None for template lines
    origins: Vec<Option<Origin>>,
}

impl Rendered {
    fn push_line(&mut self, line: &str, origin: Option<&Origin>) {
        self.text.push_str(line);
        self.text.push('\n');
        self.origins.push(origin.cloned());
    }

    /// Input origin of a 1-based rendered line, if it came from an entry
    #[must_use]
    pub fn origin(&self, line_number: usize) -> Option<&Origin> {
        self.origins
            .get(line_number.checked_sub(1)?)
            .and_then(Option::as_ref)
    }

    /// Describe a 1-based rendered line for error messages
    ///
    /// Lines produced by an entry name the input line; template lines are
    /// described by their position in the generated text.
    #[must_use]
    pub fn describe_line(&self, line_number: usize) -> String {
        match self.origin(line_number) {
            Some(origin) => origin.to_string(),
            None => format!("generated line {line_number}"),
        }
    }
}

/// Render the header comment, one `//` line per line of `header`
fn render_header(header: &str, out: &mut Rendered) {
    if header.is_empty() {
        return;
    }
    for line in header.split('\n') {
        let line = line.trim_end();
        if line.is_empty() {
            out.push_line("//", None);
        } else {
            out.push_line(&format!("// {line}"), None);
        }
    }
}

/// Render the document into unformatted source, keeping the line map
///
/// Entries appear in document order. Names and values are inserted verbatim.
#[must_use]
pub fn render_mapped(document: &Document, config: &Config) -> Rendered {
    let mut out = Rendered::default();
    render_header(&config.header, &mut out);
    out.push_line(MODULE_ATTRIBUTE, None);
    out.push_line(&format!("pub mod {} {{", config.package), None);
    for entry in document {
        out.push_line(
            &format!(
                "pub const {}: {} = {};",
                entry.name, config.value_type, entry.value
            ),
            entry.origin.as_ref(),
        );
    }
    out.push_line("}", None);
    out
}

/// Render the document into unformatted source
#[must_use]
pub fn render(document: &Document, config: &Config) -> String {
    render_mapped(document, config).text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Entry, Origin};

    fn doc(entries: &[(&str, &str)]) -> Document {
        entries
            .iter()
            .map(|(name, code)| Entry::new((*name).to_string(), code))
            .collect()
    }

    #[test]
    fn test_render_default_template() {
        let rendered = render(
            &doc(&[("GpsFixed", "e1b1"), ("N24Hours", "ab12")]),
            &Config::default(),
        );
        let expected = "//
// This file was generated from the original 'codepoints' file
// from the material design icon fonts:
// https://github.com/google/material-design-icons
//
#[allow(non_upper_case_globals)]
pub mod assets {
pub const GpsFixed: u32 = 0xe1b1;
pub const N24Hours: u32 = 0xab12;
}
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_uses_config() {
        let config = Config {
            package: "icons".to_string(),
            value_type: "u16".to_string(),
            header: String::new(),
            ..Default::default()
        };
        let rendered = render(&doc(&[("Home", "e88a")]), &config);
        assert_eq!(
            rendered,
            "#[allow(non_upper_case_globals)]\npub mod icons {\npub const Home: u16 = 0xe88a;\n}\n"
        );
    }

    #[test]
    fn test_render_empty_document() {
        let config = Config {
            header: "generated".to_string(),
            ..Default::default()
        };
        assert_eq!(
            render(&Document::new(), &config),
            "// generated\n#[allow(non_upper_case_globals)]\npub mod assets {\n}\n"
        );
    }

    #[test]
    fn test_render_maps_entry_lines_to_input() {
        let config = Config {
            header: "one\ntwo".to_string(),
            ..Default::default()
        };
        let document: Document = [
            Entry::new("Home".to_string(), "e88a").with_origin(Origin {
                line_number: 3,
                raw_name: "home".to_string(),
            }),
            Entry::new("Alarm".to_string(), "e855"),
        ]
        .into_iter()
        .collect();
        let rendered = render_mapped(&document, &config);

        // Two header lines, the attribute and `pub mod` come first
        assert_eq!(rendered.text.lines().nth(4), Some("pub const Home: u32 = 0xe88a;"));
        assert_eq!(rendered.describe_line(5), "input line 3 (`home`)");
        assert_eq!(rendered.describe_line(6), "generated line 6");
        assert_eq!(rendered.describe_line(1), "generated line 1");
        assert_eq!(rendered.describe_line(0), "generated line 0");
        assert!(rendered.origin(99).is_none());
        assert_eq!(rendered.text, render(&document, &config));
    }
}
