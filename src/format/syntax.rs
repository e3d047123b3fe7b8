/// Line-level syntax of generated sources
///
/// Classifies each line into one of the forms the generator emits and checks
/// the tokens (identifiers, types, literals) a Rust compiler would reject.
use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail};

use super::patterns::{
    ATTRIBUTE_RE, CLOSE_RE, COMMENT_RE, CONST_RE, HEX_LITERAL_RE, IDENT_RE, MOD_OPEN_RE,
    RESERVED_WORDS,
};
use super::whitespace::collapse_whitespace;
use crate::error::Result;

/// Unsigned integer types a generated constant may have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntType {
    U16,
    U32,
    U64,
}

impl IntType {
    /// Type names as written in source and configuration, narrowest first
    pub const NAMES: [&'static str; 3] = ["u16", "u32", "u64"];

    /// Largest value representable by the type
    #[must_use]
    pub fn max_value(self) -> u128 {
        match self {
            IntType::U16 => u128::from(u16::MAX),
            IntType::U32 => u128::from(u32::MAX),
            IntType::U64 => u128::from(u64::MAX),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            IntType::U16 => "u16",
            IntType::U32 => "u32",
            IntType::U64 => "u64",
        }
    }
}

impl FromStr for IntType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "u16" => Ok(IntType::U16),
            "u32" => Ok(IntType::U32),
            "u64" => Ok(IntType::U64),
            other => Err(anyhow!("unsupported constant type `{other}`")),
        }
    }
}

impl fmt::Display for IntType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified line of generated source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLine {
    Blank,
    /// Text following `//`, trailing whitespace removed
    Comment(String),
    Attribute {
        inner: bool,
        body: String,
    },
    ModOpen {
        public: bool,
        name: String,
    },
    Const {
        public: bool,
        name: String,
        ty: IntType,
        value: String,
    },
    Close,
}

impl SourceLine {
    /// Whether this line is an item an outer attribute can apply to
    #[must_use]
    pub fn is_item(&self) -> bool {
        matches!(self, SourceLine::ModOpen { .. } | SourceLine::Const { .. })
    }
}

impl fmt::Display for SourceLine {
    /// Canonical text of the line, without indentation
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vis = |public: bool| if public { "pub " } else { "" };
        match self {
            SourceLine::Blank => Ok(()),
            SourceLine::Comment(text) => write!(f, "//{text}"),
            SourceLine::Attribute { inner, body } => {
                write!(f, "#{}[{body}]", if *inner { "!" } else { "" })
            }
            SourceLine::ModOpen { public, name } => write!(f, "{}mod {name} {{", vis(*public)),
            SourceLine::Const {
                public,
                name,
                ty,
                value,
            } => write!(f, "{}const {name}: {ty} = {value};", vis(*public)),
            SourceLine::Close => f.write_str("}"),
        }
    }
}

/// Check that `name` is usable as a Rust identifier
pub fn check_identifier(name: &str) -> Result<()> {
    if !IDENT_RE.is_match(name) {
        bail!("`{name}` is not a valid identifier");
    }
    if RESERVED_WORDS.contains(&name) {
        bail!("`{name}` is a reserved keyword");
    }
    Ok(())
}

/// Check a hexadecimal literal and that it fits `ty`
pub fn check_hex_literal(literal: &str, ty: IntType) -> Result<()> {
    let Some(caps) = HEX_LITERAL_RE.captures(literal) else {
        bail!("`{literal}` is not a hexadecimal literal");
    };
    let digits: String = caps[1].chars().filter(|c| *c != '_').collect();
    let value = u128::from_str_radix(&digits, 16)
        .map_err(|_| anyhow!("literal `{literal}` out of range for `{ty}`"))?;
    if value > ty.max_value() {
        bail!("literal `{literal}` out of range for `{ty}`");
    }
    Ok(())
}

/// Classify a single line of source
///
/// Whitespace inside the line is not significant; it is collapsed before
/// matching. Comments are kept verbatim apart from trailing whitespace.
pub fn classify_line(line: &str) -> Result<SourceLine> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(SourceLine::Blank);
    }

    if let Some(caps) = COMMENT_RE.captures(trimmed) {
        return Ok(SourceLine::Comment(caps[1].to_string()));
    }

    let code = collapse_whitespace(trimmed);

    if CLOSE_RE.is_match(&code) {
        return Ok(SourceLine::Close);
    }

    if let Some(caps) = ATTRIBUTE_RE.captures(&code) {
        let body = caps[2].to_string();
        if body.is_empty() || !brackets_balanced(&body) {
            bail!("malformed attribute `{code}`");
        }
        return Ok(SourceLine::Attribute {
            inner: caps.get(1).is_some(),
            body,
        });
    }

    if let Some(caps) = MOD_OPEN_RE.captures(&code) {
        let name = &caps[2];
        check_identifier(name)?;
        return Ok(SourceLine::ModOpen {
            public: caps.get(1).is_some(),
            name: name.to_string(),
        });
    }

    if let Some(caps) = CONST_RE.captures(&code) {
        let name = &caps[2];
        check_identifier(name)?;
        let ty: IntType = caps[3].parse()?;
        let value = &caps[4];
        check_hex_literal(value, ty)?;
        return Ok(SourceLine::Const {
            public: caps.get(1).is_some(),
            name: name.to_string(),
            ty,
            value: value.to_string(),
        });
    }

    bail!("unexpected source `{code}`")
}

/// Check that (), [] and {} nest correctly
fn brackets_balanced(text: &str) -> bool {
    let mut stack = Vec::new();
    for c in text.chars() {
        match c {
            '(' | '[' | '{' => stack.push(c),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(expected) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_const() {
        let line = classify_line("\t\tpub const   GpsFixed:u32=0xe1b1;").unwrap();
        assert_eq!(
            line,
            SourceLine::Const {
                public: true,
                name: "GpsFixed".to_string(),
                ty: IntType::U32,
                value: "0xe1b1".to_string(),
            }
        );
        assert_eq!(line.to_string(), "pub const GpsFixed: u32 = 0xe1b1;");
    }

    #[test]
    fn test_classify_mod_and_close() {
        let open = classify_line("pub mod   assets{").unwrap();
        assert_eq!(open.to_string(), "pub mod assets {");
        assert_eq!(classify_line("  }  ").unwrap(), SourceLine::Close);
    }

    #[test]
    fn test_classify_comment_keeps_text() {
        let line = classify_line("   // from the  material icons   ").unwrap();
        assert_eq!(line.to_string(), "// from the  material icons");
        assert_eq!(classify_line("//").unwrap().to_string(), "//");
    }

    #[test]
    fn test_classify_attribute() {
        let line = classify_line("#[ allow(non_upper_case_globals) ]").unwrap();
        assert_eq!(line.to_string(), "#[allow(non_upper_case_globals)]");
        assert!(classify_line("#[allow(x]").is_err());
        assert!(classify_line("#[]").is_err());
    }

    #[test]
    fn test_reject_bad_identifier() {
        let err = classify_line("pub const Arrow-back: u32 = 0xe5c4;").unwrap_err();
        assert!(err.to_string().contains("Arrow-back"), "{err}");
        assert!(classify_line("pub const Self: u32 = 0x1;").is_err());
        assert!(classify_line("pub mod 3d {").is_err());
        assert!(classify_line("pub mod type {").is_err());
    }

    #[test]
    fn test_reject_bad_literal() {
        assert!(classify_line("pub const Home: u32 = 0xzz;").is_err());
        assert!(classify_line("pub const Home: u32 = 0x;").is_err());
        assert!(classify_line("pub const Home: u32 = e88a;").is_err());
    }

    #[test]
    fn test_literal_range() {
        assert!(check_hex_literal("0xffff", IntType::U16).is_ok());
        assert!(check_hex_literal("0x10000", IntType::U16).is_err());
        assert!(check_hex_literal("0xffff_ffff", IntType::U32).is_ok());
        assert!(check_hex_literal("0x1_0000_0000", IntType::U32).is_err());
        assert!(check_hex_literal("0xffff_ffff_ffff_ffff", IntType::U64).is_ok());
        assert!(check_hex_literal(&format!("0x1{}", "0".repeat(32)), IntType::U64).is_err());
    }

    #[test]
    fn test_reject_unknown_type() {
        let err = classify_line("pub const Home: f32 = 0xe88a;").unwrap_err();
        assert!(err.to_string().contains("unsupported constant type"));
    }

    #[test]
    fn test_reject_unexpected_line() {
        assert!(classify_line("fn main() {}").is_err());
        assert!(classify_line("/* block */").is_err());
        assert!(classify_line("Home = 0xe88a").is_err());
    }

    #[test]
    fn test_int_type_round_trip() {
        for name in IntType::NAMES {
            assert_eq!(name.parse::<IntType>().unwrap().as_str(), name);
        }
        assert!("u8".parse::<IntType>().is_err());
        assert!("u128".parse::<IntType>().is_err());
    }
}
