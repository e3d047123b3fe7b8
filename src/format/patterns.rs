/// Regex patterns for the Rust subset emitted by the generator
///
/// All patterns are compiled once at first use via `LazyLock`. Line patterns
/// run against whitespace-collapsed, trimmed lines.
use std::sync::LazyLock;

use regex::Regex;

/// Build a regex from a compile-time constant pattern.
///
/// # Panics
///
/// Panics if the pattern is invalid. All patterns in this module are
/// constants covered by tests, so this only fires on a programming error.
fn build_re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|_| panic!("Invalid regex pattern: {pattern}"))
}

// ===== LINE FORMS =====

/// `// text`, `/// text` and `//! text`
pub static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"^//(.*)$"));

/// `#[...]` or `#![...]`
pub static ATTRIBUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"^#\s?(!)?\s?\[\s?(.*?)\s?\]$"));

/// `pub mod name {`
pub static MOD_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"^(pub\s)?mod\s([^\s{]+)\s?\{$"));

/// `pub const Name: ty = value;`
pub static CONST_RE: LazyLock<Regex> = LazyLock::new(|| {
    build_re(r"^(pub\s)?const\s([^\s:]+)\s?:\s?([^\s=]+)\s?=\s?([^\s;]+)\s?;$")
});

/// `}`
pub static CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"^\}$"));

// ===== TOKENS =====

/// ASCII identifier (keywords are checked separately)
pub static IDENT_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"^[A-Za-z_][A-Za-z0-9_]*$"));

/// Hexadecimal integer literal, digits captured without the prefix
pub static HEX_LITERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"^0x([0-9A-Fa-f_]*[0-9A-Fa-f][0-9A-Fa-f_]*)$"));

/// Run of whitespace
pub static WHITESPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"\s+"));

/// Strict and reserved keywords (2021 edition); none may be used as an identifier
pub const RESERVED_WORDS: &[&str] = &[
    "_", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];
