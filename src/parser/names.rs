/// Name normalization: raw codepoint names to Rust identifiers
///
/// `gps_fixed` becomes `GpsFixed`, `24_hours` becomes `N24Hours`.

/// Separator between words of a raw name
const SEGMENT_SEPARATOR: char = '_';

/// Prefix applied to names that would otherwise start with a digit
pub const DIGIT_PREFIX: char = 'N';

/// Uppercase the first character of a segment, leaving the rest verbatim
fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(segment.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Normalize a raw name into identifier form
///
/// Splits on `_`, capitalizes the first character of every segment, joins the
/// segments and prefixes `N` when the result starts with an ASCII digit.
/// Returns an empty string when the name has no characters besides `_`.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let joined: String = raw.split(SEGMENT_SEPARATOR).map(capitalize_first).collect();

    if joined.starts_with(|c: char| c.is_ascii_digit()) {
        let mut prefixed = String::with_capacity(joined.len() + 1);
        prefixed.push(DIGIT_PREFIX);
        prefixed.push_str(&joined);
        prefixed
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(normalize_name("home"), "Home");
    }

    #[test]
    fn test_underscore_segments() {
        assert_eq!(normalize_name("gps_fixed"), "GpsFixed");
        assert_eq!(normalize_name("add_circle_outline"), "AddCircleOutline");
    }

    #[test]
    fn test_leading_digit_gets_prefix() {
        assert_eq!(normalize_name("24_hours"), "N24Hours");
        assert_eq!(normalize_name("3d_rotation"), "N3dRotation");
        assert_eq!(normalize_name("360"), "N360");
    }

    #[test]
    fn test_rest_of_segment_is_verbatim() {
        // Only the first letter changes case
        assert_eq!(normalize_name("wifi_HOTspot"), "WifiHOTspot");
        assert_eq!(normalize_name("mRNA"), "MRNA");
    }

    #[test]
    fn test_empty_segments_vanish() {
        assert_eq!(normalize_name("a__b"), "AB");
        assert_eq!(normalize_name("_private"), "Private");
        assert_eq!(normalize_name("trailing_"), "Trailing");
    }

    #[test]
    fn test_only_separators_is_empty() {
        assert_eq!(normalize_name("_"), "");
        assert_eq!(normalize_name("___"), "");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_non_ascii_first_letter_untouched() {
        assert_eq!(normalize_name("école"), "école");
    }

    #[test]
    fn test_digit_after_prefix_segment() {
        // Digits only matter at the very start of the joined name
        assert_eq!(normalize_name("battery_20"), "Battery20");
    }
}
