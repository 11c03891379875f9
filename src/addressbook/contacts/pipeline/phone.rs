/// Area code assumed for seven-digit local numbers.
pub const LOCAL_AREA_CODE: &str = "251";
/// Prefix added to ten-digit national numbers.
pub const COUNTRY_PREFIX: &str = "1";

const FORMATTING_CHARS: [char; 4] = ['+', '(', ')', '-'];

/// Removes `+ ( ) -` and whitespace from a phone candidate.
pub fn strip_formatting(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !FORMATTING_CHARS.contains(ch) && !ch.is_whitespace())
        .collect()
}

/// Rewrites a phone candidate into its canonical form.
///
/// Ten bare digits gain the country prefix, seven bare digits gain the local
/// area code, and anything else is returned with only the formatting removed.
pub fn normalize_phone(raw: &str) -> String {
    let stripped = strip_formatting(raw);
    if stripped.is_empty() || !stripped.bytes().all(|byte| byte.is_ascii_digit()) {
        return stripped;
    }

    match stripped.len() {
        10 => format!("{COUNTRY_PREFIX}{stripped}"),
        7 => format!("{LOCAL_AREA_CODE}{stripped}"),
        _ => stripped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalises_known_lengths() {
        assert_eq!(normalize_phone("(555) 123-4567"), "15551234567");
        assert_eq!(normalize_phone("123-4567"), "2511234567");
        assert_eq!(normalize_phone("+1 555 123 4567"), "15551234567");
    }

    #[test]
    fn passes_other_shapes_through() {
        assert_eq!(normalize_phone(""), "");
        assert_eq!(normalize_phone(" - "), "");
        assert_eq!(normalize_phone("555-12"), "55512");
        assert_eq!(normalize_phone("555.123.4567"), "555.123.4567");
        assert_eq!(normalize_phone("ext 1234567"), "ext1234567");
    }
}
