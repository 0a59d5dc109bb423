//! Parsing of the file-selection slot.
//!
//! The picker writes one path per line. Surrounding whitespace is trimmed,
//! blank lines and `#` comments are ignored, and order is preserved so the
//! context embeds files in the order they were picked.

/// Parse the file-selection slot into an ordered list of paths.
pub fn parse_file_selection(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection() {
        assert!(parse_file_selection("").is_empty());
        assert!(parse_file_selection("\n  \n").is_empty());
    }

    #[test]
    fn keeps_order_and_trims() {
        let parsed = parse_file_selection("  src/b.rs\nsrc/a.rs  \r\n\n# picked last\nREADME.md\n");
        assert_eq!(parsed, vec!["src/b.rs", "src/a.rs", "README.md"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let parsed = parse_file_selection("a.txt\na.txt\n");
        assert_eq!(parsed.len(), 2);
    }
}
