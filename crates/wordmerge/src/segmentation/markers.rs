//! # Word Boundary Markers

/// Marks the first symbol of a word; stands in for the preceding whitespace.
pub const WORD_START_MARKER: char = '\u{2581}';

/// [`WORD_START_MARKER`] as a string slice.
pub const WORD_START_MARKER_STR: &str = "\u{2581}";

/// Terminates a word's symbol sequence; never participates in a merge.
pub const END_OF_WORD_MARKER: &str = "</w>";

/// The default reserved unknown token.
pub const DEFAULT_UNK_TOKEN: &str = "<unk>";

/// Is this symbol exactly the end-of-word marker?
pub fn is_end_of_word(symbol: &str) -> bool {
    symbol == END_OF_WORD_MARKER
}

/// Strip a trailing end-of-word marker, leaving any other content intact.
pub fn strip_end_of_word(symbol: &str) -> &str {
    symbol.strip_suffix(END_OF_WORD_MARKER).unwrap_or(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_str() {
        assert_eq!(WORD_START_MARKER.to_string(), WORD_START_MARKER_STR);
    }

    #[test]
    fn test_strip_end_of_word() {
        assert_eq!(strip_end_of_word("ab</w>"), "ab");
        assert_eq!(strip_end_of_word("</w>"), "");
        assert_eq!(strip_end_of_word("ab"), "ab");
        assert_eq!(strip_end_of_word("</w>ab"), "</w>ab");

        assert!(is_end_of_word("</w>"));
        assert!(!is_end_of_word("a</w>"));
    }
}
