//! Word counting

/// Whitespace tokenizer used for every word budget in the chunker.
///
/// A token is a maximal run of non-whitespace characters. Punctuation stays
/// attached to its word, so `"Hello, world!"` counts as two tokens.
pub struct WordTokenizer;

impl WordTokenizer {
    /// Count tokens in text
    pub fn count(text: &str) -> usize {
        text.split_whitespace().count()
    }
}

/// Shorthand for [`WordTokenizer::count`]
pub fn word_count(text: &str) -> usize {
    WordTokenizer::count(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_tokens() {
        let text = "Hello world, this is a test!";
        assert_eq!(WordTokenizer::count(text), 6);
    }

    #[test]
    fn test_runs_of_whitespace() {
        assert_eq!(word_count("  one\t\ttwo\n\nthree   "), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count(" \n\t "), 0);
    }

    #[test]
    fn test_punctuation_stays_attached() {
        assert_eq!(WordTokenizer::count("e.g. one-two, (three)"), 3);
        assert_eq!(WordTokenizer::count("Hello , world !"), 4);
    }
}
