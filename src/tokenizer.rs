use std::collections::HashSet;

use regex::Regex;

/// English stop words (the NLTK list), plus the ambiguous target word "line"
/// and its plural, so the target word never becomes a feature of its own
/// sense. Membership is case-sensitive; tokens are never case-folded.
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't", "line", "lines",
];

/// Reduces raw corpus lines to ordered content tokens.
///
/// Inline markup is stripped first, then maximal runs of word characters or
/// apostrophes are extracted left to right, and stop words are dropped. No
/// stemming, no case normalization.
pub struct Tokenizer {
    tag_pattern: Regex,
    word_pattern: Regex,
    stop_words: HashSet<&'static str>,
}

impl Tokenizer {
    /// Creates a new instance of [`Tokenizer`] with the default stop words.
    pub fn new() -> Self {
        Tokenizer {
            tag_pattern: Regex::new(r"<[^>]*>").unwrap(),
            word_pattern: Regex::new(r"[\w']+").unwrap(),
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Tokenizes one sentence-bearing line.
    ///
    /// Malformed input is not an error, it simply yields fewer tokens; the
    /// result may be empty. Case is preserved, so only exact matches against
    /// the (lowercase) stop list are dropped.
    pub fn tokenize(&self, line: &str) -> Vec<String> {
        let text = self.tag_pattern.replace_all(line, "");
        self.word_pattern
            .find_iter(&text)
            .map(|word| word.as_str())
            .filter(|word| !self.stop_words.contains(word))
            .map(|word| word.to_string())
            .collect()
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_markup_and_punctuation() {
        let tokenizer = Tokenizer::new();

        let tokens = tokenizer.tokenize(" <s> The operator said: speak up! </s>");

        // "The" survives because stop-word matching is case-sensitive.
        assert_eq!(tokens, vec!["The", "operator", "said", "speak"]);
    }

    #[test]
    fn test_tokenize_drops_target_word_and_plural() {
        let tokenizer = Tokenizer::new();

        let tokens = tokenizer.tokenize("the line and lines in a phone line");

        assert_eq!(tokens, vec!["phone"]);
    }

    #[test]
    fn test_tokenize_preserves_case() {
        let tokenizer = Tokenizer::new();

        // Only the exact lowercase forms are on the stop list.
        let tokens = tokenizer.tokenize("Line LINES Telephone");

        assert_eq!(tokens, vec!["Line", "LINES", "Telephone"]);
    }

    #[test]
    fn test_tokenize_keeps_apostrophes() {
        let tokenizer = Tokenizer::new();

        let tokens = tokenizer.tokenize("you can't unplug it");

        assert_eq!(tokens, vec!["can't", "unplug"]);
    }

    #[test]
    fn test_tokenize_may_be_empty() {
        let tokenizer = Tokenizer::new();

        assert!(tokenizer.tokenize("<s> it is a the of </s>").is_empty());
        assert!(tokenizer.tokenize("<instance id=\"x\">").is_empty());
        assert!(tokenizer.tokenize("").is_empty());
    }

    #[test]
    fn test_is_stop_word() {
        let tokenizer = Tokenizer::new();

        assert!(tokenizer.is_stop_word("the"));
        assert!(tokenizer.is_stop_word("line"));
        assert!(tokenizer.is_stop_word("lines"));
        assert!(!tokenizer.is_stop_word("Line"));
        assert!(!tokenizer.is_stop_word("telephone"));
    }
}
