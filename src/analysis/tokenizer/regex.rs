//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, ZipfianError};

/// Word pattern for Latin-script languages.
///
/// A run of base Latin or accented letters, optionally followed by one
/// apostrophe and a further run of letters (`don't`, `l'homme`, `geht's`).
pub const WORD_PATTERN: &str = r"(?i)[a-zäöüßàâçéèêëîïôûùÿœæ]+(?:'[a-zäöüß]+)?";

/// A regex-based tokenizer that extracts tokens using regular expressions.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a tokenizer using [`WORD_PATTERN`].
    pub fn words() -> Result<Self> {
        Self::with_pattern(WORD_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| ZipfianError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &RegexTokenizer, input: &str) -> Vec<String> {
        tokenizer
            .tokenize(input)
            .unwrap()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_regex_tokenizer_offsets() {
        let tokenizer = RegexTokenizer::words().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
    }

    #[test]
    fn test_words_skip_digits_and_punctuation() {
        let tokenizer = RegexTokenizer::words().unwrap();
        assert_eq!(
            texts(&tokenizer, "In 2024, prices rose 3.5% -- again!"),
            vec!["In", "prices", "rose", "again"]
        );
    }

    #[test]
    fn test_words_keep_one_apostrophe_suffix() {
        let tokenizer = RegexTokenizer::words().unwrap();
        assert_eq!(
            texts(&tokenizer, "don't l'homme rock'n'roll 'quoted'"),
            vec!["don't", "l'homme", "rock'n", "roll", "quoted"]
        );
    }

    #[test]
    fn test_words_accept_accented_letters() {
        let tokenizer = RegexTokenizer::words().unwrap();
        assert_eq!(
            texts(&tokenizer, "Größe café naïve cœur Ärger"),
            vec!["Größe", "café", "naïve", "cœur", "Ärger"]
        );
    }

    #[test]
    fn test_invalid_pattern() {
        let result = RegexTokenizer::with_pattern("[unclosed");
        assert!(result.is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::words().unwrap().name(), "regex");
    }
}
