//! Length filter implementation.

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Shortest token kept by [`LengthFilter::default`].
pub const DEFAULT_MIN_LENGTH: usize = 2;

/// A filter that drops tokens shorter than a minimum number of characters.
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min: usize,
}

impl LengthFilter {
    /// Create a new length filter keeping tokens of at least `min` characters.
    pub fn new(min: usize) -> Self {
        LengthFilter { min }
    }

    /// Get the minimum length.
    pub fn min(&self) -> usize {
        self.min
    }
}

impl Default for LengthFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH)
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min = self.min;
        let kept: Vec<Token> = tokens.filter(|token| token.char_len() >= min).collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_filter() {
        let filter = LengthFilter::default();
        let tokens = vec![
            Token::new("a", 0),
            Token::new("is", 1),
            Token::new("ß", 2),
            Token::new("öl", 3),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "is");
        assert_eq!(result[1].text, "öl");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LengthFilter::new(3).name(), "length");
        assert_eq!(LengthFilter::new(3).min(), 3);
    }
}
