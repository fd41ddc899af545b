//! Text analysis module for zipfian.
//!
//! Language detection, tokenization and stop-word filtering: everything that
//! turns raw document text into the ordered list of content words that the
//! frequency and Zipf stages consume.

pub mod analyzer;
pub mod language;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
