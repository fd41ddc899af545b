//! Language-aware analyzer used by the analysis pipeline.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::language::Language;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::length::LengthFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// Extracts normalized content words for one [`Language`].
///
/// Pipeline: word regex → lowercase → drop single letters → drop the
/// language's stop words.
pub struct LanguageAnalyzer {
    language: Language,
    inner: PipelineAnalyzer,
}

impl LanguageAnalyzer {
    pub fn new(language: Language) -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::words()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(LengthFilter::default()))
            .add_filter(Arc::new(language.stop_filter()))
            .with_name(format!("language_{}", language.code()));

        Ok(Self {
            language,
            inner: analyzer,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Analyze `text` and collect the surviving token texts in order.
    pub fn words(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}

impl Analyzer for LanguageAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "language"
    }
}

impl Debug for LanguageAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageAnalyzer")
            .field("language", &self.language)
            .field("inner", &self.inner)
            .finish()
    }
}
