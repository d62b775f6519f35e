//! N-gram frequency extraction.
//!
//! Turns a raw document into a normalized frequency distribution over
//! n-gram keys: normalize, tokenize, count, divide by the total count.
//! The distribution's values sum to 1.0 unless the document produced no
//! n-grams at all, in which case the distribution is empty.

use rustc_hash::FxHashMap;

use crate::analyzer::normalizer::TextNormalizer;
use crate::analyzer::tokenizer::{Tokenize, WhitespaceTokenizer};

/// Frequency distribution over n-gram keys.
///
/// Values are probabilities in `[0, 1]` and sum to 1.0 for a non-empty
/// distribution.
pub type NgramDistribution = FxHashMap<String, f64>;

/// Extracts per-document n-gram distributions.
///
/// Owns the normalizer and the tokenizer so one extractor can be reused
/// across a whole batch of documents.
///
/// # Windowing
///
/// The key space is built from single tokens drawn from the token
/// sequence starting at index `n`: requesting a higher order shortens
/// the sequence rather than widening the window, so keys are always
/// unigrams. This reproduces the established scoring behavior that
/// existing lexica were calibrated against; see the windowing tests.
#[derive(Debug, Default)]
pub struct NgramExtractor<T = WhitespaceTokenizer> {
    normalizer: TextNormalizer,
    tokenizer: T,
}

impl NgramExtractor<WhitespaceTokenizer> {
    /// Creates an extractor with the default whitespace tokenizer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Tokenize> NgramExtractor<T> {
    /// Creates an extractor around a custom tokenizer.
    pub fn with_tokenizer(tokenizer: T) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            tokenizer,
        }
    }

    /// Extracts the n-gram distribution of one document.
    ///
    /// Empty documents, or an offset past the end of the token sequence,
    /// yield the empty distribution rather than dividing by zero.
    pub fn extract(&self, document: &str, n: usize) -> NgramDistribution {
        let normalized = self.normalizer.normalize(document);

        let mut tokens: Vec<&str> = Vec::new();
        self.tokenizer.tokenize(&normalized, |t| tokens.push(t));

        let grams = &tokens[n.min(tokens.len())..];
        if grams.is_empty() {
            return NgramDistribution::default();
        }

        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for &gram in grams {
            *counts.entry(gram).or_insert(0) += 1;
        }

        let total = grams.len() as f64;
        counts
            .into_iter()
            .map(|(gram, count)| (gram.to_string(), count as f64 / total))
            .collect()
    }
}
