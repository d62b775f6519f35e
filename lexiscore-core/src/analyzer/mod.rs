//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Cleans raw text into canonical placeholder form
//! - **Tokenizer**: Splits normalized text into tokens (trait seam)
//! - **Ngrams**: Builds per-document n-gram frequency distributions

pub mod ngrams;
pub mod normalizer;
pub mod tokenizer;

pub use ngrams::{NgramDistribution, NgramExtractor};
pub use normalizer::TextNormalizer;
pub use tokenizer::{Tokenize, WhitespaceTokenizer};
