//! Core types and configuration for the lexiscore scoring engine.
//!
//! This crate provides the fundamental types that are shared across
//! the lexiscore ecosystem. Keeping types separate ensures:
//!
//! - **Cross-crate compatibility**: Core and any future CLI share the same types
//! - **Clean boundaries**: No circular dependencies between crates

#![warn(missing_docs)]

use rustc_hash::FxHashMap;

/// Numeric weight attached to a term for one output category.
pub type Weight = f64;

/// Per-category weights for a single lexicon term.
///
/// Keys are category names (output dimensions such as sentiment or
/// affect axes), values are real-valued weights. Mapping semantics:
/// unique keys, no ordering guarantee.
pub type CategoryWeights = FxHashMap<String, Weight>;

/// A full term-weight table: term → category → weight.
///
/// This is the on-disk shape of a lexicon file and the in-memory shape
/// of a merged model. The reserved [`INTERCEPT_KEY`] term, if present,
/// holds per-category constants applied once to every document.
pub type LexiconTable = FxHashMap<String, CategoryWeights>;

/// Per-category scores accumulated for one document.
pub type CategoryScores = FxHashMap<String, f64>;

/// Reserved pseudo-term holding per-category additive constants.
///
/// The intercept is applied exactly once per document per category,
/// independent of document content.
pub const INTERCEPT_KEY: &str = "_intercept";

/// Category scored with binary presence semantics.
///
/// Terms contributing to this category add their raw weight when the
/// term occurs in a document at all; the term's frequency is ignored.
pub const AFFECT_CATEGORY: &str = "affect";

/// Scoring configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorerConfig {
    /// N-gram order used when building per-document distributions.
    ///
    /// Extension point for multi-n lexica; single-term lexica use 1.
    pub ngram_order: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self { ngram_order: 1 }
    }
}

impl ScorerConfig {
    /// Creates the standard unigram configuration.
    pub const fn unigram() -> Self {
        Self { ngram_order: 1 }
    }
}
