//! Dictionary-based document scoring engine.
//!
//! lexiscore scores free-text documents against one or more term-weight
//! lexica, producing per-category numeric scores per document - a
//! lightweight alternative to trained models for text-analytics
//! pipelines.
//!
//! The pipeline: raw document → [`analyzer::TextNormalizer`] →
//! tokenizer → [`analyzer::NgramExtractor`] → frequency distribution →
//! [`scorer::Scorer`] reading a [`lexicon::LexiconModel`] (built via a
//! [`lexicon::LexiconStore`]) → category score mapping.
//!
//! Everything is single-threaded and synchronous; the only I/O is the
//! one-time lexicon load/list/upload against the store. A
//! [`lexicon::LexiconModel`] must not be mutated while a batch is
//! scoring.
//!
//! # Quick start
//!
//! ```
//! use lexiscore_core::lexicon::LexiconModel;
//! use lexiscore_core::scorer::Scorer;
//! use lexiscore_types::LexiconTable;
//!
//! let table: LexiconTable = serde_json::from_str(
//!     r#"{"happy": {"pos": 1.0}, "_intercept": {"pos": 0.1}}"#,
//! ).unwrap();
//! let model = LexiconModel::from_table("mood", table);
//!
//! let scores = Scorer::new().score("happy happy", &model);
//! assert!((scores["pos"] - 1.1).abs() < 1e-12);
//! ```

pub mod analyzer;
pub mod lexicon;
pub mod scorer;

pub use analyzer::{NgramDistribution, NgramExtractor, TextNormalizer, Tokenize, WhitespaceTokenizer};
pub use lexicon::{DirStore, LexiconModel, LexiconStore, StoreError};
pub use scorer::Scorer;
