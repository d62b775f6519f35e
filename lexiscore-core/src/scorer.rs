//! Weighted lexicon scoring.
//!
//! Combines a per-document n-gram distribution with a [`LexiconModel`]
//! to produce per-category scores. Accumulation is get-or-zero-then-add
//! via the map `entry` API, so categories appear in a result the first
//! time anything contributes to them - including categories defined only
//! by the intercept.

use lexiscore_types::{CategoryScores, ScorerConfig, AFFECT_CATEGORY};
use log::debug;

use crate::analyzer::{NgramExtractor, Tokenize, WhitespaceTokenizer};
use crate::lexicon::LexiconModel;

/// Scores documents against a lexicon model.
///
/// One scorer can serve a whole batch; it owns the n-gram extractor and
/// carries the configured n-gram order. Scoring never mutates the model,
/// but a model must not be merged into or removed from while a batch is
/// in flight - treat a loaded model as immutable for the duration.
///
/// # Example
///
/// ```
/// use lexiscore_core::scorer::Scorer;
/// use lexiscore_core::lexicon::LexiconModel;
///
/// let scorer = Scorer::new();
/// let results = scorer.score_batch(&["some document"], &LexiconModel::empty());
/// assert_eq!(results.len(), 1);
/// assert!(results[0].is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Scorer<T = WhitespaceTokenizer> {
    extractor: NgramExtractor<T>,
    config: ScorerConfig,
}

impl Scorer<WhitespaceTokenizer> {
    /// Creates a scorer with the default tokenizer and unigram order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scorer with the default tokenizer and a custom
    /// configuration.
    pub fn with_config(config: ScorerConfig) -> Self {
        Self {
            extractor: NgramExtractor::new(),
            config,
        }
    }
}

impl<T: Tokenize> Scorer<T> {
    /// Creates a scorer around a custom tokenizer.
    pub fn with_tokenizer(tokenizer: T, config: ScorerConfig) -> Self {
        Self {
            extractor: NgramExtractor::with_tokenizer(tokenizer),
            config,
        }
    }

    /// Scores one document against the model.
    ///
    /// Terms absent from the document's distribution contribute nothing;
    /// that is the expected common case, not an error. A document that
    /// normalizes to zero n-grams yields only intercept-derived values,
    /// or an empty result if the model has no intercept.
    pub fn score(&self, document: &str, model: &LexiconModel) -> CategoryScores {
        let ngrams = self.extractor.extract(document, self.config.ngram_order);

        let mut scores = CategoryScores::default();
        let mut hits = 0usize;
        for (term, cats) in model.terms() {
            let Some(&probability) = ngrams.get(term) else {
                continue;
            };
            hits += 1;
            for (category, &weight) in cats {
                let slot = scores.entry(category.clone()).or_insert(0.0);
                if category == AFFECT_CATEGORY {
                    // Binary presence semantics: frequency is ignored.
                    *slot += weight;
                } else {
                    *slot += probability * weight;
                }
            }
        }

        if let Some(intercepts) = model.intercepts() {
            for (category, &constant) in intercepts {
                *scores.entry(category.clone()).or_insert(0.0) += constant;
            }
        }

        debug!(
            "scored document: {hits} of {} terms hit, {} categories",
            model.len(),
            scores.len()
        );
        scores
    }

    /// Scores a batch of documents, one result per input, in order.
    pub fn score_batch<S: AsRef<str>>(
        &self,
        documents: &[S],
        model: &LexiconModel,
    ) -> Vec<CategoryScores> {
        documents
            .iter()
            .map(|doc| self.score(doc.as_ref(), model))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexiscore_types::{CategoryWeights, LexiconTable};

    fn model_from(entries: &[(&str, &[(&str, f64)])]) -> LexiconModel {
        let table: LexiconTable = entries
            .iter()
            .map(|(term, cats)| {
                let cats: CategoryWeights =
                    cats.iter().map(|(c, w)| (c.to_string(), *w)).collect();
                (term.to_string(), cats)
            })
            .collect();
        LexiconModel::from_table("test", table)
    }

    #[test]
    fn intercept_plus_weighted_term() {
        let model = model_from(&[
            ("happy", &[("pos", 1.0)]),
            ("_intercept", &[("pos", 0.1)]),
        ]);
        let scores = Scorer::new().score("happy happy", &model);
        // Distribution is {"happy": 1.0}; score = 1.0 * 1.0 + 0.1.
        assert!((scores["pos"] - 1.1).abs() < 1e-12);
    }

    #[test]
    fn no_matching_terms_yields_intercept_only() {
        let model = model_from(&[
            ("happy", &[("pos", 1.0)]),
            ("_intercept", &[("pos", 0.1)]),
        ]);
        let scores = Scorer::new().score("nothing matches here", &model);
        assert_eq!(scores.len(), 1);
        assert!((scores["pos"] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn no_match_and_no_intercept_yields_empty() {
        let model = model_from(&[("happy", &[("pos", 1.0)])]);
        let scores = Scorer::new().score("nothing matches here", &model);
        assert!(scores.is_empty());
    }

    #[test]
    fn affect_ignores_frequency() {
        let model = model_from(&[("rare", &[("affect", 0.5), ("pos", 0.5)])]);
        // 101 tokens; the first is dropped by the offset, leaving 100 grams
        // of which one is "rare": probability 0.01.
        let mut doc = vec!["filler"; 100];
        doc.push("rare");
        let doc = doc.join(" ");

        let scores = Scorer::new().score(&doc, &model);
        assert!((scores["affect"] - 0.5).abs() < 1e-12);
        assert!((scores["pos"] - 0.5 * 0.01).abs() < 1e-12);
    }

    #[test]
    fn intercept_only_category_is_initialized() {
        // A category defined nowhere but the intercept must still appear,
        // seeded at zero before the constant is added.
        let model = model_from(&[
            ("happy", &[("pos", 1.0)]),
            ("_intercept", &[("baseline", 0.7)]),
        ]);
        let scores = Scorer::new().score("x happy", &model);
        assert!((scores["pos"] - 1.0).abs() < 1e-12);
        assert!((scores["baseline"] - 0.7).abs() < 1e-12);
    }

    #[test]
    fn empty_document_never_errors() {
        let model = model_from(&[
            ("happy", &[("pos", 1.0)]),
            ("_intercept", &[("pos", 0.25)]),
        ]);
        let scores = Scorer::new().score("", &model);
        assert!((scores["pos"] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn empty_model_scores_empty() {
        let scores = Scorer::new().score("some text", &LexiconModel::empty());
        assert!(scores.is_empty());
    }

    #[test]
    fn batch_preserves_order_and_length() {
        let model = model_from(&[("alpha", &[("a", 1.0)]), ("beta", &[("b", 1.0)])]);
        let docs = ["x alpha", "x beta", "x gamma"];
        let results = Scorer::new().score_batch(&docs, &model);

        assert_eq!(results.len(), 3);
        assert!(results[0].contains_key("a"));
        assert!(results[1].contains_key("b"));
        assert!(results[2].is_empty());
    }

    #[test]
    fn weighted_scores_use_probability() {
        let model = model_from(&[("happy", &[("pos", 2.0)])]);
        let scores = Scorer::new().score("sad happy sad sad", &model);
        // The leading token is dropped; happy has probability 1/3.
        assert!((scores["pos"] - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn intercept_key_is_not_scored_as_term() {
        // The pseudo-term only matches when a document literally contains
        // the token "_intercept"; otherwise it contributes via the
        // intercept pass alone.
        let model = model_from(&[("_intercept", &[("pos", 0.1)])]);
        let scores = Scorer::new().score("ordinary words only", &model);
        assert!((scores["pos"] - 0.1).abs() < 1e-12);
        assert_eq!(scores.len(), 1);
    }
}
