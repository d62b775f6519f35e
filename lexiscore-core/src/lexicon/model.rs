//! In-memory lexicon model.
//!
//! A [`LexiconModel`] owns one or more named lexica merged into a single
//! term table. It is created by loading a lexicon from a store, extended
//! via [`merge`](LexiconModel::merge), and shrunk via
//! [`remove`](LexiconModel::remove). A model is held for the lifetime of
//! a scoring session and must not be mutated while a batch is scoring.

use lexiscore_types::{CategoryWeights, LexiconTable, INTERCEPT_KEY};
use log::warn;

use crate::lexicon::store::{LexiconStore, StoreError};

/// One or more merged lexica, keyed by term.
///
/// Invariant: every term maps to a non-empty category map. Terms whose
/// category map becomes empty during [`remove`](Self::remove) are pruned.
#[derive(Debug, Clone, Default)]
pub struct LexiconModel {
    names: Vec<String>,
    terms: LexiconTable,
}

impl LexiconModel {
    /// Creates a model with no lexica. Scoring against it produces empty
    /// results for every document.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a model directly from an in-memory term table under `name`.
    ///
    /// Useful for programmatically constructed lexica that never touch
    /// the store.
    pub fn from_table(name: &str, terms: LexiconTable) -> Self {
        Self {
            names: vec![name.to_string()],
            terms,
        }
    }

    /// Loads one named lexicon from the store.
    ///
    /// # Errors
    ///
    /// Propagates the store's error kind so callers can branch
    /// programmatically: `NotFound` for an unknown name, `Json` for a
    /// malformed file.
    pub fn load(store: &impl LexiconStore, name: &str) -> Result<Self, StoreError> {
        let terms = store.load(name)?;
        Ok(Self {
            names: vec![name.to_string()],
            terms,
        })
    }

    /// Loads one named lexicon, degrading to the empty model on failure.
    ///
    /// Unavailable lexica are a soft failure: a diagnostic listing the
    /// available names is logged and scoring proceeds with empty results
    /// rather than aborting the batch.
    pub fn load_or_empty(store: &impl LexiconStore, name: &str) -> Self {
        match Self::load(store, name) {
            Ok(model) => model,
            Err(err) => {
                let available = store.list().unwrap_or_default();
                warn!("lexicon `{name}` unavailable ({err}); available lexica: {available:?}");
                Self::empty()
            }
        }
    }

    /// Loads several lexica, merging each under its own name.
    ///
    /// Merging a lexicon under its own name is what makes a later
    /// [`remove`](Self::remove) of that name meaningful; see there.
    pub fn load_merged<S: LexiconStore>(store: &S, names: &[&str]) -> Result<Self, StoreError> {
        let mut model = Self::empty();
        for name in names {
            let loaded = Self::load(store, name)?;
            model.merge(loaded, name);
        }
        Ok(model)
    }

    /// Merges another model's terms into this one under `name`.
    ///
    /// Terms are unioned; when a term exists in both, the incoming
    /// category weights extend the existing map, overwriting weights for
    /// categories present on both sides.
    pub fn merge(&mut self, other: LexiconModel, name: &str) {
        for (term, cats) in other.terms {
            self.terms.entry(term).or_default().extend(cats);
        }
        self.names.push(name.to_string());
    }

    /// Removes the named lexicon's contribution from every term.
    ///
    /// Deletes the category entry equal to `name` from each term's
    /// category map and prunes terms left empty. This keys removal by
    /// category name, so it only undoes a merge when the lexicon's
    /// categories were keyed by its own name (as `load_merged`
    /// establishes). Weights that a merge overwrote are not restored.
    pub fn remove(&mut self, name: &str) {
        self.terms.retain(|_, cats| {
            cats.remove(name);
            !cats.is_empty()
        });
        self.names.retain(|n| n != name);
    }

    /// Names of the constituent lexica, in merge order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The merged term table.
    pub fn terms(&self) -> &LexiconTable {
        &self.terms
    }

    /// Per-category intercept constants, if the model defines any.
    pub fn intercepts(&self) -> Option<&CategoryWeights> {
        self.terms.get(INTERCEPT_KEY)
    }

    /// True when the model holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of terms, counting the intercept pseudo-term if present.
    pub fn len(&self) -> usize {
        self.terms.len()
    }
}
