//! Lexicon storage and the in-memory model.
//!
//! - **Store**: load/list/persist named lexicon files (trait seam plus
//!   the directory-backed [`DirStore`])
//! - **Model**: merged term tables with merge/remove semantics

pub mod model;
pub mod store;

pub use model::LexiconModel;
pub use store::{DirStore, LexiconStore, StoreError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn seed(dir: &std::path::Path, name: &str, content: &str) {
        let mut f = File::create(dir.join(name)).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn model_loads_from_dir_store() {
        let tmp = TempDir::new().unwrap();
        seed(
            tmp.path(),
            "mood.json",
            r#"{"happy": {"pos": 1.0}, "_intercept": {"pos": 0.1}}"#,
        );

        let store = DirStore::new(tmp.path()).unwrap();
        let model = LexiconModel::load(&store, "mood").unwrap();
        assert_eq!(model.names(), ["mood"]);
        assert_eq!(model.terms()["happy"]["pos"], 1.0);
        assert_eq!(model.intercepts().unwrap()["pos"], 0.1);
    }

    #[test]
    fn missing_lexicon_degrades_to_empty_model() {
        let tmp = TempDir::new().unwrap();
        let store = DirStore::new(tmp.path()).unwrap();
        let model = LexiconModel::load_or_empty(&store, "missing");
        assert!(model.is_empty());
        assert!(model.names().is_empty());
    }

    #[test]
    fn load_merged_merges_under_own_names() {
        let tmp = TempDir::new().unwrap();
        seed(tmp.path(), "first.json", r#"{"happy": {"first": 1.0}}"#);
        seed(tmp.path(), "second.json", r#"{"happy": {"second": 2.0}}"#);

        let store = DirStore::new(tmp.path()).unwrap();
        let mut model = LexiconModel::load_merged(&store, &["first", "second"]).unwrap();
        assert_eq!(model.names(), ["first", "second"]);
        assert_eq!(model.terms()["happy"].len(), 2);

        // Because each lexicon keyed its categories by its own name,
        // removal undoes its contribution.
        model.remove("second");
        assert_eq!(model.terms()["happy"].len(), 1);
        assert_eq!(model.terms()["happy"]["first"], 1.0);
    }

    #[test]
    fn uploaded_lexicon_becomes_loadable() {
        let src_dir = TempDir::new().unwrap();
        let store_dir = TempDir::new().unwrap();
        seed(src_dir.path(), "extra.json", r#"{"new": {"cat": 3.0}}"#);

        let store = DirStore::new(store_dir.path()).unwrap();
        let name = store.save(&src_dir.path().join("extra.json")).unwrap();
        let model = LexiconModel::load(&store, &name).unwrap();
        assert_eq!(model.terms()["new"]["cat"], 3.0);
    }
}
