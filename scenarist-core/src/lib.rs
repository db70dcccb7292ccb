//! Scenarist Core
//!
//! Platform-agnostic content model and session logic for the Scenarist
//! practice-scenario site. This crate holds the Content Store, the session
//! value with its recency list, and the premium access gate, without any
//! HTTP or HTML dependencies.

pub mod constants;
pub mod content;
pub mod data;
pub mod error;
pub mod gate;
pub mod session;

// Re-export commonly used types
pub use content::{ContentStore, PackContent, Slugged, find_by_id, find_by_slug};
pub use data::{BlogPost, Category, Choice, Pack, Scenario, records_from_json};
pub use error::{ContentError, RecordKind};
pub use gate::{
    Access, GateState, UnlockCode, UnlockError, check_unlocked, gate_state, guard_premium_route,
    submit_unlock_code,
};
pub use session::{RecentScenarios, Session};

/// Trait for abstracting content loading.
/// Platform-specific implementations decide where the collections live.
pub trait ContentLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the free scenario collection
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or parsed.
    fn load_scenarios(&self) -> Result<Vec<Scenario>, Self::Error>;

    /// Load the scenario collection stored under `file`
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or parsed.
    fn load_pack_scenarios(&self, file: &str) -> Result<Vec<Scenario>, Self::Error>;

    /// Load category records
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or parsed.
    fn load_categories(&self) -> Result<Vec<Category>, Self::Error>;

    /// Load pack metadata
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or parsed.
    fn load_packs(&self) -> Result<Vec<Pack>, Self::Error>;

    /// Load blog posts
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or parsed.
    fn load_blog_posts(&self) -> Result<Vec<BlogPost>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug, thiserror::Error)]
    #[error("missing fixture {0}")]
    struct MissingFixture(String);

    #[derive(Default)]
    struct FixtureLoader {
        files: HashMap<&'static str, &'static str>,
    }

    impl FixtureLoader {
        fn get<T: serde::de::DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, MissingFixture> {
            let json = self
                .files
                .get(name)
                .ok_or_else(|| MissingFixture(name.to_string()))?;
            records_from_json(json).map_err(|err| MissingFixture(format!("{name}: {err}")))
        }
    }

    impl ContentLoader for FixtureLoader {
        type Error = MissingFixture;

        fn load_scenarios(&self) -> Result<Vec<Scenario>, Self::Error> {
            self.get("scenarios.json")
        }

        fn load_pack_scenarios(&self, file: &str) -> Result<Vec<Scenario>, Self::Error> {
            self.get(file)
        }

        fn load_categories(&self) -> Result<Vec<Category>, Self::Error> {
            self.get("categories.json")
        }

        fn load_packs(&self) -> Result<Vec<Pack>, Self::Error> {
            self.get("packs.json")
        }

        fn load_blog_posts(&self) -> Result<Vec<BlogPost>, Self::Error> {
            self.get("blog_posts.json")
        }
    }

    const SCENARIOS: &str = r#"[
        {"id": 1, "title": "Late reply", "situation": "s", "choices": [
            {"id": "a", "label": "Wait", "outcome": "Fine."}
        ]}
    ]"#;

    fn fixture() -> FixtureLoader {
        let mut files = HashMap::new();
        files.insert("scenarios.json", SCENARIOS);
        files.insert("dating.json", SCENARIOS);
        files.insert(
            "categories.json",
            r#"[{"slug": "relationships", "name": "Relationships"}]"#,
        );
        files.insert(
            "packs.json",
            r#"[{"slug": "dating", "name": "Dating", "category": "relationships",
                 "scenarios_file": "dating.json", "premium": true}]"#,
        );
        files.insert("blog_posts.json", "[]");
        FixtureLoader { files }
    }

    #[test]
    fn store_loads_every_collection() {
        let store = ContentStore::load(&fixture()).unwrap();
        assert_eq!(store.scenarios().len(), 1);
        assert_eq!(store.packs().len(), 1);
        assert_eq!(store.premium_pack("dating").unwrap().scenarios.len(), 1);
        assert!(store.blog_posts().is_empty());
    }

    #[test]
    fn missing_pack_file_fails_the_whole_load() {
        let mut loader = fixture();
        loader.files.remove("dating.json");
        let err = ContentStore::load(&loader).unwrap_err();
        assert!(matches!(err, ContentError::Load { ref source_name, .. } if source_name == "pack 'dating'"));
    }
}
