//! Filesystem content loader.
use scenarist_core::constants::{BLOG_POSTS_FILE, CATEGORIES_FILE, PACKS_FILE, SCENARIOS_FILE};
use scenarist_core::{BlogPost, Category, ContentLoader, Pack, Scenario, records_from_json};
use serde::de::DeserializeOwned;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("content file '{0}' must be a plain relative path inside the data directory")]
    UnsafePath(String),
}

/// Reads every collection from JSON files under one directory.
#[derive(Debug, Clone)]
pub struct FsContentLoader {
    data_dir: PathBuf,
}

impl FsContentLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn resolve(&self, file: &str) -> Result<PathBuf, LoaderError> {
        let relative = Path::new(file);
        let plain = !file.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !plain {
            return Err(LoaderError::UnsafePath(file.to_string()));
        }
        Ok(self.data_dir.join(relative))
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, LoaderError> {
        let path = self.resolve(file)?;
        log::debug!("loading {}", path.display());
        let json = std::fs::read_to_string(&path).map_err(|source| LoaderError::Io {
            path: path.clone(),
            source,
        })?;
        records_from_json(&json).map_err(|source| LoaderError::Json { path, source })
    }
}

impl ContentLoader for FsContentLoader {
    type Error = LoaderError;

    fn load_scenarios(&self) -> Result<Vec<Scenario>, Self::Error> {
        self.read(SCENARIOS_FILE)
    }

    fn load_pack_scenarios(&self, file: &str) -> Result<Vec<Scenario>, Self::Error> {
        self.read(file)
    }

    fn load_categories(&self) -> Result<Vec<Category>, Self::Error> {
        self.read(CATEGORIES_FILE)
    }

    fn load_packs(&self) -> Result<Vec<Pack>, Self::Error> {
        self.read(PACKS_FILE)
    }

    fn load_blog_posts(&self) -> Result<Vec<BlogPost>, Self::Error> {
        self.read(BLOG_POSTS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenarist_core::{ContentError, ContentStore};
    use std::fs;
    use tempfile::TempDir;

    const SCENARIOS: &str = r#"[
        {"id": 1, "title": "Late reply", "situation": "s", "choices": [
            {"id": "a", "label": "Wait", "outcome": "Fine."}
        ]}
    ]"#;

    fn write_bundle(dir: &Path) {
        fs::write(dir.join("scenarios.json"), SCENARIOS).unwrap();
        fs::write(dir.join("dating.json"), SCENARIOS).unwrap();
        fs::write(
            dir.join("categories.json"),
            r#"[{"slug": "relationships", "name": "Relationships"}]"#,
        )
        .unwrap();
        fs::write(
            dir.join("packs.json"),
            r#"[{"slug": "dating", "name": "Dating", "category": "relationships",
                 "scenarios_file": "dating.json", "premium": true}]"#,
        )
        .unwrap();
        fs::write(dir.join("blog_posts.json"), "[]").unwrap();
    }

    #[test]
    fn loads_a_data_directory() {
        let dir = TempDir::new().unwrap();
        write_bundle(dir.path());
        let store = ContentStore::load(&FsContentLoader::new(dir.path())).unwrap();
        assert_eq!(store.scenarios().len(), 1);
        assert_eq!(store.premium_pack("dating").unwrap().scenarios.len(), 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let loader = FsContentLoader::new(dir.path());
        assert!(matches!(
            loader.load_scenarios().unwrap_err(),
            LoaderError::Io { .. }
        ));
    }

    #[test]
    fn malformed_json_names_the_file() {
        let dir = TempDir::new().unwrap();
        write_bundle(dir.path());
        fs::write(dir.path().join("categories.json"), "{not json").unwrap();
        let err = ContentStore::load(&FsContentLoader::new(dir.path())).unwrap_err();
        match err {
            ContentError::Load { message, .. } => assert!(message.contains("categories.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn pack_files_cannot_escape_the_data_directory() {
        let dir = TempDir::new().unwrap();
        let loader = FsContentLoader::new(dir.path());
        for file in ["../secrets.json", "/etc/passwd", ""] {
            assert!(matches!(
                loader.load_pack_scenarios(file).unwrap_err(),
                LoaderError::UnsafePath(_)
            ));
        }
    }

    #[test]
    fn shipped_data_directory_loads() {
        let loader = FsContentLoader::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));
        let store = ContentStore::load(&loader).unwrap();
        assert!(store.premium_pack("dating").is_ok());
    }
}
