//! Content Store: immutable reference collections loaded once at startup.
use crate::ContentLoader;
use crate::constants::{PACK_PREVIEW_COUNT, SLUG_PATTERN};
use crate::data::{BlogPost, Category, Pack, Scenario};
use crate::error::{ContentError, RecordKind};
use once_cell::sync::Lazy;
use regex::Regex;

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(SLUG_PATTERN).expect("slug pattern is valid"));

/// Records that are looked up by slug
pub trait Slugged {
    fn slug(&self) -> &str;
}

impl Slugged for Pack {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Slugged for Category {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Slugged for BlogPost {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Slugged for PackContent {
    fn slug(&self) -> &str {
        &self.pack.slug
    }
}

/// First scenario whose id equals `id`.
#[must_use]
pub fn find_by_id(collection: &[Scenario], id: u32) -> Option<&Scenario> {
    collection.iter().find(|scenario| scenario.id == id)
}

/// First record whose slug equals `slug`.
#[must_use]
pub fn find_by_slug<'a, T: Slugged>(collection: &'a [T], slug: &str) -> Option<&'a T> {
    collection.iter().find(|record| record.slug() == slug)
}

/// A pack together with its loaded scenario collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackContent {
    pub pack: Pack,
    pub scenarios: Vec<Scenario>,
}

impl PackContent {
    /// Leading scenarios shown on the store preview page.
    #[must_use]
    pub fn preview(&self) -> &[Scenario] {
        let end = self.scenarios.len().min(PACK_PREVIEW_COUNT);
        &self.scenarios[..end]
    }

    /// Scenario lookup inside this pack's collection.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] for an unknown id.
    pub fn scenario(&self, id: u32) -> Result<&Scenario, ContentError> {
        find_by_id(&self.scenarios, id)
            .ok_or_else(|| ContentError::not_found(RecordKind::Scenario, id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStore {
    scenarios: Vec<Scenario>,
    categories: Vec<Category>,
    packs: Vec<PackContent>,
    blog_posts: Vec<BlogPost>,
}

impl ContentStore {
    /// Load and validate every collection.
    ///
    /// # Errors
    ///
    /// Returns an error if any source cannot be loaded or the content breaks
    /// a structural rule. Partial content is never returned.
    pub fn load<L: ContentLoader>(loader: &L) -> Result<Self, ContentError> {
        let scenarios = loader
            .load_scenarios()
            .map_err(|err| ContentError::load("scenarios", err))?;
        let categories = loader
            .load_categories()
            .map_err(|err| ContentError::load("categories", err))?;
        let pack_meta = loader
            .load_packs()
            .map_err(|err| ContentError::load("packs", err))?;
        let blog_posts = loader
            .load_blog_posts()
            .map_err(|err| ContentError::load("blog posts", err))?;

        let mut packs = Vec::with_capacity(pack_meta.len());
        for pack in pack_meta {
            let pack_scenarios = loader
                .load_pack_scenarios(&pack.scenarios_file)
                .map_err(|err| ContentError::load(format!("pack '{}'", pack.slug), err))?;
            packs.push(PackContent {
                pack,
                scenarios: pack_scenarios,
            });
        }

        let store = Self::from_parts(scenarios, categories, packs, blog_posts)?;
        log::info!(
            "content loaded: {} scenarios, {} categories, {} packs, {} posts",
            store.scenarios.len(),
            store.categories.len(),
            store.packs.len(),
            store.blog_posts.len()
        );
        Ok(store)
    }

    /// Build a store from already-parsed collections.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Invalid`] if the collections break a
    /// structural rule.
    pub fn from_parts(
        scenarios: Vec<Scenario>,
        categories: Vec<Category>,
        packs: Vec<PackContent>,
        blog_posts: Vec<BlogPost>,
    ) -> Result<Self, ContentError> {
        let store = Self {
            scenarios,
            categories,
            packs,
            blog_posts,
        };
        store.validate()?;
        Ok(store)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let slugs = self
            .categories
            .iter()
            .map(|c| c.slug.as_str())
            .chain(self.packs.iter().map(|p| p.pack.slug.as_str()))
            .chain(self.blog_posts.iter().map(|b| b.slug.as_str()));
        for slug in slugs {
            if !SLUG_RE.is_match(slug) {
                return Err(ContentError::Invalid(format!("malformed slug '{slug}'")));
            }
        }

        for entry in &self.packs {
            if find_by_slug(&self.categories, &entry.pack.category).is_none() {
                return Err(ContentError::Invalid(format!(
                    "pack '{}' references unknown category '{}'",
                    entry.pack.slug, entry.pack.category
                )));
            }
        }

        let all_scenarios = self
            .scenarios
            .iter()
            .chain(self.packs.iter().flat_map(|p| p.scenarios.iter()));
        for scenario in all_scenarios {
            if scenario.choices.is_empty() {
                return Err(ContentError::Invalid(format!(
                    "scenario {} has no choices",
                    scenario.id
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn packs(&self) -> &[PackContent] {
        &self.packs
    }

    #[must_use]
    pub fn blog_posts(&self) -> &[BlogPost] {
        &self.blog_posts
    }

    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] for an unknown id.
    pub fn scenario(&self, id: u32) -> Result<&Scenario, ContentError> {
        find_by_id(&self.scenarios, id)
            .ok_or_else(|| ContentError::not_found(RecordKind::Scenario, id))
    }

    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] for an unknown slug.
    pub fn pack(&self, slug: &str) -> Result<&PackContent, ContentError> {
        find_by_slug(&self.packs, slug)
            .ok_or_else(|| ContentError::not_found(RecordKind::Pack, slug))
    }

    /// Pack lookup restricted to premium packs.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] for unknown or free packs.
    pub fn premium_pack(&self, slug: &str) -> Result<&PackContent, ContentError> {
        self.pack(slug)
            .ok()
            .filter(|entry| entry.pack.premium)
            .ok_or_else(|| ContentError::not_found(RecordKind::Pack, slug))
    }

    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] for an unknown slug.
    pub fn category(&self, slug: &str) -> Result<&Category, ContentError> {
        find_by_slug(&self.categories, slug)
            .ok_or_else(|| ContentError::not_found(RecordKind::Category, slug))
    }

    /// Packs belonging to a category, in collection order.
    pub fn packs_in_category<'a>(
        &'a self,
        category_slug: &'a str,
    ) -> impl Iterator<Item = &'a PackContent> + 'a {
        self.packs
            .iter()
            .filter(move |entry| entry.pack.category == category_slug)
    }

    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] for an unknown slug.
    pub fn blog_post(&self, slug: &str) -> Result<&BlogPost, ContentError> {
        find_by_slug(&self.blog_posts, slug)
            .ok_or_else(|| ContentError::not_found(RecordKind::BlogPost, slug))
    }
}
