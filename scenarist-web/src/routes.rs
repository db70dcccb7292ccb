use scenarist_core::constants::PREVIEW_SUFFIX;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/scenario/:id")]
    Scenario { id: u32 },
    #[at("/scenario/:id/result")]
    ScenarioResult { id: u32 },
    #[at("/store")]
    Store,
    #[at("/store/:preview")]
    StorePreview { preview: String },
    #[at("/unlock")]
    Unlock,
    #[at("/premium/:pack")]
    PremiumPack { pack: String },
    #[at("/premium/:pack/:id")]
    PremiumScenario { pack: String, id: u32 },
    #[at("/premium/:pack/:id/result")]
    PremiumResult { pack: String, id: u32 },
    #[at("/categories")]
    Categories,
    #[at("/category/:slug")]
    Category { slug: String },
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/about")]
    About,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub fn store_preview(pack: &str) -> Self {
        Self::StorePreview {
            preview: format!("{pack}{PREVIEW_SUFFIX}"),
        }
    }

    /// Pack slug of a `/store/{pack}-preview` segment, if well formed.
    #[must_use]
    pub fn preview_pack(segment: &str) -> Option<&str> {
        segment
            .strip_suffix(PREVIEW_SUFFIX)
            .filter(|pack| !pack.is_empty())
    }

    #[must_use]
    pub fn premium_pack(pack: &str) -> Self {
        Self::PremiumPack {
            pack: pack.to_string(),
        }
    }

    #[must_use]
    pub fn premium_scenario(pack: &str, id: u32) -> Self {
        Self::PremiumScenario {
            pack: pack.to_string(),
            id,
        }
    }

    #[must_use]
    pub fn premium_result(pack: &str, id: u32) -> Self {
        Self::PremiumResult {
            pack: pack.to_string(),
            id,
        }
    }

    #[must_use]
    pub fn category(slug: &str) -> Self {
        Self::Category {
            slug: slug.to_string(),
        }
    }

    #[must_use]
    pub fn blog_post(slug: &str) -> Self {
        Self::BlogPost {
            slug: slug.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_public_urls() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Scenario { id: 1 }.to_path(), "/scenario/1");
        assert_eq!(
            Route::ScenarioResult { id: 42 }.to_path(),
            "/scenario/42/result"
        );
        assert_eq!(Route::store_preview("dating").to_path(), "/store/dating-preview");
        assert_eq!(
            Route::premium_result("dating", 3).to_path(),
            "/premium/dating/3/result"
        );
        assert_eq!(Route::category("everyday").to_path(), "/category/everyday");
        assert_eq!(
            Route::blog_post("hello-world").to_path(),
            "/blog/hello-world"
        );
    }

    #[test]
    fn preview_segment_parsing() {
        assert_eq!(Route::preview_pack("dating-preview"), Some("dating"));
        assert_eq!(
            Route::preview_pack("first-dates-preview"),
            Some("first-dates")
        );
        assert_eq!(Route::preview_pack("dating"), None);
        assert_eq!(Route::preview_pack("-preview"), None);
    }
}
