//! Centralized limits and user-facing keys for Scenarist core logic.
//!
//! These values define observable behavior of the session gate and the
//! recency list, so they only change through reviewed code.

// Recency ------------------------------------------------------------------
/// Maximum number of labels kept in a session's recency list.
pub const RECENT_SCENARIO_LIMIT: usize = 5;

// Store --------------------------------------------------------------------
/// Number of scenarios shown on a pack preview page.
pub const PACK_PREVIEW_COUNT: usize = 3;
/// Suffix that turns a pack slug into its preview path segment.
pub const PREVIEW_SUFFIX: &str = "-preview";

// Unlock messages ------------------------------------------------------------
pub const UNLOCK_MISSING_CODE_MESSAGE: &str = "Please enter your unlock code.";
pub const UNLOCK_INVALID_CODE_MESSAGE: &str =
    "That unlock code is not valid. Please check it and try again.";

// Content files --------------------------------------------------------------
pub const SCENARIOS_FILE: &str = "scenarios.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PACKS_FILE: &str = "packs.json";
pub const BLOG_POSTS_FILE: &str = "blog_posts.json";

// Validation -----------------------------------------------------------------
pub(crate) const SLUG_PATTERN: &str = r"^[a-z0-9]+(?:-[a-z0-9]+)*$";
