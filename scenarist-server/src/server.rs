//! Axum HTTP server: server-rendered pages for the Scenarist site.
//!
//! Content is looked up in the shared `ContentStore`; per-client state lives
//! in the signed session cookie, so handlers hold no server-side memory.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Free scenarios, recency list, categories |
//! | GET | `/scenario/:id` | Scenario detail (tracks the view) |
//! | GET | `/scenario/:id/result?choice=` | Outcome of one choice |
//! | GET | `/store` | Pack listing |
//! | GET | `/store/:pack-preview` | First scenarios of a pack |
//! | GET, POST | `/unlock` | Unlock form and submission |
//! | GET | `/premium/:pack` | Gated pack listing |
//! | GET | `/premium/:pack/:id` | Gated scenario detail |
//! | GET | `/premium/:pack/:id/result?choice=` | Gated outcome |
//! | GET | `/categories`, `/category/:slug` | Category index and detail |
//! | GET | `/blog`, `/blog/:slug` | Blog index and post |
//! | GET | `/about` | Static info page |
//! | GET | `/health` | Health check with content counts |

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use axum::{
    Form, Json, Router,
    extract::{FromRequestParts, Path, Query, Request, State},
    http::{HeaderValue, header, request::Parts},
    middleware::{self, Next},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use scenarist_core::{
    Access, Choice, ContentStore, Pack, PackContent, Scenario, Session, UnlockCode,
    check_unlocked, guard_premium_route, submit_unlock_code,
};
use scenarist_web::i18n::{t, tr_with};
use scenarist_web::pages::{
    about::AboutPage,
    blog::{BlogIndexPage, BlogIndexPageProps, BlogPostPage, BlogPostPageProps},
    categories::{CategoriesPage, CategoriesPageProps, CategoryPage, CategoryPageProps},
    home::{HomePage, HomePageProps},
    premium::{PremiumPackPage, PremiumPackPageProps},
    result::{ResultPage, ResultPageProps},
    scenario::{ScenarioPage, ScenarioPageProps},
    store::{PreviewPage, PreviewPageProps, StorePage, StorePageProps},
    unlock::{UnlockPage, UnlockPageProps},
};
use scenarist_web::{Route, SITE_CSS, STYLESHEET_PATH, render_page};
use serde::Deserialize;
use tower_http::set_header::SetResponseHeaderLayer;
use yew_router::Routable;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::session_codec::SessionCodec;

/// Everything a handler needs, built once at startup.
#[derive(Debug)]
pub struct AppContext {
    content: ContentStore,
    unlock_code: UnlockCode,
    codec: SessionCodec,
    store_url: Option<String>,
}

impl AppContext {
    pub fn new(
        content: ContentStore,
        unlock_code: UnlockCode,
        codec: SessionCodec,
        store_url: Option<String>,
    ) -> Self {
        Self {
            content,
            unlock_code,
            codec,
            store_url,
        }
    }

    pub fn from_config(content: ContentStore, config: &ServerConfig) -> Self {
        Self::new(
            content,
            config.unlock_code.clone(),
            SessionCodec::new(config.session_secret.clone(), config.secure_cookies),
            config.store_url.clone(),
        )
    }

    /// Pack metadata as shown to visitors, with the fallback purchase link.
    fn listed_pack(&self, pack: &Pack) -> Pack {
        let mut pack = pack.clone();
        if pack.premium && pack.buy_url.is_none() {
            pack.buy_url.clone_from(&self.store_url);
        }
        pack
    }

    fn with_session(&self, session: &Session, html: String) -> Result<Response, AppError> {
        let mut response = Html(html).into_response();
        response
            .headers_mut()
            .insert(header::SET_COOKIE, self.codec.set_cookie(session)?);
        Ok(response)
    }
}

pub type AppState = Arc<AppContext>;

/// The visitor's session, decoded from the request cookie.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

#[async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(state.codec.load(&parts.headers)))
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_home))
        .route("/scenario/:id", get(handle_scenario))
        .route("/scenario/:id/result", get(handle_scenario_result))
        .route("/store", get(handle_store))
        .route("/store/:preview", get(handle_store_preview))
        .route("/unlock", get(handle_unlock_form).post(handle_unlock_submit))
        .route("/premium/:pack", get(handle_premium_pack))
        .route("/premium/:pack/:id", get(handle_premium_scenario))
        .route("/premium/:pack/:id/result", get(handle_premium_result))
        .route("/categories", get(handle_categories))
        .route("/category/:slug", get(handle_category))
        .route("/blog", get(handle_blog))
        .route("/blog/:slug", get(handle_blog_post))
        .route("/about", get(handle_about))
        .route("/health", get(handle_health_check))
        .route(STYLESHEET_PATH, get(handle_stylesheet))
        .fallback(handle_not_found)
        .layer(middleware::from_fn(log_requests))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .with_state(state)
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();
    let response = next.run(request).await;
    log::info!(
        "{method} {path} -> {} ({:.1?})",
        response.status().as_u16(),
        started.elapsed()
    );
    response
}

// ── Request types ───────────────────────────────────────────────────

/// Query pairs of a result view. `choice` may repeat; the first one counts.
type ChoiceQuery = Vec<(String, String)>;

#[derive(Debug, Deserialize)]
struct UnlockForm {
    #[serde(default)]
    code: String,
}

/// Scenario ids arrive as raw segments so anything but plain digits is a 404.
fn parse_id(raw: &str) -> Result<u32, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound);
    }
    raw.parse().map_err(|_| AppError::NotFound)
}

/// Choice named by the query, if it exists in `scenario`.
fn chosen<'a>(scenario: &'a Scenario, query: &[(String, String)]) -> Option<&'a Choice> {
    query
        .iter()
        .find(|(key, _)| key == "choice")
        .map(|(_, value)| value.as_str())
        .filter(|id| !id.is_empty())
        .and_then(|id| scenario.find_choice(id))
}

/// Scenario following `id` in `collection`, if any.
fn next_after(collection: &[Scenario], id: u32) -> Option<&Scenario> {
    let pos = collection.iter().position(|scenario| scenario.id == id)?;
    collection.get(pos + 1)
}

fn redirect_to_store() -> Response {
    Redirect::to(&Route::Store.to_path()).into_response()
}

fn premium_entry<'a>(state: &'a AppContext, pack: &str) -> Result<&'a PackContent, AppError> {
    Ok(state.content.premium_pack(pack)?)
}

// ── Free scenarios ──────────────────────────────────────────────────

async fn handle_home(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Html<String> {
    let props = HomePageProps {
        scenarios: state.content.scenarios().to_vec(),
        recent: session.recent_scenarios().to_vec(),
        categories: state.content.categories().to_vec(),
    };
    Html(render_page::<HomePage>(&t("home.title"), props).await)
}

async fn handle_scenario(
    State(state): State<AppState>,
    CurrentSession(mut session): CurrentSession,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let scenario = state.content.scenario(id)?;
    let title = scenario.display_title();
    session.track_view(&title);
    let props = ScenarioPageProps {
        scenario: scenario.clone(),
        result_path: Route::ScenarioResult { id }.to_path(),
        back_path: Route::Home.to_path(),
    };
    let html = render_page::<ScenarioPage>(&title, props).await;
    state.with_session(&session, html)
}

async fn handle_scenario_result(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ChoiceQuery>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let scenario = state.content.scenario(id)?;
    let Some(choice) = chosen(scenario, &query) else {
        return Ok(Redirect::to(&Route::Scenario { id }.to_path()).into_response());
    };
    let props = ResultPageProps {
        scenario: scenario.clone(),
        choice: choice.clone(),
        retry_path: Route::Scenario { id }.to_path(),
        next_path: next_after(state.content.scenarios(), id)
            .map(|next| Route::Scenario { id: next.id }.to_path()),
    };
    let html = render_page::<ResultPage>(&scenario.display_title(), props).await;
    Ok(Html(html).into_response())
}

// ── Store and unlock ────────────────────────────────────────────────

async fn handle_store(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Html<String> {
    let props = StorePageProps {
        packs: state
            .content
            .packs()
            .iter()
            .map(|entry| state.listed_pack(&entry.pack))
            .collect(),
        unlocked: check_unlocked(&session),
    };
    Html(render_page::<StorePage>(&t("store.title"), props).await)
}

async fn handle_store_preview(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(segment): Path<String>,
) -> Result<Html<String>, AppError> {
    let slug = Route::preview_pack(&segment).ok_or(AppError::NotFound)?;
    let entry = state.content.pack(slug)?;
    let title = tr_with("store.preview_title", &[("name", entry.pack.name.as_str())]);
    let props = PreviewPageProps {
        pack: state.listed_pack(&entry.pack),
        scenarios: entry.preview().to_vec(),
        total: entry.scenarios.len(),
        unlocked: check_unlocked(&session),
    };
    Ok(Html(render_page::<PreviewPage>(&title, props).await))
}

fn premium_links(content: &ContentStore) -> Vec<(String, String)> {
    content
        .packs()
        .iter()
        .filter(|entry| entry.pack.premium)
        .map(|entry| (entry.pack.slug.clone(), entry.pack.name.clone()))
        .collect()
}

async fn handle_unlock_form(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Html<String> {
    let success = check_unlocked(&session);
    let props = UnlockPageProps {
        error: None,
        success,
        premium_packs: if success {
            premium_links(&state.content)
        } else {
            Vec::new()
        },
    };
    Html(render_page::<UnlockPage>(&t("unlock.title"), props).await)
}

async fn handle_unlock_submit(
    State(state): State<AppState>,
    CurrentSession(mut session): CurrentSession,
    Form(form): Form<UnlockForm>,
) -> Result<Response, AppError> {
    let title = t("unlock.title");
    match submit_unlock_code(&mut session, &form.code, &state.unlock_code) {
        Ok(()) => {
            log::info!("unlock code accepted");
            let props = UnlockPageProps {
                error: None,
                success: true,
                premium_packs: premium_links(&state.content),
            };
            let html = render_page::<UnlockPage>(&title, props).await;
            state.with_session(&session, html)
        }
        Err(err) => {
            log::info!("unlock code rejected: {err:?}");
            let success = check_unlocked(&session);
            let props = UnlockPageProps {
                error: Some(err.to_string()),
                success,
                premium_packs: if success {
                    premium_links(&state.content)
                } else {
                    Vec::new()
                },
            };
            Ok(Html(render_page::<UnlockPage>(&title, props).await).into_response())
        }
    }
}

// ── Premium packs ───────────────────────────────────────────────────

async fn handle_premium_pack(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(pack): Path<String>,
) -> Result<Response, AppError> {
    if guard_premium_route(&session) == Access::RedirectToStore {
        return Ok(redirect_to_store());
    }
    let entry = premium_entry(&state, &pack)?;
    let title = tr_with("premium.title", &[("name", entry.pack.name.as_str())]);
    let props = PremiumPackPageProps {
        pack: state.listed_pack(&entry.pack),
        scenarios: entry.scenarios.clone(),
    };
    Ok(Html(render_page::<PremiumPackPage>(&title, props).await).into_response())
}

async fn handle_premium_scenario(
    State(state): State<AppState>,
    CurrentSession(mut session): CurrentSession,
    Path((pack, id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    if guard_premium_route(&session) == Access::RedirectToStore {
        return Ok(redirect_to_store());
    }
    let entry = premium_entry(&state, &pack)?;
    let id = parse_id(&id)?;
    let scenario = entry.scenario(id)?;
    let title = scenario.display_title();
    session.track_view(&title);
    let props = ScenarioPageProps {
        scenario: scenario.clone(),
        result_path: Route::premium_result(&pack, id).to_path(),
        back_path: Route::premium_pack(&pack).to_path(),
    };
    let html = render_page::<ScenarioPage>(&title, props).await;
    state.with_session(&session, html)
}

async fn handle_premium_result(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path((pack, id)): Path<(String, String)>,
    Query(query): Query<ChoiceQuery>,
) -> Result<Response, AppError> {
    if guard_premium_route(&session) == Access::RedirectToStore {
        return Ok(redirect_to_store());
    }
    let entry = premium_entry(&state, &pack)?;
    let id = parse_id(&id)?;
    let scenario = entry.scenario(id)?;
    let Some(choice) = chosen(scenario, &query) else {
        return Ok(Redirect::to(&Route::premium_scenario(&pack, id).to_path()).into_response());
    };
    let props = ResultPageProps {
        scenario: scenario.clone(),
        choice: choice.clone(),
        retry_path: Route::premium_scenario(&pack, id).to_path(),
        next_path: next_after(&entry.scenarios, id)
            .map(|next| Route::premium_scenario(&pack, next.id).to_path()),
    };
    let html = render_page::<ResultPage>(&scenario.display_title(), props).await;
    Ok(Html(html).into_response())
}

// ── Categories, blog, static pages ──────────────────────────────────

async fn handle_categories(State(state): State<AppState>) -> Html<String> {
    let props = CategoriesPageProps {
        categories: state.content.categories().to_vec(),
    };
    Html(render_page::<CategoriesPage>(&t("categories.title"), props).await)
}

async fn handle_category(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let category = state.content.category(&slug)?;
    let props = CategoryPageProps {
        category: category.clone(),
        packs: state
            .content
            .packs_in_category(&slug)
            .map(|entry| state.listed_pack(&entry.pack))
            .collect(),
        unlocked: check_unlocked(&session),
    };
    Ok(Html(render_page::<CategoryPage>(&category.name, props).await))
}

async fn handle_blog(State(state): State<AppState>) -> Html<String> {
    let props = BlogIndexPageProps {
        posts: state.content.blog_posts().to_vec(),
    };
    Html(render_page::<BlogIndexPage>(&t("blog.title"), props).await)
}

async fn handle_blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let post = state.content.blog_post(&slug)?;
    let props = BlogPostPageProps { post: post.clone() };
    Ok(Html(render_page::<BlogPostPage>(&post.title, props).await))
}

async fn handle_about() -> Html<String> {
    Html(render_page::<AboutPage>(&t("about.title"), ()).await)
}

async fn handle_stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        SITE_CSS,
    )
}

async fn handle_health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let content = &state.content;
    Json(serde_json::json!({
        "status": "OK",
        "scenarios": content.scenarios().len(),
        "packs": content.packs().len(),
        "categories": content.categories().len(),
        "blog_posts": content.blog_posts().len(),
    }))
}

async fn handle_not_found() -> AppError {
    AppError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(id: u32) -> Scenario {
        Scenario {
            id,
            title: String::new(),
            situation: "s".to_string(),
            category: None,
            tags: Vec::new(),
            choices: vec![Choice {
                id: "a".to_string(),
                label: "A".to_string(),
                outcome: "o".to_string(),
                takeaway: None,
            }],
        }
    }

    #[test]
    fn ids_must_be_numeric() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(AppError::NotFound)));
        assert!(matches!(parse_id("-1"), Err(AppError::NotFound)));
        assert!(matches!(parse_id("+1"), Err(AppError::NotFound)));
        assert!(matches!(parse_id(""), Err(AppError::NotFound)));
        assert!(matches!(parse_id("99999999999"), Err(AppError::NotFound)));
    }

    #[test]
    fn empty_or_unknown_choice_is_none() {
        let s = scenario(1);
        let query = |pairs: &[(&str, &str)]| -> ChoiceQuery {
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect()
        };
        assert!(chosen(&s, &query(&[])).is_none());
        assert!(chosen(&s, &query(&[("choice", "")])).is_none());
        assert!(chosen(&s, &query(&[("choice", "z")])).is_none());
        assert!(chosen(&s, &query(&[("other", "a")])).is_none());
        assert_eq!(chosen(&s, &query(&[("choice", "a")])).unwrap().id, "a");
        assert_eq!(
            chosen(&s, &query(&[("choice", "a"), ("choice", "z")]))
                .unwrap()
                .id,
            "a"
        );
    }

    #[test]
    fn next_follows_collection_order() {
        let collection = vec![scenario(4), scenario(2), scenario(9)];
        assert_eq!(next_after(&collection, 4).unwrap().id, 2);
        assert_eq!(next_after(&collection, 2).unwrap().id, 9);
        assert!(next_after(&collection, 9).is_none());
        assert!(next_after(&collection, 7).is_none());
    }
}
