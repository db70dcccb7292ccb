//! Full-document rendering for server responses.
use crate::i18n::t;
use futures::executor::block_on;
use yew::{BaseComponent, LocalServerRenderer, ServerRenderer};

/// Embedded stylesheet served at [`STYLESHEET_PATH`].
pub const SITE_CSS: &str = include_str!("../static/site.css");
pub const STYLESHEET_PATH: &str = "/static/site.css";

/// Render a page component and wrap it in an HTML document.
///
/// `title` is the page-specific part of the `<title>`; the site name is
/// appended.
pub async fn render_page<C>(title: &str, props: C::Properties) -> String
where
    C: BaseComponent,
    C::Properties: Send + 'static,
{
    let body = ServerRenderer::<C>::with_props(move || props)
        .hydratable(false)
        .render()
        .await;
    document(title, &body)
}

/// Render a page without props on the current thread.
///
/// For responses produced outside an async handler, such as error pages.
#[must_use]
pub fn render_static_page<C>(title: &str) -> String
where
    C: BaseComponent<Properties = ()>,
{
    let body = block_on(
        LocalServerRenderer::<C>::with_props(())
            .hydratable(false)
            .render(),
    );
    document(title, &body)
}

#[must_use]
pub fn page_title(title: &str) -> String {
    let site = t("site.name");
    if title.is_empty() || title == site {
        site
    } else {
        format!("{title} · {site}")
    }
}

/// Wrap rendered body markup in the site document shell.
#[must_use]
pub fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<link rel=\"stylesheet\" href=\"{STYLESHEET_PATH}\">\n</head>\n\
         <body>\n{body}\n</body>\n</html>\n",
        escape_text(&page_title(title))
    )
}

fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
