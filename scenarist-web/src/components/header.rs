use crate::i18n::t;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::Routable;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Marks the matching nav link with `aria-current`
    #[prop_or_default]
    pub active: Option<Route>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let links = [
        (Route::Home, "nav.home"),
        (Route::Categories, "nav.categories"),
        (Route::Store, "nav.store"),
        (Route::Unlock, "nav.unlock"),
        (Route::Blog, "nav.blog"),
    ];
    let items = links.into_iter().map(|(route, key)| {
        let current = (p.active.as_ref() == Some(&route)).then_some("page");
        html! {
            <li><a href={route.to_path()} aria-current={current}>{ t(key) }</a></li>
        }
    });
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("nav.skip_to_content") }</a>
            <div class="header-content">
                <a class="brand" href={Route::Home.to_path()}>{ t("site.name") }</a>
                <nav aria-label="Main">
                    <ul>{ for items }</ul>
                </nav>
            </div>
        </header>
    }
}
