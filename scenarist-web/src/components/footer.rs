use crate::i18n::t;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::Routable;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer role="contentinfo">
            <p>{ t("footer.copyright") }</p>
            <a href={Route::About.to_path()}>{ t("nav.about") }</a>
        </footer>
    }
}
