use crate::components::layout::Layout;
use crate::i18n::t;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::Routable;

/// Not-found page for unknown paths and missing records.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Layout>
            <section class="panel not-found" aria-live="assertive">
                <h1>{ t("not_found.title") }</h1>
                <p>{ t("not_found.message") }</p>
                <a class="btn" href={Route::Home.to_path()}>{ t("not_found.back") }</a>
            </section>
        </Layout>
    }
}
