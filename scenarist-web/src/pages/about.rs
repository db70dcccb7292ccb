use crate::components::layout::Layout;
use crate::i18n::t;
use crate::routes::Route;
use yew::prelude::*;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <Layout active={Some(Route::About)}>
            <section class="panel about">
                <h1>{ t("about.title") }</h1>
                <p>{ t("about.body") }</p>
            </section>
        </Layout>
    }
}
