use crate::components::layout::Layout;
use crate::i18n::t;
use yew::prelude::*;

#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <Layout>
            <section class="panel error" role="alert">
                <h1>{ t("error.title") }</h1>
                <p>{ t("error.message") }</p>
            </section>
        </Layout>
    }
}
