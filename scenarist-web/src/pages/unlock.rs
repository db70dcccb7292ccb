use crate::components::layout::Layout;
use crate::i18n::t;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::Routable;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct UnlockPageProps {
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub success: bool,
    /// Premium packs to link once unlocked
    #[prop_or_default]
    pub premium_packs: Vec<(String, String)>,
}

#[function_component(UnlockPage)]
pub fn unlock_page(props: &UnlockPageProps) -> Html {
    let pack_links = props.premium_packs.iter().map(|(slug, name)| {
        html! { <li><a href={Route::premium_pack(slug).to_path()}>{ name.clone() }</a></li> }
    });
    html! {
        <Layout active={Some(Route::Unlock)}>
            <section class="panel unlock">
                <h1>{ t("unlock.title") }</h1>
                if let Some(error) = props.error.clone() {
                    <p class="notice notice-error" role="alert">{ error }</p>
                }
                if props.success {
                    <p class="notice notice-success" role="status">{ t("unlock.success") }</p>
                    <nav aria-label={t("unlock.go_premium")}>
                        <h2>{ t("unlock.go_premium") }</h2>
                        <ul>{ for pack_links }</ul>
                    </nav>
                } else {
                    <form method="post" action={Route::Unlock.to_path()}>
                        <label for="unlock-code">{ t("unlock.label") }</label>
                        <input id="unlock-code" name="code" type="text" autocomplete="off" required=true />
                        <button type="submit">{ t("unlock.submit") }</button>
                    </form>
                }
            </section>
        </Layout>
    }
}
