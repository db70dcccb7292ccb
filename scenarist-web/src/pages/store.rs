use crate::components::layout::Layout;
use crate::components::pack_card::PackCard;
use crate::i18n::{t, tr_with};
use crate::routes::Route;
use scenarist_core::{Pack, Scenario};
use yew::prelude::*;
use yew_router::Routable;

#[derive(Properties, PartialEq, Clone)]
pub struct StorePageProps {
    pub packs: Vec<Pack>,
    pub unlocked: bool,
}

fn unlock_notice(unlocked: bool) -> Html {
    if unlocked {
        html! { <p class="notice notice-success" role="status">{ t("store.unlocked") }</p> }
    } else {
        html! { <p class="notice"><a href={Route::Unlock.to_path()}>{ t("store.locked") }</a></p> }
    }
}

#[function_component(StorePage)]
pub fn store_page(props: &StorePageProps) -> Html {
    let cards = props.packs.iter().map(|pack| {
        html! { <PackCard pack={pack.clone()} unlocked={props.unlocked} /> }
    });
    html! {
        <Layout active={Some(Route::Store)}>
            <section class="panel store">
                <h1>{ t("store.title") }</h1>
                <p>{ t("store.intro") }</p>
                { unlock_notice(props.unlocked) }
                <div class="pack-grid">{ for cards }</div>
            </section>
        </Layout>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PreviewPageProps {
    pub pack: Pack,
    /// Leading scenarios of the pack, already capped
    pub scenarios: Vec<Scenario>,
    pub total: usize,
    pub unlocked: bool,
}

#[function_component(PreviewPage)]
pub fn preview_page(props: &PreviewPageProps) -> Html {
    let shown = props.scenarios.len().to_string();
    let total = props.total.to_string();
    let items = props.scenarios.iter().map(|scenario| {
        html! {
            <li class="preview-item">
                <h2>{ scenario.display_title() }</h2>
                <p>{ scenario.situation.clone() }</p>
            </li>
        }
    });
    let locked_premium = props.pack.premium && !props.unlocked;
    html! {
        <Layout active={Some(Route::Store)}>
            <section class="panel preview" data-pack={props.pack.slug.clone()}>
                <h1>{ tr_with("store.preview_title", &[("name", props.pack.name.as_str())]) }</h1>
                <p>{ props.pack.description.clone() }</p>
                <p class="count">{ tr_with("store.preview_count", &[("shown", shown.as_str()), ("total", total.as_str())]) }</p>
                <ol class="preview-list">{ for items }</ol>
                if locked_premium {
                    <p class="notice">{ t("store.preview_locked") }</p>
                }
                { unlock_notice(props.unlocked) }
            </section>
        </Layout>
    }
}
