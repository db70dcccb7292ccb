use crate::components::layout::Layout;
use crate::i18n::{t, tr_with};
use crate::routes::Route;
use scenarist_core::{Pack, Scenario};
use yew::prelude::*;
use yew_router::Routable;

#[derive(Properties, PartialEq, Clone)]
pub struct PremiumPackPageProps {
    pub pack: Pack,
    pub scenarios: Vec<Scenario>,
}

#[function_component(PremiumPackPage)]
pub fn premium_pack_page(props: &PremiumPackPageProps) -> Html {
    let slug = props.pack.slug.as_str();
    let items = props.scenarios.iter().map(|scenario| {
        html! {
            <li>
                <a href={Route::premium_scenario(slug, scenario.id).to_path()}>{ scenario.display_title() }</a>
            </li>
        }
    });
    html! {
        <Layout>
            <section class="panel premium" data-pack={props.pack.slug.clone()}>
                <span class="badge">{ t("premium.badge") }</span>
                <h1>{ tr_with("premium.title", &[("name", props.pack.name.as_str())]) }</h1>
                <p>{ props.pack.description.clone() }</p>
                <ul class="scenario-list">{ for items }</ul>
            </section>
        </Layout>
    }
}
