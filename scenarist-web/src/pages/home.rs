use crate::components::layout::Layout;
use crate::components::recent_list::RecentList;
use crate::i18n::{t, tr_with};
use crate::routes::Route;
use scenarist_core::{Category, Scenario};
use yew::prelude::*;
use yew_router::Routable;

#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    pub scenarios: Vec<Scenario>,
    pub recent: Vec<String>,
    pub categories: Vec<Category>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let total = props.scenarios.len().to_string();
    let items = props.scenarios.iter().map(|scenario| {
        html! {
            <li>
                <a href={Route::Scenario { id: scenario.id }.to_path()}>{ scenario.display_title() }</a>
            </li>
        }
    });
    let categories = props.categories.iter().map(|category| {
        html! {
            <li><a href={Route::category(&category.slug).to_path()}>{ category.name.clone() }</a></li>
        }
    });
    html! {
        <Layout active={Some(Route::Home)}>
            <section class="panel home">
                <h1>{ t("home.title") }</h1>
                <p class="tagline">{ t("site.tagline") }</p>
                <p class="count">{ tr_with("home.count", &[("count", total.as_str())]) }</p>
                <ul class="scenario-list">{ for items }</ul>
            </section>
            <RecentList labels={props.recent.clone()} />
            if !props.categories.is_empty() {
                <nav class="categories" aria-label={t("home.categories")}>
                    <h2>{ t("home.categories") }</h2>
                    <ul>{ for categories }</ul>
                </nav>
            }
        </Layout>
    }
}
