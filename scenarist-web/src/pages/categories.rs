use crate::components::layout::Layout;
use crate::components::pack_card::PackCard;
use crate::i18n::t;
use crate::routes::Route;
use scenarist_core::{Category, Pack};
use yew::prelude::*;
use yew_router::Routable;

#[derive(Properties, PartialEq, Clone)]
pub struct CategoriesPageProps {
    pub categories: Vec<Category>,
}

#[function_component(CategoriesPage)]
pub fn categories_page(props: &CategoriesPageProps) -> Html {
    let items = props.categories.iter().map(|category| {
        html! {
            <li>
                <a href={Route::category(&category.slug).to_path()}>{ category.name.clone() }</a>
                <p>{ category.description.clone() }</p>
            </li>
        }
    });
    html! {
        <Layout active={Some(Route::Categories)}>
            <section class="panel categories">
                <h1>{ t("categories.title") }</h1>
                <ul>{ for items }</ul>
            </section>
        </Layout>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CategoryPageProps {
    pub category: Category,
    pub packs: Vec<Pack>,
    pub unlocked: bool,
}

#[function_component(CategoryPage)]
pub fn category_page(props: &CategoryPageProps) -> Html {
    let cards = props.packs.iter().map(|pack| {
        html! { <PackCard pack={pack.clone()} unlocked={props.unlocked} /> }
    });
    html! {
        <Layout active={Some(Route::Categories)}>
            <section class="panel category" data-category={props.category.slug.clone()}>
                <h1>{ props.category.name.clone() }</h1>
                <p>{ props.category.description.clone() }</p>
                <h2>{ t("categories.packs") }</h2>
                if props.packs.is_empty() {
                    <p class="muted">{ t("categories.empty") }</p>
                } else {
                    <div class="pack-grid">{ for cards }</div>
                }
            </section>
        </Layout>
    }
}
