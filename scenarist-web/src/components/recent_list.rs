use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub labels: Vec<String>,
}

#[function_component(RecentList)]
pub fn recent_list(p: &Props) -> Html {
    if p.labels.is_empty() {
        return Html::default();
    }
    html! {
        <aside class="recent" aria-labelledby="recent-title">
            <h2 id="recent-title">{ t("home.recent") }</h2>
            <ol>
                { for p.labels.iter().map(|label| html! { <li>{ label.clone() }</li> }) }
            </ol>
        </aside>
    }
}
