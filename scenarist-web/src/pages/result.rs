use crate::components::layout::Layout;
use crate::i18n::t;
use scenarist_core::{Choice, Scenario};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ResultPageProps {
    pub scenario: Scenario,
    pub choice: Choice,
    /// Detail view of the same scenario
    pub retry_path: String,
    #[prop_or_default]
    pub next_path: Option<String>,
}

#[function_component(ResultPage)]
pub fn result_page(props: &ResultPageProps) -> Html {
    let choice = &props.choice;
    html! {
        <Layout>
            <section class="panel result" aria-labelledby="result-title">
                <h1 id="result-title">{ props.scenario.display_title() }</h1>
                <p class="situation">{ props.scenario.situation.clone() }</p>
                <h2>{ t("scenario.your_choice") }</h2>
                <p class="chosen">{ choice.label.clone() }</p>
                <h2>{ t("scenario.outcome") }</h2>
                <p class="outcome">{ choice.outcome.clone() }</p>
                if let Some(takeaway) = choice.takeaway.clone() {
                    <aside class="takeaway">
                        <h3>{ t("scenario.takeaway") }</h3>
                        <p>{ takeaway }</p>
                    </aside>
                }
                <footer class="panel-footer">
                    <a class="btn" href={props.retry_path.clone()}>{ t("scenario.try_another") }</a>
                    if let Some(next) = props.next_path.clone() {
                        <a class="btn btn-primary" href={next}>{ t("scenario.next") }</a>
                    }
                </footer>
            </section>
        </Layout>
    }
}
