use crate::i18n::t;
use scenarist_core::Scenario;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub scenario: Scenario,
    /// Path of the result view the choice form submits to
    pub result_path: String,
}

/// Situation text plus one submit button per choice.
///
/// The form uses `GET` so every outcome has a shareable URL.
#[function_component(ScenarioCard)]
pub fn scenario_card(p: &Props) -> Html {
    let buttons = p.scenario.choices.iter().enumerate().map(|(i, c)| {
        html! {
            <li>
                <button type="submit" name="choice" value={c.id.clone()} class="choice-btn">
                    { format!("{}) ", i + 1) }{ c.label.clone() }
                </button>
            </li>
        }
    });
    html! {
        <section class="panel scenario-card" aria-labelledby="scenario-title">
            <header class="section-header">
                <h1 id="scenario-title">{ p.scenario.display_title() }</h1>
            </header>
            <div class="scenario-situation">
                <p>{ p.scenario.situation.clone() }</p>
            </div>
            <form method="get" action={p.result_path.clone()}>
                <h2>{ t("scenario.choose") }</h2>
                <ol class="choices">{ for buttons }</ol>
            </form>
        </section>
    }
}
