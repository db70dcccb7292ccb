use crate::components::layout::Layout;
use crate::components::scenario_card::ScenarioCard;
use crate::i18n::t;
use scenarist_core::Scenario;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScenarioPageProps {
    pub scenario: Scenario,
    pub result_path: String,
    pub back_path: String,
}

#[function_component(ScenarioPage)]
pub fn scenario_page(props: &ScenarioPageProps) -> Html {
    html! {
        <Layout>
            <ScenarioCard scenario={props.scenario.clone()} result_path={props.result_path.clone()} />
            <p><a href={props.back_path.clone()}>{ t("scenario.back") }</a></p>
        </Layout>
    }
}
