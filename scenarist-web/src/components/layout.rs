use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::routes::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub active: Option<Route>,
    #[prop_or_default]
    pub children: Html,
}

/// Shared page chrome: header, main landmark, footer.
#[function_component(Layout)]
pub fn layout(p: &Props) -> Html {
    html! {
        <>
            <Header active={p.active.clone()} />
            <main id="main">
                { p.children.clone() }
            </main>
            <Footer />
        </>
    }
}
