use crate::i18n::t;
use crate::routes::Route;
use scenarist_core::Pack;
use yew::prelude::*;
use yew_router::Routable;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub pack: Pack,
    pub unlocked: bool,
}

#[function_component(PackCard)]
pub fn pack_card(p: &Props) -> Html {
    let pack = &p.pack;
    let badge = if pack.premium {
        t("store.premium")
    } else {
        t("store.free")
    };
    let open_link = (pack.premium && p.unlocked).then(|| {
        html! { <a class="btn" href={Route::premium_pack(&pack.slug).to_path()}>{ t("store.open") }</a> }
    });
    let buy_link = pack
        .buy_url
        .as_ref()
        .filter(|_| pack.premium && !p.unlocked)
        .map(|url| {
            html! { <a class="btn btn-primary" href={url.clone()} rel="noopener">{ t("store.buy") }</a> }
        });
    html! {
        <article class="pack-card" data-pack={pack.slug.clone()}>
            <header>
                <h2>{ pack.name.clone() }</h2>
                <span class="badge">{ badge }</span>
                if let Some(price) = pack.price_label.clone() {
                    <span class="price">{ price }</span>
                }
            </header>
            <p>{ pack.description.clone() }</p>
            <footer>
                <a class="btn" href={Route::store_preview(&pack.slug).to_path()}>{ t("store.preview") }</a>
                { for open_link }
                { for buy_link }
            </footer>
        </article>
    }
}
