use crate::components::ripple_button::RippleButton;
use merchgrid_catalog::Catalog;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub catalog: Rc<Catalog>,
    pub on_open: Callback<String>,
}

/// Landing-page cards for the fandoms flagged as featured.
#[function_component(FeaturedGrid)]
pub fn featured_grid(p: &Props) -> Html {
    html! {
        <section class="featured-grid">
            { for p.catalog.featured_fandoms().iter().map(|fandom| {
                let on_click = {
                    let cb = p.on_open.clone();
                    let id = fandom.id.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
                };
                html! {
                    <article key={fandom.id.clone()} class="featured-card">
                        <img
                            class="featured-card__thumb"
                            src={fandom.thumbnail.clone()}
                            alt={fandom.name.clone()}
                        />
                        <h3 class="featured-card__name">{ &fandom.name }</h3>
                        <RippleButton
                            label="Browse"
                            class={classes!("featured-card__open")}
                            onclick={on_click}
                        />
                    </article>
                }
            }) }
        </section>
    }
}
