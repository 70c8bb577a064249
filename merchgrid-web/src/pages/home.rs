use crate::components::ui::contact_panel::ContactPanel;
use crate::components::ui::fandom_filter::FandomFilter;
use crate::components::ui::featured_grid::FeaturedGrid;
use crate::components::ui::hero::Hero;
use crate::components::ui::stats_strip::StatsStrip;
use merchgrid_catalog::Catalog;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub catalog: Rc<Catalog>,
    pub on_select_fandom: Callback<Option<String>>,
}

/// The featured landing view: hero, animated totals, fandom filter bar,
/// featured cards and the contact form.
#[function_component(HomePage)]
pub fn home_page(p: &Props) -> Html {
    let on_open = {
        let cb = p.on_select_fandom.clone();
        Callback::from(move |id: String| cb.emit(Some(id)))
    };

    html! {
        <div class="home-page">
            <Hero />
            <StatsStrip
                fandoms={p.catalog.fandoms.len()}
                product_types={p.catalog.product_types.len()}
                products={p.catalog.product_count()}
            />
            <FandomFilter
                catalog={p.catalog.clone()}
                selected={None::<AttrValue>}
                on_select={p.on_select_fandom.clone()}
            />
            <FeaturedGrid catalog={p.catalog.clone()} on_open={on_open} />
            <ContactPanel />
        </div>
    }
}
