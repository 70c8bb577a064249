use crate::components::ui::fandom_filter::FandomFilter;
use crate::components::ui::pager_controls::PagerControls;
use crate::components::ui::product_grid::ProductGrid;
use crate::components::ui::type_filter::TypeFilter;
use merchgrid_catalog::{BrowseState, Catalog};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub catalog: Rc<Catalog>,
    pub browse: BrowseState,
    pub on_select_fandom: Callback<Option<String>>,
    pub on_select_type: Callback<String>,
    pub on_prev_page: Callback<()>,
    pub on_next_page: Callback<()>,
}

/// The per-fandom detail view: filter bars, the paginated grid and the
/// pager. An unknown or missing fandom selection renders nothing.
#[function_component(FandomPage)]
pub fn fandom_page(p: &Props) -> Html {
    let Some(fandom_id) = p.browse.current_fandom.clone() else {
        return Html::default();
    };
    let Some(fandom) = p.catalog.fandom(&fandom_id) else {
        return Html::default();
    };

    let type_id = p.browse.current_product_type.clone().unwrap_or_default();
    let page_products = p.browse.page_products(&p.catalog).to_vec();
    let reveal_key = format!("{fandom_id}/{type_id}/{}", p.browse.current_page);

    html! {
        <div class="fandom-page">
            <FandomFilter
                catalog={p.catalog.clone()}
                selected={Some(AttrValue::from(fandom_id.clone()))}
                on_select={p.on_select_fandom.clone()}
            />
            <header class="fandom-page__header">
                <h2>{ &fandom.name }</h2>
            </header>
            <TypeFilter
                catalog={p.catalog.clone()}
                fandom_id={AttrValue::from(fandom_id)}
                selected={p.browse.current_product_type.clone().map(AttrValue::from)}
                on_select={p.on_select_type.clone()}
            />
            <ProductGrid
                products={page_products}
                reveal_key={AttrValue::from(reveal_key)}
            />
            <PagerControls
                view={p.browse.page_view(&p.catalog)}
                on_prev={p.on_prev_page.clone()}
                on_next={p.on_next_page.clone()}
            />
        </div>
    }
}
