use crate::components::ripple_button::RippleButton;
use merchgrid_catalog::Catalog;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub catalog: Rc<Catalog>,
    pub fandom_id: AttrValue,
    #[prop_or_default]
    pub selected: Option<AttrValue>,
    pub on_select: Callback<String>,
}

/// Product-type filter bar for one fandom. Controls come from the catalog's
/// type declaration order restricted to keys the fandom actually stocks;
/// undeclared keys never make it here.
#[function_component(TypeFilter)]
pub fn type_filter(p: &Props) -> Html {
    let Some(fandom) = p.catalog.fandom(&p.fandom_id) else {
        return Html::default();
    };

    html! {
        <div class="type-filter" role="group" aria-label="Product types">
            { for p.catalog.type_filters(fandom).iter().map(|ty| {
                let active = p.selected.as_deref() == Some(ty.id.as_str());
                let class = classes!(
                    "filter-btn",
                    format!("filter-btn--{}", ty.icon),
                    active.then_some("filter-btn--active"),
                );
                let on_click = {
                    let cb = p.on_select.clone();
                    let id = ty.id.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
                };
                html! {
                    <RippleButton
                        key={ty.id.clone()}
                        label={ty.name.clone()}
                        class={class}
                        onclick={on_click}
                    />
                }
            }) }
        </div>
    }
}
