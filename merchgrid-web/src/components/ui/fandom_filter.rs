use crate::components::ripple_button::RippleButton;
use merchgrid_catalog::Catalog;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub catalog: Rc<Catalog>,
    /// Selected fandom id; `None` marks the synthetic "All" control.
    #[prop_or_default]
    pub selected: Option<AttrValue>,
    pub on_select: Callback<Option<String>>,
}

/// Top-level filter bar: one control per fandom plus "All". Selecting a
/// fandom enters its detail view; "All" returns to the featured view.
#[function_component(FandomFilter)]
pub fn fandom_filter(p: &Props) -> Html {
    let all_class = classes!(
        "filter-btn",
        p.selected.is_none().then_some("filter-btn--active")
    );
    let on_all = {
        let cb = p.on_select.clone();
        Callback::from(move |_: MouseEvent| cb.emit(None))
    };

    html! {
        <div class="fandom-filter" role="group" aria-label="Fandoms">
            <RippleButton label="All" class={all_class} onclick={on_all} />
            { for p.catalog.fandoms.iter().map(|fandom| {
                let active = p.selected.as_deref() == Some(fandom.id.as_str());
                let class = classes!("filter-btn", active.then_some("filter-btn--active"));
                let on_click = {
                    let cb = p.on_select.clone();
                    let id = fandom.id.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(Some(id.clone())))
                };
                html! {
                    <RippleButton
                        key={fandom.id.clone()}
                        label={fandom.name.clone()}
                        class={class}
                        onclick={on_click}
                    />
                }
            }) }
        </div>
    }
}
