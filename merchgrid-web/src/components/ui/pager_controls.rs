use crate::components::ripple_button::RippleButton;
use merchgrid_catalog::PageView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: PageView,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

/// Prev/next pager. No wraparound and no jump-to-page; the boundary flags
/// on [`PageView`] decide which side is disabled.
#[function_component(PagerControls)]
pub fn pager_controls(p: &Props) -> Html {
    let on_prev = {
        let cb = p.on_prev.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_next = {
        let cb = p.on_next.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <nav class="pager" aria-label="Product pages">
            <RippleButton
                label="Previous"
                class={classes!("pager-btn", "pager-btn--prev")}
                disabled={!p.view.has_prev()}
                onclick={on_prev}
            />
            <span class="pager__label">
                { format!("Page {} of {}", p.view.current, p.view.total.max(1)) }
            </span>
            <RippleButton
                label="Next"
                class={classes!("pager-btn", "pager-btn--next")}
                disabled={!p.view.has_next()}
                onclick={on_next}
            />
        </nav>
    }
}
