use crate::components::ripple_button::RippleButton;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_home: Callback<()>,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(p: &Props) -> Html {
    let on_click = {
        let cb = p.on_home.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div class="not-found-page">
            <h2>{ "Nothing here" }</h2>
            <p>{ "That shelf is empty. Head back to the catalog." }</p>
            <RippleButton label="Back to catalog" onclick={on_click} />
        </div>
    }
}
