use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub message: AttrValue,
    pub on_dismiss: Callback<()>,
}

/// Non-blocking notice shown when the catalog fetch failed and the embedded
/// fallback took its place. The page keeps working underneath it.
#[function_component(ErrorBanner)]
pub fn error_banner(p: &Props) -> Html {
    let dismiss = {
        let cb = p.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="error-banner" role="alert">
            <span class="error-banner__text">
                { format!("Showing sample data — {}", p.message) }
            </span>
            <button class="error-banner__dismiss" aria-label="Dismiss" onclick={dismiss}>
                { "×" }
            </button>
        </div>
    }
}
