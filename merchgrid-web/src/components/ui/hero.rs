use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

/// How much slower the background layer scrolls than the page.
const PARALLAX_FACTOR: f64 = 0.4;

/// Landing hero with a scroll-driven parallax background. The scroll
/// listener lives for the component's lifetime and is removed on unmount.
#[function_component(Hero)]
pub fn hero() -> Html {
    let offset = use_state(|| 0.0_f64);

    {
        let offset = offset.clone();
        use_effect_with((), move |()| {
            let listener = Closure::<dyn Fn(web_sys::Event)>::wrap(Box::new(move |_| {
                let scrolled = crate::dom::window().scroll_y().unwrap_or(0.0);
                offset.set(scrolled * PARALLAX_FACTOR);
            }));
            let window = crate::dom::window();
            let _ = window
                .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            move || {
                let _ = crate::dom::window().remove_event_listener_with_callback(
                    "scroll",
                    listener.as_ref().unchecked_ref(),
                );
            }
        });
    }

    html! {
        <section class="hero">
            <div
                class="hero__backdrop"
                style={format!("transform:translateY({:.1}px)", *offset)}
            />
            <div class="hero__copy">
                <h1 class="hero__title">{ "MerchGrid" }</h1>
                <p class="hero__tagline">{ "Merch for every fandom you call home." }</p>
            </div>
        </section>
    }
}
