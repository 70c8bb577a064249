use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::MouseEvent;
use yew::prelude::*;

/// Lifetime of one trail particle.
const PARTICLE_MS: i32 = 500;
/// Particles kept alive at once; older ones age out by timer anyway.
const MAX_PARTICLES: usize = 24;

#[derive(Clone, PartialEq)]
struct Particle {
    id: u32,
    x: i32,
    y: i32,
}

/// Custom cursor dot plus a short-lived particle trail following the
/// pointer. Purely decorative: every particle is removed by its own timer
/// and none of this touches the data layer.
#[function_component(CursorLayer)]
pub fn cursor_layer() -> Html {
    let dot = use_state(|| None::<(i32, i32)>);
    let particles = use_state(Vec::<Particle>::new);
    let next_id = use_mut_ref(|| 0_u32);

    {
        let dot = dot.clone();
        let particles = particles.clone();
        use_effect_with((), move |()| {
            let listener = Closure::<dyn Fn(MouseEvent)>::wrap(Box::new(move |event: MouseEvent| {
                let (x, y) = (event.client_x(), event.client_y());
                dot.set(Some((x, y)));

                let id = {
                    let mut counter = next_id.borrow_mut();
                    *counter = counter.wrapping_add(1);
                    *counter
                };
                let mut live = (*particles).clone();
                live.push(Particle { id, x, y });
                if live.len() > MAX_PARTICLES {
                    live.remove(0);
                }
                particles.set(live);

                let particles = particles.clone();
                crate::dom::spawn(async move {
                    let _ = crate::dom::sleep_ms(PARTICLE_MS).await;
                    let mut live = (*particles).clone();
                    live.retain(|p| p.id != id);
                    particles.set(live);
                });
            }));
            let window = crate::dom::window();
            let _ = window
                .add_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref());
            move || {
                let _ = crate::dom::window().remove_event_listener_with_callback(
                    "mousemove",
                    listener.as_ref().unchecked_ref(),
                );
            }
        });
    }

    html! {
        <div class="cursor-layer" aria-hidden="true">
            if let Some((x, y)) = *dot {
                <span class="cursor-dot" style={format!("left:{x}px;top:{y}px")} />
            }
            { for (*particles).iter().map(|p| html! {
                <span
                    key={p.id}
                    class="cursor-particle"
                    style={format!("left:{}px;top:{}px", p.x, p.y)}
                />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn layer_is_empty_until_the_pointer_moves() {
        let html = block_on(LocalServerRenderer::<CursorLayer>::new().render());
        assert!(html.contains("cursor-layer"));
        assert!(!html.contains("cursor-dot"));
        assert!(!html.contains("cursor-particle"));
    }
}
