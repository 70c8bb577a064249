use yew::prelude::*;

/// How long a ripple stays in the tree before its cleanup timer removes it.
const RIPPLE_MS: i32 = 600;

#[derive(Clone, PartialEq, Eq)]
struct Ripple {
    id: u32,
    x: i32,
    y: i32,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub disabled: bool,
}

/// Button that spawns a decorative ripple at the click offset. Each ripple
/// removes itself on its own timer; a stale timer at worst removes a ripple
/// from an already-updated list, which is harmless.
#[function_component(RippleButton)]
pub fn ripple_button(p: &Props) -> Html {
    let ripples = use_state(Vec::<Ripple>::new);
    let next_id = use_mut_ref(|| 0_u32);

    let onclick = {
        let ripples = ripples.clone();
        let user_click = p.onclick.clone();
        Callback::from(move |event: MouseEvent| {
            let id = {
                let mut counter = next_id.borrow_mut();
                *counter = counter.wrapping_add(1);
                *counter
            };
            let mut live = (*ripples).clone();
            live.push(Ripple {
                id,
                x: event.offset_x(),
                y: event.offset_y(),
            });
            ripples.set(live);

            let ripples = ripples.clone();
            crate::dom::spawn(async move {
                let _ = crate::dom::sleep_ms(RIPPLE_MS).await;
                let mut live = (*ripples).clone();
                live.retain(|r| r.id != id);
                ripples.set(live);
            });

            user_click.emit(event);
        })
    };

    html! {
        <button
            class={classes!("ripple-btn", p.class.clone())}
            disabled={p.disabled}
            {onclick}
        >
            <span class="ripple-btn__label">{ p.label.clone() }</span>
            { for (*ripples).iter().map(|r| html! {
                <span
                    key={r.id}
                    class="ripple"
                    style={format!("left:{}px;top:{}px", r.x, r.y)}
                />
            }) }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn ripple_button_renders_label_and_disabled_state() {
        let props = Props {
            label: AttrValue::from("Next"),
            onclick: Callback::noop(),
            class: classes!("pager-btn"),
            disabled: true,
        };
        let html = block_on(LocalServerRenderer::<RippleButton>::with_props(props).render());
        assert!(html.contains("Next"));
        assert!(html.contains("pager-btn"));
        assert!(html.contains("disabled"));
    }
}
