use yew::prelude::*;

const COUNT_STEPS: usize = 25;
const STEP_MS: i32 = 40;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub fandoms: usize,
    pub product_types: usize,
    pub products: usize,
}

/// Animated catalog totals. Counters climb from zero on mount; the timer is
/// best-effort and touches only this component's own state.
#[function_component(StatsStrip)]
pub fn stats_strip(p: &Props) -> Html {
    let shown = use_state(|| (0_usize, 0_usize, 0_usize));

    {
        let shown = shown.clone();
        use_effect_with(
            (p.fandoms, p.product_types, p.products),
            move |&(fandoms, types, products)| {
                crate::dom::spawn(async move {
                    for step in 1..=COUNT_STEPS {
                        if crate::dom::sleep_ms(STEP_MS).await.is_err() {
                            break;
                        }
                        shown.set((
                            fandoms * step / COUNT_STEPS,
                            types * step / COUNT_STEPS,
                            products * step / COUNT_STEPS,
                        ));
                    }
                });
                || {}
            },
        );
    }

    let (fandoms, types, products) = *shown;
    html! {
        <section id="stats" class="stats-strip">
            <StatCounter label="Fandoms" value={fandoms} target={p.fandoms} />
            <StatCounter label="Product types" value={types} target={p.product_types} />
            <StatCounter label="Products" value={products} target={p.products} />
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct CounterProps {
    label: AttrValue,
    value: usize,
    target: usize,
}

#[function_component(StatCounter)]
fn stat_counter(p: &CounterProps) -> Html {
    html! {
        <div class="stat-counter" data-target={p.target.to_string()}>
            <span class="stat-counter__value">{ p.value }</span>
            <span class="stat-counter__label">{ p.label.clone() }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn strip_renders_labels_and_targets() {
        let props = Props {
            fandoms: 3,
            product_types: 2,
            products: 17,
        };
        let html = block_on(LocalServerRenderer::<StatsStrip>::with_props(props).render());
        assert!(html.contains("Fandoms"));
        assert!(html.contains("Product types"));
        assert!(html.contains("Products"));
        assert!(html.contains("data-target=\"17\""));
    }
}
