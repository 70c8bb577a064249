use merchgrid_catalog::Product;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;
use yew::prelude::*;

/// Delay between consecutive tile reveals.
const STAGGER_MS: i32 = 100;

/// Milliseconds after the grid mounts at which tile `index` turns visible.
/// The first tile shows right away; each later tile trails its predecessor
/// by `STAGGER_MS`.
fn reveal_at_ms(index: usize) -> i32 {
    i32::try_from(index)
        .unwrap_or(i32::MAX)
        .saturating_mul(STAGGER_MS)
}

/// Swapped in when a product image fails to load.
pub const BROKEN_IMAGE_SRC: &str = "assets/img/broken.png";
const BROKEN_CLASS: &str = "product-tile__img--broken";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// The current page's slice, already computed by the browse state.
    pub products: Vec<Product>,
    /// Changes whenever fandom, type or page change; restarts the stagger.
    pub reveal_key: AttrValue,
}

/// Paginated product grid with a staggered entrance. Each render owns a
/// reveal generation; when new inputs arrive the old reveal task notices the
/// bumped generation and stops, so stale timers never touch replaced tiles.
#[function_component(ProductGrid)]
pub fn product_grid(p: &Props) -> Html {
    let revealed = use_state(|| 0_usize);
    let generation = use_mut_ref(|| 0_u32);

    {
        let revealed = revealed.clone();
        let generation = generation.clone();
        let count = p.products.len();
        use_effect_with(p.reveal_key.clone(), move |_| {
            let my_generation = {
                let mut counter = generation.borrow_mut();
                *counter = counter.wrapping_add(1);
                *counter
            };
            revealed.set(0);
            crate::dom::spawn(async move {
                let mut elapsed = 0;
                for shown in 1..=count {
                    let due = reveal_at_ms(shown - 1);
                    if due > elapsed {
                        if crate::dom::sleep_ms(due - elapsed).await.is_err() {
                            break;
                        }
                        elapsed = due;
                    }
                    if *generation.borrow() != my_generation {
                        break;
                    }
                    revealed.set(shown);
                }
            });
            || {}
        });
    }

    let on_image_error = Callback::from(|event: web_sys::Event| {
        let Some(img) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlImageElement>().ok())
        else {
            return;
        };
        // The broken marker stops a missing placeholder from looping.
        if !img.class_list().contains(BROKEN_CLASS) {
            let _ = img.class_list().add_1(BROKEN_CLASS);
            img.set_src(BROKEN_IMAGE_SRC);
        }
    });

    html! {
        <div id="product-grid" class="product-grid">
            { for p.products.iter().enumerate().map(|(index, product)| {
                let class = classes!(
                    "product-tile",
                    (index < *revealed).then_some("product-tile--visible"),
                );
                html! {
                    <figure key={product.id.clone()} class={class}>
                        <img
                            class="product-tile__img"
                            src={product.image.clone()}
                            alt={product.name.clone()}
                            onerror={on_image_error.clone()}
                        />
                        <figcaption class="product-tile__name">{ &product.name }</figcaption>
                    </figure>
                }
            }) }
        </div>
    }
}
