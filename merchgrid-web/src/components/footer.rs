use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{ "MerchGrid — fan-made merchandise, one grid at a time." }</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn footer_renders_copy() {
        let html = block_on(LocalServerRenderer::<Footer>::new().render());
        assert!(html.contains("site-footer"));
    }
}
