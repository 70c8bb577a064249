use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Mobile nav open state, owned by the shell so any selection can close it.
    pub open: bool,
    pub on_toggle: Callback<()>,
    pub on_home: Callback<()>,
    pub on_navigate: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let toggle = {
        let cb = p.on_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let home = {
        let cb = p.on_home.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let navigate = {
        let cb = p.on_navigate.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let nav_class = classes!("site-nav", p.open.then_some("site-nav--open"));

    html! {
        <header class="site-header">
            <div class="header-content">
                <button class="site-logo" onclick={home.clone()}>{ "MerchGrid" }</button>
                <button
                    id="nav-toggle"
                    class="nav-toggle"
                    aria-expanded={if p.open { "true" } else { "false" }}
                    aria-controls="site-nav"
                    onclick={toggle}
                >
                    <span class="nav-toggle__bar" />
                    <span class="nav-toggle__bar" />
                    <span class="nav-toggle__bar" />
                </button>
                <nav id="site-nav" class={nav_class}>
                    <button class="site-nav__link" onclick={home}>{ "Catalog" }</button>
                    <a class="site-nav__link" href="#stats" onclick={navigate.clone()}>{ "About" }</a>
                    <a class="site-nav__link" href="#contact" onclick={navigate}>{ "Contact" }</a>
                </nav>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(open: bool) -> String {
        let props = Props {
            open,
            on_toggle: Callback::noop(),
            on_home: Callback::noop(),
            on_navigate: Callback::noop(),
        };
        block_on(LocalServerRenderer::<Header>::with_props(props).render())
    }

    #[test]
    fn hamburger_toggles_nav_class() {
        let closed = render(false);
        assert!(closed.contains("site-nav"));
        assert!(!closed.contains("site-nav--open"));
        assert!(closed.contains("aria-expanded=\"false\""));

        let open = render(true);
        assert!(open.contains("site-nav--open"));
        assert!(open.contains("aria-expanded=\"true\""));
    }
}
