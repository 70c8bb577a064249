use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::ui::cursor_layer::CursorLayer;
use crate::components::ui::error_banner::ErrorBanner;
use crate::pages::fandom::FandomPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::router::Route;
use merchgrid_catalog::View;
use yew::prelude::*;

/// Element id the pager scrolls back to after a page flip.
pub const GRID_ANCHOR_ID: &str = "product-grid";

pub fn render_app(state: &AppState, route: Option<&Route>) -> Html {
    let catalog = (*state.catalog).clone();
    let browse = (*state.browse).clone();

    let on_toggle_nav = {
        let nav_open = state.nav_open.clone();
        Callback::from(move |()| nav_open.set(!*nav_open))
    };
    let close_nav = {
        let nav_open = state.nav_open.clone();
        Callback::from(move |()| nav_open.set(false))
    };

    // Every selection flows through here; the browse methods enforce the
    // page-1 reset and first-filter default.
    let on_select_fandom = {
        let browse = state.browse.clone();
        let catalog = state.catalog.clone();
        let nav_open = state.nav_open.clone();
        Callback::from(move |selection: Option<String>| {
            let mut next = (*browse).clone();
            match selection.as_deref() {
                Some(id) => next.select_fandom(&catalog, id),
                None => next.show_featured(),
            }
            browse.set(next);
            nav_open.set(false);
        })
    };

    let on_select_type = {
        let browse = state.browse.clone();
        Callback::from(move |type_id: String| {
            let mut next = (*browse).clone();
            next.select_product_type(&type_id);
            browse.set(next);
        })
    };

    let on_prev_page = {
        let browse = state.browse.clone();
        Callback::from(move |()| {
            let mut next = (*browse).clone();
            next.prev_page();
            browse.set(next);
            crate::dom::scroll_into_view(GRID_ANCHOR_ID);
        })
    };

    let on_next_page = {
        let browse = state.browse.clone();
        let catalog = state.catalog.clone();
        Callback::from(move |()| {
            let mut next = (*browse).clone();
            next.next_page(&catalog);
            browse.set(next);
            crate::dom::scroll_into_view(GRID_ANCHOR_ID);
        })
    };

    let on_home = {
        let on_select_fandom = on_select_fandom.clone();
        Callback::from(move |()| on_select_fandom.emit(None))
    };

    let on_dismiss_error = {
        let load_error = state.load_error.clone();
        Callback::from(move |()| load_error.set(None))
    };

    let main_view = if !state.catalog_ready() {
        // Pre-render state: the shell stays up while the fetch is in flight.
        Html::default()
    } else if matches!(route, Some(Route::NotFound)) {
        html! { <NotFoundPage on_home={on_home.clone()} /> }
    } else {
        match browse.view() {
            View::Featured => html! {
                <HomePage
                    catalog={catalog.clone()}
                    on_select_fandom={on_select_fandom.clone()}
                />
            },
            View::Detail => html! {
                <FandomPage
                    catalog={catalog.clone()}
                    browse={browse.clone()}
                    on_select_fandom={on_select_fandom.clone()}
                    on_select_type={on_select_type}
                    on_prev_page={on_prev_page}
                    on_next_page={on_next_page}
                />
            },
        }
    };

    html! {
        <>
            <CursorLayer />
            <Header
                open={*state.nav_open}
                on_toggle={on_toggle_nav}
                on_home={on_home}
                on_navigate={close_nav}
            />
            <main id="main">
                if let Some(message) = (*state.load_error).clone() {
                    <ErrorBanner message={AttrValue::from(message)} on_dismiss={on_dismiss_error} />
                }
                { main_view }
            </main>
            <Footer />
        </>
    }
}
