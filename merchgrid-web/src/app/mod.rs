#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod routing;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);

    let route = use_route::<Route>();
    let navigator = use_navigator();

    routing::use_sync_route_with_browse(&app_state.browse, navigator, route.clone());
    routing::use_sync_browse_with_route(&app_state, route.clone());

    view::render_app(&app_state, route.as_ref())
}

#[cfg(test)]
mod tests {
    use crate::router::Route;

    #[test]
    fn route_selection_mappings_round_trip() {
        let selections = [None, Some("isaac".to_string())];
        for selection in selections {
            let route = Route::from_selection(selection.as_deref());
            assert_eq!(route.to_selection(), Some(selection));
        }
    }

    #[test]
    fn not_found_carries_no_selection() {
        assert_eq!(Route::NotFound.to_selection(), None);
    }
}
