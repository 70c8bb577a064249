#[cfg(any(target_arch = "wasm32", test))]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

/// Route the browse selection should land on, or `None` when the address bar
/// already matches.
#[cfg(any(target_arch = "wasm32", test))]
fn next_route_for_selection(fandom: Option<&str>, current_route: Option<&Route>) -> Option<Route> {
    let new_route = Route::from_selection(fandom);
    if Some(&new_route) == current_route {
        None
    } else {
        Some(new_route)
    }
}

/// Selection implied by a route change, or `None` when the browse state
/// already agrees (or the route carries no selection).
#[cfg(any(target_arch = "wasm32", test))]
fn next_selection_for_route(
    current_fandom: Option<&str>,
    route: Option<&Route>,
) -> Option<Option<String>> {
    let implied = route?.to_selection()?;
    if implied.as_deref() == current_fandom {
        None
    } else {
        Some(implied)
    }
}

/// Push the matching route whenever the fandom selection changes.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_browse(
    browse: &UseStateHandle<merchgrid_catalog::BrowseState>,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    let browse = browse.clone();
    use_effect_with((browse, active_route), move |(browse, current_route)| {
        if let (Some(nav), Some(new_route)) = (
            navigator.as_ref(),
            next_route_for_selection(browse.current_fandom.as_deref(), current_route.as_ref()),
        ) {
            nav.push(&new_route);
        }
    });
}

/// Apply a selection arriving through the address bar (deep link, back
/// button) to the browse state.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_browse_with_route(app_state: &crate::app::state::AppState, route: Option<Route>) {
    let browse = app_state.browse.clone();
    let catalog = app_state.catalog.clone();
    let ready = *app_state.boot_ready;
    use_effect_with((route, ready), move |(route, ready)| {
        if !*ready {
            return;
        }
        if let Some(selection) =
            next_selection_for_route(browse.current_fandom.as_deref(), route.as_ref())
        {
            let mut next = (*browse).clone();
            match selection.as_deref() {
                Some(id) => next.select_fandom(&catalog, id),
                None => next.show_featured(),
            }
            browse.set(next);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_pushes_route_only_when_it_differs() {
        assert_eq!(
            next_route_for_selection(Some("isaac"), Some(&Route::Home)),
            Some(Route::Fandom {
                id: "isaac".to_string()
            })
        );
        assert_eq!(
            next_route_for_selection(
                Some("isaac"),
                Some(&Route::Fandom {
                    id: "isaac".to_string()
                })
            ),
            None
        );
        assert_eq!(next_route_for_selection(None, Some(&Route::Home)), None);
        assert_eq!(
            next_route_for_selection(None, None),
            Some(Route::Home),
            "initial render has no route yet"
        );
    }

    #[test]
    fn route_updates_selection_only_when_it_differs() {
        let isaac = Route::Fandom {
            id: "isaac".to_string(),
        };
        assert_eq!(
            next_selection_for_route(None, Some(&isaac)),
            Some(Some("isaac".to_string()))
        );
        assert_eq!(next_selection_for_route(Some("isaac"), Some(&isaac)), None);
        assert_eq!(
            next_selection_for_route(Some("isaac"), Some(&Route::Home)),
            Some(None)
        );
        // 404 leaves the current selection alone.
        assert_eq!(
            next_selection_for_route(Some("isaac"), Some(&Route::NotFound)),
            None
        );
        assert_eq!(next_selection_for_route(None, None), None);
    }
}
