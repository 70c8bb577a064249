#[cfg(any(target_arch = "wasm32", test))]
use crate::app::state::AppState;
#[cfg(any(target_arch = "wasm32", test))]
use merchgrid_catalog::Catalog;
#[cfg(any(target_arch = "wasm32", test))]
use std::rc::Rc;
#[cfg(any(target_arch = "wasm32", test))]
use yew::prelude::*;

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Clone)]
struct BootstrapHandles {
    catalog: UseStateHandle<Rc<Catalog>>,
    load_error: UseStateHandle<Option<String>>,
    boot_ready: UseStateHandle<bool>,
}

#[cfg(any(target_arch = "wasm32", test))]
fn handles_from_state(app_state: &AppState) -> BootstrapHandles {
    BootstrapHandles {
        catalog: app_state.catalog.clone(),
        load_error: app_state.load_error.clone(),
        boot_ready: app_state.boot_ready.clone(),
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn apply_catalog(handles: &BootstrapHandles, catalog: Catalog, error: Option<String>) {
    handles.catalog.set(Rc::new(catalog));
    handles.load_error.set(error);
    handles.boot_ready.set(true);
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let handles = handles_from_state(app_state);

    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            let (catalog, error) =
                crate::loader::load_or_fallback(crate::loader::CATALOG_URL).await;
            apply_catalog(&handles, catalog, error.map(|err| err.to_string()));
        });
        || {}
    });
}
