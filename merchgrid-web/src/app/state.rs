use merchgrid_catalog::{BrowseState, Catalog};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub catalog: UseStateHandle<Rc<Catalog>>,
    pub browse: UseStateHandle<BrowseState>,
    pub load_error: UseStateHandle<Option<String>>,
    pub boot_ready: UseStateHandle<bool>,
    pub nav_open: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        catalog: use_state(|| Rc::new(Catalog::default())),
        browse: use_state(BrowseState::featured),
        load_error: use_state(|| None::<String>),
        boot_ready: use_state(|| false),
        nav_open: use_state(|| false),
    }
}

impl AppState {
    /// The catalog is usable once the loader has resolved, fallback included.
    #[must_use]
    pub fn catalog_ready(&self) -> bool {
        *self.boot_ready
    }
}
