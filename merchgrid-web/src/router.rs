use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/fandom/:id")]
    Fandom { id: String },
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Route mirroring a fandom selection: `None` is the featured view.
    #[must_use]
    pub fn from_selection(fandom: Option<&str>) -> Self {
        fandom.map_or(Self::Home, |id| Self::Fandom { id: id.to_string() })
    }

    /// Fandom selection implied by this route. `None` means the route does
    /// not carry a selection (404 keeps whatever is showing).
    #[must_use]
    pub fn to_selection(&self) -> Option<Option<String>> {
        match self {
            Self::Home => Some(None),
            Self::Fandom { id } => Some(Some(id.clone())),
            Self::NotFound => None,
        }
    }
}
