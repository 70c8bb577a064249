//! Browse state: which fandom, which product type, which page.
//!
//! This is the only mutable structure in the engine. It is owned by the
//! application shell and mutated exclusively through the methods here, so
//! every transition rule (page resets, first-filter defaults) lives in one
//! place instead of being scattered across click handlers.

use crate::catalog::{Catalog, Product};
use crate::pager::{PAGE_SIZE, PageView, page_count, page_slice};

/// Which top-level view the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Default landing state: featured fandoms, no fandom selected.
    Featured,
    /// Per-fandom state: filterable, paginated products.
    Detail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    /// Selected fandom id; `None` in the featured view.
    pub current_fandom: Option<String>,
    /// Selected product-type id; `None` until a fandom is entered.
    pub current_product_type: Option<String>,
    /// 1-based page within the current bucket.
    pub current_page: usize,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::featured()
    }
}

impl BrowseState {
    /// Initial state: featured view, nothing selected, page 1.
    #[must_use]
    pub const fn featured() -> Self {
        Self {
            current_fandom: None,
            current_product_type: None,
            current_page: 1,
        }
    }

    #[must_use]
    pub const fn view(&self) -> View {
        match self.current_fandom {
            Some(_) => View::Detail,
            None => View::Featured,
        }
    }

    /// Enter the detail view for `fandom_id`. The product-type filter snaps
    /// to the fandom's first resolvable type and the page resets to 1.
    /// Selecting a fandom the catalog does not know returns to featured.
    pub fn select_fandom(&mut self, catalog: &Catalog, fandom_id: &str) {
        let Some(fandom) = catalog.fandom(fandom_id) else {
            self.show_featured();
            return;
        };
        self.current_fandom = Some(fandom.id.clone());
        self.current_product_type = catalog
            .type_filters(fandom)
            .first()
            .map(|t| t.id.clone());
        self.current_page = 1;
    }

    /// Return to the featured view, clearing the fandom selection.
    pub fn show_featured(&mut self) {
        self.current_fandom = None;
        self.current_product_type = None;
        self.current_page = 1;
    }

    /// Switch the product-type filter within the current fandom.
    pub fn select_product_type(&mut self, type_id: &str) {
        self.current_product_type = Some(type_id.to_string());
        self.current_page = 1;
    }

    /// The bucket selected by the current fandom and type. Empty when no
    /// fandom is selected or the bucket key is absent.
    #[must_use]
    pub fn current_products<'a>(&self, catalog: &'a Catalog) -> &'a [Product] {
        let Some(fandom_id) = self.current_fandom.as_deref() else {
            return &[];
        };
        let Some(fandom) = catalog.fandom(fandom_id) else {
            return &[];
        };
        self.current_product_type
            .as_deref()
            .map_or(&[], |type_id| fandom.products_of(type_id))
    }

    /// The current page's slice of the selected bucket.
    #[must_use]
    pub fn page_products<'a>(&self, catalog: &'a Catalog) -> &'a [Product] {
        page_slice(self.current_products(catalog), self.current_page, PAGE_SIZE)
    }

    /// Pager position for the selected bucket.
    #[must_use]
    pub fn page_view(&self, catalog: &Catalog) -> PageView {
        let total = page_count(self.current_products(catalog).len(), PAGE_SIZE);
        PageView::new(self.current_page, total)
    }

    /// Step back one page, saturating at page 1.
    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Step forward one page, saturating at the last page of the bucket.
    pub fn next_page(&mut self, catalog: &Catalog) {
        let total = page_count(self.current_products(catalog).len(), PAGE_SIZE);
        if self.current_page < total {
            self.current_page += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Fandom, ProductType};
    use std::collections::BTreeMap;

    fn product(n: usize) -> Product {
        Product {
            id: format!("p{n}"),
            image: format!("assets/img/p{n}.png"),
            name: format!("Product {n}"),
        }
    }

    fn catalog_with_bucket(count: usize) -> Catalog {
        Catalog {
            fandoms: vec![Fandom {
                id: "isaac".to_string(),
                name: "Isaac".to_string(),
                featured: true,
                thumbnail: String::new(),
                products: BTreeMap::from([(
                    "keychain".to_string(),
                    (0..count).map(product).collect(),
                )]),
            }],
            product_types: vec![ProductType {
                id: "keychain".to_string(),
                name: "Keychains".to_string(),
                icon: "key".to_string(),
            }],
        }
    }

    #[test]
    fn selecting_a_fandom_defaults_to_first_filter_on_page_one() {
        let catalog = catalog_with_bucket(3);
        let mut state = BrowseState::featured();
        state.current_page = 9; // poison to prove the reset
        state.select_fandom(&catalog, "isaac");
        assert_eq!(state.view(), View::Detail);
        assert_eq!(state.current_product_type.as_deref(), Some("keychain"));
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn selecting_unknown_fandom_falls_back_to_featured() {
        let catalog = catalog_with_bucket(3);
        let mut state = BrowseState::featured();
        state.select_fandom(&catalog, "nope");
        assert_eq!(state.view(), View::Featured);
        assert!(state.current_fandom.is_none());
    }

    #[test]
    fn type_switch_resets_page() {
        let catalog = catalog_with_bucket(13);
        let mut state = BrowseState::featured();
        state.select_fandom(&catalog, "isaac");
        state.next_page(&catalog);
        assert_eq!(state.current_page, 2);
        state.select_product_type("keychain");
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn paging_saturates_at_both_ends() {
        let catalog = catalog_with_bucket(13);
        let mut state = BrowseState::featured();
        state.select_fandom(&catalog, "isaac");
        state.prev_page();
        assert_eq!(state.current_page, 1);
        for _ in 0..10 {
            state.next_page(&catalog);
        }
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn featured_view_has_no_products() {
        let catalog = catalog_with_bucket(5);
        let state = BrowseState::featured();
        assert!(state.current_products(&catalog).is_empty());
        assert_eq!(state.page_view(&catalog).total, 0);
    }

    #[test]
    fn missing_bucket_pages_are_empty() {
        let catalog = catalog_with_bucket(5);
        let mut state = BrowseState::featured();
        state.select_fandom(&catalog, "isaac");
        state.select_product_type("poster");
        assert!(state.page_products(&catalog).is_empty());
        assert_eq!(state.page_view(&catalog).total, 0);
    }
}
