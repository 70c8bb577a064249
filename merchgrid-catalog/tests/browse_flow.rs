//! End-to-end browse scenarios across catalog, browse state and pager.

use merchgrid_catalog::{BrowseState, Catalog, View};

fn demo_catalog() -> Catalog {
    let mut products = String::new();
    for n in 1..=13 {
        if n > 1 {
            products.push(',');
        }
        products.push_str(&format!(
            r#"{{ "id": "k{n}", "image": "assets/img/k{n}.png", "name": "Keychain {n}" }}"#
        ));
    }
    Catalog::from_json(&format!(
        r#"{{
            "fandoms": [
                {{
                    "id": "isaac", "name": "The Binding of Isaac", "featured": true,
                    "thumbnail": "assets/img/isaac.png",
                    "products": {{ "keychain": [{products}] }}
                }},
                {{
                    "id": "hollow-knight", "name": "Hollow Knight", "featured": false,
                    "thumbnail": "assets/img/hk.png",
                    "products": {{ "keychain": [] }}
                }}
            ],
            "productTypes": [ {{ "id": "keychain", "name": "Keychains", "icon": "key" }} ]
        }}"#
    ))
    .unwrap()
}

#[test]
fn thirteen_products_paginate_as_six_six_one() {
    let catalog = demo_catalog();
    let mut state = BrowseState::featured();
    state.select_fandom(&catalog, "isaac");

    assert_eq!(state.page_view(&catalog).total, 3);
    assert_eq!(state.page_products(&catalog).len(), 6);

    state.next_page(&catalog);
    assert_eq!(state.page_products(&catalog).len(), 6);
    let view = state.page_view(&catalog);
    assert!(view.has_prev());
    assert!(view.has_next());

    state.next_page(&catalog);
    assert_eq!(state.page_products(&catalog).len(), 1);
    let view = state.page_view(&catalog);
    assert!(view.has_prev());
    assert!(!view.has_next(), "next must disable only on page 3");
}

#[test]
fn next_is_enabled_everywhere_but_the_last_page() {
    let catalog = demo_catalog();
    let mut state = BrowseState::featured();
    state.select_fandom(&catalog, "isaac");
    for expected_page in 1..=3 {
        assert_eq!(state.current_page, expected_page);
        let view = state.page_view(&catalog);
        assert_eq!(view.has_next(), expected_page < 3);
        assert_eq!(view.has_prev(), expected_page > 1);
        state.next_page(&catalog);
    }
}

#[test]
fn returning_to_all_clears_the_fandom() {
    let catalog = demo_catalog();
    let mut state = BrowseState::featured();

    state.select_fandom(&catalog, "isaac");
    assert_eq!(state.view(), View::Detail);
    assert_eq!(state.current_fandom.as_deref(), Some("isaac"));

    state.show_featured();
    assert_eq!(state.view(), View::Featured);
    assert!(state.current_fandom.is_none());
    assert_eq!(state.current_page, 1);
}

#[test]
fn switching_fandom_from_detail_resets_page() {
    let catalog = demo_catalog();
    let mut state = BrowseState::featured();
    state.select_fandom(&catalog, "isaac");
    state.next_page(&catalog);
    assert_eq!(state.current_page, 2);

    // Detail -> Detail directly from the top-level filter.
    state.select_fandom(&catalog, "hollow-knight");
    assert_eq!(state.current_fandom.as_deref(), Some("hollow-knight"));
    assert_eq!(state.current_page, 1);
    assert!(state.page_products(&catalog).is_empty());
    assert_eq!(state.page_view(&catalog).total, 0);
}

#[test]
fn empty_bucket_disables_both_controls() {
    let catalog = demo_catalog();
    let mut state = BrowseState::featured();
    state.select_fandom(&catalog, "hollow-knight");
    let view = state.page_view(&catalog);
    assert!(!view.has_prev());
    assert!(!view.has_next());
}
