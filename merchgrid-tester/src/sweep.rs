//! Browse sweep: walks every fandom, resolvable type and page of a catalog
//! and asserts the pagination invariants the web grid relies on.

use crate::report::CheckResult;
use merchgrid_catalog::{BrowseState, Catalog, PageView, page_count, page_slice};
use std::time::Instant;

pub fn run(catalog_name: &str, catalog: &Catalog, page_size: usize, verbose: bool) -> CheckResult {
    let start = Instant::now();
    let mut findings = Vec::new();

    for fandom in &catalog.fandoms {
        for ty in catalog.type_filters(fandom) {
            let bucket = fandom.products_of(&ty.id);
            sweep_bucket(
                &format!("{}/{}", fandom.id, ty.id),
                bucket.len(),
                bucket,
                page_size,
                &mut findings,
            );
            if verbose {
                log::info!(
                    "swept {}/{}: {} item(s), {} page(s)",
                    fandom.id,
                    ty.id,
                    bucket.len(),
                    page_count(bucket.len(), page_size)
                );
            }
        }
    }

    findings.extend(reset_violations(catalog));

    CheckResult {
        catalog: catalog_name.to_string(),
        check: "browse".to_string(),
        passed: findings.is_empty(),
        findings,
        duration: start.elapsed(),
    }
}

fn sweep_bucket<T>(
    label: &str,
    total: usize,
    items: &[T],
    page_size: usize,
    findings: &mut Vec<String>,
) {
    let pages = page_count(total, page_size);
    for page in 1..=pages {
        let expected = page_size.min(total - (page - 1) * page_size);
        let got = page_slice(items, page, page_size).len();
        if got != expected {
            findings.push(format!(
                "'{label}' page {page}: expected {expected} item(s), got {got}"
            ));
        }
        let view = PageView::new(page, pages);
        if view.has_prev() != (page > 1) {
            findings.push(format!("'{label}' page {page}: wrong prev flag"));
        }
        if view.has_next() != (page < pages) {
            findings.push(format!("'{label}' page {page}: wrong next flag"));
        }
    }
    if !page_slice(items, pages + 1, page_size).is_empty() {
        findings.push(format!("'{label}': page past the end is not empty"));
    }
    if pages == 0 && PageView::new(1, 0).has_next() {
        findings.push(format!("'{label}': empty bucket must disable next"));
    }
}

/// Drive the browse state through fandom and type switches, checking the
/// page-1 reset rule on every transition.
fn reset_violations(catalog: &Catalog) -> Vec<String> {
    let mut findings = Vec::new();
    let mut state = BrowseState::featured();
    for fandom in &catalog.fandoms {
        state.select_fandom(catalog, &fandom.id);
        if state.current_page != 1 {
            findings.push(format!("selecting '{}' did not reset the page", fandom.id));
        }
        for ty in catalog.type_filters(fandom) {
            state.next_page(catalog);
            state.select_product_type(&ty.id);
            if state.current_page != 1 {
                findings.push(format!(
                    "selecting type '{}' in '{}' did not reset the page",
                    ty.id, fandom.id
                ));
            }
        }
        state.next_page(catalog);
    }
    state.show_featured();
    if state.current_fandom.is_some() || state.current_page != 1 {
        findings.push("returning to featured did not clear the selection".to_string());
    }
    findings
}
