use crate::report::CheckResult;
use merchgrid_catalog::{Catalog, validate_catalog};
use std::time::Instant;

/// Lint one catalog for authoring mistakes the web app would paper over.
pub fn run(catalog_name: &str, catalog: &Catalog) -> CheckResult {
    let start = Instant::now();
    let findings: Vec<String> = validate_catalog(catalog)
        .into_iter()
        .map(|issue| issue.to_string())
        .collect();
    log::debug!("{catalog_name}: {} lint finding(s)", findings.len());
    CheckResult {
        catalog: catalog_name.to_string(),
        check: "validate".to_string(),
        passed: findings.is_empty(),
        findings,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO_CATALOG: &str =
        include_str!("../../merchgrid-web/static/assets/data/catalog.json");

    #[test]
    fn shipped_demo_catalog_passes_validation() {
        let catalog = Catalog::from_json(DEMO_CATALOG).unwrap();
        let result = run("catalog.json", &catalog);
        assert!(result.passed, "findings: {:?}", result.findings);
    }

    #[test]
    fn duplicate_ids_fail_validation() {
        let catalog = Catalog::from_json(
            r#"{
                "fandoms": [
                    { "id": "a", "name": "A", "thumbnail": "a.png", "products": {} },
                    { "id": "a", "name": "A again", "thumbnail": "a.png", "products": {} }
                ],
                "productTypes": []
            }"#,
        )
        .unwrap();
        let result = run("dup.json", &catalog);
        assert!(!result.passed);
        assert!(result.findings[0].contains("duplicate fandom id"));
    }
}
