//! Catalog linting used by the QA tester.
//!
//! The web application tolerates all of these conditions at runtime (unknown
//! type keys are skipped, empty buckets render as empty grids), so none of
//! them are load errors. They are still authoring mistakes worth surfacing
//! before a catalog ships.

use crate::catalog::Catalog;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogIssue {
    #[error("duplicate fandom id '{0}'")]
    DuplicateFandom(String),
    #[error("duplicate product-type id '{0}'")]
    DuplicateProductType(String),
    #[error("fandom '{fandom}' references undeclared product type '{key}'")]
    UnknownProductType { fandom: String, key: String },
    #[error("fandom '{fandom}' has an empty '{key}' bucket")]
    EmptyBucket { fandom: String, key: String },
    #[error("product '{product}' in fandom '{fandom}' has no image")]
    MissingImage { fandom: String, product: String },
    #[error("fandom '{0}' has no thumbnail")]
    MissingThumbnail(String),
}

/// Lint a catalog, reporting every issue found. An empty result means clean.
#[must_use]
pub fn validate_catalog(catalog: &Catalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    let mut fandom_ids = BTreeSet::new();
    for fandom in &catalog.fandoms {
        if !fandom_ids.insert(fandom.id.as_str()) {
            issues.push(CatalogIssue::DuplicateFandom(fandom.id.clone()));
        }
    }

    let mut type_ids = BTreeSet::new();
    for ty in &catalog.product_types {
        if !type_ids.insert(ty.id.as_str()) {
            issues.push(CatalogIssue::DuplicateProductType(ty.id.clone()));
        }
    }

    for fandom in &catalog.fandoms {
        if fandom.thumbnail.is_empty() {
            issues.push(CatalogIssue::MissingThumbnail(fandom.id.clone()));
        }
        for (key, bucket) in &fandom.products {
            if !type_ids.contains(key.as_str()) {
                issues.push(CatalogIssue::UnknownProductType {
                    fandom: fandom.id.clone(),
                    key: key.clone(),
                });
            }
            if bucket.is_empty() {
                issues.push(CatalogIssue::EmptyBucket {
                    fandom: fandom.id.clone(),
                    key: key.clone(),
                });
            }
            for product in bucket {
                if product.image.is_empty() {
                    issues.push(CatalogIssue::MissingImage {
                        fandom: fandom.id.clone(),
                        product: product.id.clone(),
                    });
                }
            }
        }
    }

    issues
}
