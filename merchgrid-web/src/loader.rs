//! Catalog loading: one best-effort fetch, then the embedded fallback.

use crate::dom;
use merchgrid_catalog::Catalog;
use thiserror::Error;
use wasm_bindgen_futures::JsFuture;

/// Fixed relative path of the catalog document.
pub const CATALOG_URL: &str = "assets/data/catalog.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("catalog fetch failed: {0}")]
    Network(String),
    #[error("catalog request returned HTTP {0}")]
    Http(u16),
    #[error("catalog response body unavailable: {0}")]
    Body(String),
    #[error("catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetch and parse the catalog. Single attempt, no retry, no timeout.
///
/// # Errors
/// Returns a [`LoadError`] describing the first failure along the
/// fetch → status check → body → parse pipeline.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_catalog(url: &str) -> Result<Catalog, LoadError> {
    let response = dom::fetch_response(url)
        .await
        .map_err(|err| LoadError::Network(dom::js_error_message(&err)))?;
    if !response.ok() {
        return Err(LoadError::Http(response.status()));
    }
    let text_promise = response
        .text()
        .map_err(|err| LoadError::Body(dom::js_error_message(&err)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|err| LoadError::Body(dom::js_error_message(&err)))?;
    let body = text
        .as_string()
        .ok_or_else(|| LoadError::Body("response body is not text".to_string()))?;
    Ok(Catalog::from_json(&body)?)
}

/// Fetch the catalog, substituting [`Catalog::fallback`] on any failure so
/// downstream rendering never sees an absent catalog. The error, if any, is
/// logged and returned for the banner; nothing propagates past here.
#[allow(clippy::future_not_send)]
pub async fn load_or_fallback(url: &str) -> (Catalog, Option<LoadError>) {
    match fetch_catalog(url).await {
        Ok(catalog) => (catalog, None),
        Err(err) => {
            log::warn!("substituting fallback catalog: {err}");
            dom::console_error(&format!("{err}"));
            (Catalog::fallback(), Some(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_carry_serde_detail() {
        let err = Catalog::from_json("{ not json").map(|_| ()).unwrap_err();
        let load_err = LoadError::from(err);
        assert!(load_err.to_string().starts_with("catalog parse failed"));
    }

    #[test]
    fn http_errors_name_the_status() {
        assert_eq!(
            LoadError::Http(404).to_string(),
            "catalog request returned HTTP 404"
        );
    }
}
