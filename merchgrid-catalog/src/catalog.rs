use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single merchandise item inside one (fandom, product type) bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub image: String,
    pub name: String,
}

/// A merchandise category (keychain, sticker, ...) declared at catalog level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

/// A themed collection grouping products by product-type id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fandom {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub products: BTreeMap<String, Vec<Product>>,
}

impl Fandom {
    /// Products for one type key. A missing key is an empty bucket, not an error.
    #[must_use]
    pub fn products_of(&self, type_id: &str) -> &[Product] {
        self.products.get(type_id).map_or(&[], Vec::as_slice)
    }
}

/// Root catalog document. Loaded once at boot and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Catalog {
    #[serde(default)]
    pub fandoms: Vec<Fandom>,
    #[serde(rename = "productTypes", default)]
    pub product_types: Vec<ProductType>,
}

impl Catalog {
    /// Load a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into the catalog shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Embedded substitute catalog used when the real one cannot be fetched:
    /// exactly one sample fandom and one product type, so downstream rendering
    /// never operates on an absent catalog.
    #[must_use]
    pub fn fallback() -> Self {
        let sample = Product {
            id: "sample-keychain".to_string(),
            image: "assets/img/placeholder.png".to_string(),
            name: "Sample Keychain".to_string(),
        };
        Self {
            fandoms: vec![Fandom {
                id: "sample".to_string(),
                name: "Sample Collection".to_string(),
                featured: true,
                thumbnail: "assets/img/placeholder.png".to_string(),
                products: BTreeMap::from([("keychain".to_string(), vec![sample])]),
            }],
            product_types: vec![ProductType {
                id: "keychain".to_string(),
                name: "Keychains".to_string(),
                icon: "key".to_string(),
            }],
        }
    }

    #[must_use]
    pub fn fandom(&self, id: &str) -> Option<&Fandom> {
        self.fandoms.iter().find(|f| f.id == id)
    }

    #[must_use]
    pub fn product_type(&self, id: &str) -> Option<&ProductType> {
        self.product_types.iter().find(|t| t.id == id)
    }

    /// Fandoms shown in the featured landing view.
    #[must_use]
    pub fn featured_fandoms(&self) -> Vec<&Fandom> {
        self.fandoms.iter().filter(|f| f.featured).collect()
    }

    /// Product-type filters for one fandom, in catalog declaration order.
    /// Keys in `Fandom::products` that do not resolve to a declared type are
    /// skipped here, which is what makes them invisible to the UI.
    #[must_use]
    pub fn type_filters<'a>(&'a self, fandom: &Fandom) -> Vec<&'a ProductType> {
        self.product_types
            .iter()
            .filter(|t| fandom.products.contains_key(&t.id))
            .collect()
    }

    /// Total number of products across all fandoms and buckets.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.fandoms
            .iter()
            .flat_map(|f| f.products.values())
            .map(Vec::len)
            .sum()
    }
}
