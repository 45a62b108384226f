//! Catalogue
//!
//! A read-only product list loaded from YAML, used to seed demos and tests
//! with the same products the backend's sample data ships with.

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    filters::Filters,
    money::{MoneyParseError, parse_price},
    products::{AfricanStyle, Product, ProductId},
};

/// Catalogue loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading the catalogue file
    #[error("Failed to read catalogue file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A product price could not be parsed
    #[error(transparent)]
    Money(#[from] MoneyParseError),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(&'static str, &'static str),

    /// Two products share an id
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),
}

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<ProductEntry>,
}

#[derive(Debug, Deserialize)]
struct ProductEntry {
    id: ProductId,
    title: String,
    #[serde(default)]
    slug: String,
    #[serde(default)]
    description: String,
    /// e.g. "15000 NGN"
    price: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    african_style: Option<AfricanStyle>,
    #[serde(default)]
    primary_image: Option<String>,
    #[serde(default)]
    colors_available: Vec<String>,
    #[serde(default)]
    sizes_available: Vec<String>,
    #[serde(default)]
    stock_quantity: u32,
    #[serde(default)]
    is_custom_order: bool,
    #[serde(default)]
    is_featured: bool,
}

impl TryFrom<ProductEntry> for Product<'static> {
    type Error = CatalogError;

    fn try_from(entry: ProductEntry) -> Result<Self, Self::Error> {
        let price = parse_price(&entry.price)?;

        let slug = if entry.slug.is_empty() {
            slugify(&entry.title)
        } else {
            entry.slug
        };

        Ok(Product {
            id: entry.id,
            title: entry.title,
            slug,
            description: entry.description,
            price,
            category: entry.category,
            african_style: entry.african_style,
            primary_image: entry.primary_image,
            colors_available: entry.colors_available,
            sizes_available: entry.sizes_available,
            stock_quantity: entry.stock_quantity,
            is_custom_order: entry.is_custom_order,
            is_featured: entry.is_featured,
        })
    }
}

/// Lowercase, with runs of non-alphanumerics collapsed to a single `-`.
fn slugify(title: &str) -> String {
    title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Products in file order, all priced in one currency.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product<'static>>,
    index: FxHashMap<ProductId, usize>,
    currency: Option<&'static Currency>,
}

impl Catalog {
    /// Parse a catalogue from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a price cannot be parsed,
    /// products are priced in different currencies or an id repeats.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_norway::from_str(yaml)?;
        let mut catalog = Catalog::default();

        for entry in file.products {
            catalog.insert(entry.try_into()?)?;
        }

        debug!(products = catalog.len(), "loaded catalogue");

        Ok(catalog)
    }

    /// Read and parse a YAML catalogue file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or see [`Catalog::from_yaml`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    fn insert(&mut self, product: Product<'static>) -> Result<(), CatalogError> {
        let currency = product.price.currency();

        match self.currency {
            Some(existing) if existing != currency => {
                return Err(CatalogError::CurrencyMismatch(
                    existing.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }
            Some(_) => {}
            None => self.currency = Some(currency),
        }

        if self.index.contains_key(&product.id) {
            return Err(CatalogError::DuplicateProduct(product.id));
        }

        self.index.insert(product.id, self.products.len());
        self.products.push(product);

        Ok(())
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product<'static>> {
        self.index.get(&id).and_then(|&idx| self.products.get(idx))
    }

    /// Iterate over products in file order.
    pub fn iter(&self) -> impl Iterator<Item = &Product<'static>> {
        self.products.iter()
    }

    /// Products passing `filters`, in file order.
    pub fn filter<'f>(
        &'f self,
        filters: &'f Filters,
    ) -> impl Iterator<Item = &'f Product<'static>> + 'f {
        self.products
            .iter()
            .filter(move |product| filters.matches(product))
    }

    /// Products flagged for the home page.
    pub fn featured(&self) -> impl Iterator<Item = &Product<'static>> {
        self.products.iter().filter(|product| product.is_featured)
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Currency shared by every product, `None` while empty.
    #[must_use]
    pub fn currency(&self) -> Option<&'static Currency> {
        self.currency
    }
}
