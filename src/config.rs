//! Storefront configuration.

use std::{fs, path::Path};

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{Currency, NGN},
};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    filters::PriceRange,
    money::{MoneyParseError, parse_currency, parse_percentage, parse_price},
};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A currency, price or rate could not be parsed
    #[error(transparent)]
    Money(#[from] MoneyParseError),

    /// Shipping is priced in a different currency than the store
    #[error("Shipping currency {1} does not match store currency {0}")]
    CurrencyMismatch(&'static str, &'static str),

    /// The default price range has its bounds the wrong way round
    #[error("Price range minimum {0} is above maximum {1}")]
    InvalidPriceRange(u64, u64),
}

/// Config file as written on disk.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    currency: Option<String>,
    shipping: Option<String>,
    tax_rate: Option<String>,
    price_range: Option<[u64; 2]>,
}

/// Settings for one storefront session.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Currency the cart is priced in
    pub currency: &'static Currency,

    /// Flat shipping charge per order
    pub shipping: Money<'static, Currency>,

    /// Sales tax (VAT) applied to the cart subtotal
    pub tax_rate: Percentage,

    /// Price range new filters start with
    pub price_range: PriceRange,
}

impl Default for StorefrontConfig {
    /// Naira pricing, ₦2,500 flat shipping and 7.5% VAT.
    fn default() -> Self {
        Self {
            currency: NGN,
            shipping: Money::from_minor(250_000, NGN),
            tax_rate: Percentage::from(Decimal::new(75, 3)),
            price_range: PriceRange::default(),
        }
    }
}

impl StorefrontConfig {
    /// Parse a YAML config. Keys that are left out keep their default value.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a value cannot be parsed,
    /// shipping is priced in another currency or the price range is inverted.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_norway::from_str(yaml)?;
        let mut config = Self::default();

        if let Some(code) = file.currency.as_deref() {
            config.currency = parse_currency(code)?;
            config.shipping = Money::from_minor(0, config.currency);
        }

        if let Some(shipping) = file.shipping.as_deref() {
            config.shipping = parse_price(shipping)?;
        }

        let shipping_currency = config.shipping.currency();

        if shipping_currency != config.currency {
            return Err(ConfigError::CurrencyMismatch(
                config.currency.iso_alpha_code,
                shipping_currency.iso_alpha_code,
            ));
        }

        if let Some(rate) = file.tax_rate.as_deref() {
            config.tax_rate = parse_percentage(rate)?;
        }

        if let Some([min, max]) = file.price_range {
            if min > max {
                return Err(ConfigError::InvalidPriceRange(min, max));
            }

            config.price_range = PriceRange::new(Decimal::from(min), Decimal::from(max));
        }

        debug!(
            currency = config.currency.iso_alpha_code,
            shipping = %config.shipping,
            "loaded storefront config"
        );

        Ok(config)
    }

    /// Read and parse a YAML config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or see [`StorefrontConfig::from_yaml`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }
}
