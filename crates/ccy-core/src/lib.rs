//! # ccy-core
//!
//! Static country-to-currency reference data.
//!
//! This crate maps ISO 3166-1 alpha-2 country codes to their ISO 4217
//! currency codes and minor-unit decimal counts. The dataset is compiled
//! into the binary and never changes at runtime; every lookup is a pure
//! read over a `static` table.
//!
//! ## Features
//!
//! - **Full coverage**: every assigned alpha-2 code with a circulating currency
//! - **Serde Integration**: records serialize with their exported field names
//! - **No I/O**: no network, no disk, no environment configuration
//!
//! ## Usage
//!
//! ```
//! use ccy_core::{get_currency, get_decimals_by_currency_iso_code};
//!
//! assert_eq!(get_currency("US").unwrap(), "USD");
//! assert_eq!(get_decimals_by_currency_iso_code("JPY").unwrap(), 0);
//! ```

pub mod data;
pub mod error;
pub mod lookup;
pub mod types;

pub use data::COUNTRY_CURRENCIES;
pub use error::{Error, Result};
pub use lookup::{
  get_country, get_currencies, get_currency, get_decimals_by_country_iso_code,
  get_decimals_by_currency_iso_code,
};
pub use types::{is_country_code, is_currency_code, CountryCurrencyInfo};
