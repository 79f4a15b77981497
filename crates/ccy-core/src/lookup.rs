/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Lookup functions over the country-currency dataset.
//!
//! All lookups are linear scans over [`COUNTRY_CURRENCIES`]. Matching is
//! exact and case-sensitive; no trimming or case-folding is applied to the
//! caller's code. When a currency is shared by several countries, the first
//! record in dataset order wins.

use crate::data::COUNTRY_CURRENCIES;
use crate::error::{Error, Result};
use crate::types::CountryCurrencyInfo;

/// Get the primary ISO 4217 currency code for a country.
///
/// Returns [`Error::NotFound`] when no record matches `country_iso_code`.
pub fn get_currency(country_iso_code: &str) -> Result<&'static str> {
  get_country(country_iso_code).map(|info| info.primary_currency())
}

/// Get all country-currency records, in dataset order.
pub fn get_currencies() -> &'static [CountryCurrencyInfo] {
  COUNTRY_CURRENCIES
}

/// Get the decimal places of a country's primary currency.
///
/// Returns [`Error::NotFound`] when no record matches `country_iso_code`.
pub fn get_decimals_by_country_iso_code(country_iso_code: &str) -> Result<u8> {
  get_country(country_iso_code).map(|info| info.decimals)
}

/// Get the decimal places recorded for a currency code.
///
/// Taken from the first record whose currency list contains
/// `currency_iso_code`. Returns [`Error::NotFound`] when no record lists it.
pub fn get_decimals_by_currency_iso_code(currency_iso_code: &str) -> Result<u8> {
  COUNTRY_CURRENCIES
    .iter()
    .find(|info| info.has_currency(currency_iso_code))
    .map(|info| info.decimals)
    .ok_or_else(|| Error::NotFound(currency_iso_code.to_string()))
}

/// Get the full record for a country.
///
/// Returns [`Error::NotFound`] when no record matches `country_iso_code`.
pub fn get_country(country_iso_code: &str) -> Result<&'static CountryCurrencyInfo> {
  COUNTRY_CURRENCIES
    .iter()
    .find(|info| info.country_iso_code == country_iso_code)
    .ok_or_else(|| Error::NotFound(country_iso_code.to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_us_scenario() {
    assert_eq!(get_currency("US").unwrap(), "USD");
    assert_eq!(get_decimals_by_country_iso_code("US").unwrap(), 2);
    assert_eq!(get_decimals_by_currency_iso_code("USD").unwrap(), 2);

    let us = get_country("US").unwrap();
    assert_eq!(
      *us,
      CountryCurrencyInfo { country_iso_code: "US", currencies: &["USD"], decimals: 2 }
    );
  }

  #[test]
  fn test_zero_and_three_decimal_currencies() {
    assert_eq!(get_decimals_by_country_iso_code("JP").unwrap(), 0);
    assert_eq!(get_decimals_by_currency_iso_code("JPY").unwrap(), 0);
    assert_eq!(get_decimals_by_country_iso_code("KW").unwrap(), 3);
    assert_eq!(get_decimals_by_currency_iso_code("KWD").unwrap(), 3);
  }

  #[test]
  fn test_unknown_country_code() {
    assert!(matches!(get_currency("ZZ"), Err(Error::NotFound(code)) if code == "ZZ"));
    assert!(matches!(get_country("ZZ"), Err(Error::NotFound(code)) if code == "ZZ"));
    assert!(matches!(
      get_decimals_by_country_iso_code("ZZ"),
      Err(Error::NotFound(code)) if code == "ZZ"
    ));
  }

  #[test]
  fn test_unknown_currency_code() {
    assert!(matches!(
      get_decimals_by_currency_iso_code("ZZZ"),
      Err(Error::NotFound(code)) if code == "ZZZ"
    ));
  }

  #[test]
  fn test_no_normalization() {
    assert!(get_currency("us").is_err());
    assert!(get_currency(" US").is_err());
    assert!(get_currency("US ").is_err());
    assert!(get_decimals_by_currency_iso_code("usd").is_err());
  }

  // Shared currencies resolve through the first record in dataset order:
  // Andorra is the first Eurozone record, Bhutan lists INR ahead of India.
  #[test]
  fn test_shared_currency_first_match() {
    let first_eur = COUNTRY_CURRENCIES.iter().find(|info| info.has_currency("EUR")).unwrap();
    assert_eq!(first_eur.country_iso_code, "AD");
    assert_eq!(get_decimals_by_currency_iso_code("EUR").unwrap(), first_eur.decimals);
    assert_eq!(get_decimals_by_currency_iso_code("EUR").unwrap(), 2);

    let first_inr = COUNTRY_CURRENCIES.iter().find(|info| info.has_currency("INR")).unwrap();
    assert_eq!(first_inr.country_iso_code, "BT");
    assert_eq!(get_decimals_by_currency_iso_code("INR").unwrap(), first_inr.decimals);
  }

  #[test]
  fn test_get_currencies_returns_dataset() {
    let all = get_currencies();
    assert_eq!(all.len(), COUNTRY_CURRENCIES.len());
    assert!(std::ptr::eq(all, COUNTRY_CURRENCIES));
  }

  #[test]
  fn test_every_record_round_trips() {
    for info in COUNTRY_CURRENCIES {
      let code = info.country_iso_code;
      assert_eq!(get_country(code).unwrap(), info, "get_country({code})");
      assert_eq!(get_currency(code).unwrap(), info.currencies[0], "get_currency({code})");
      assert_eq!(
        get_decimals_by_country_iso_code(code).unwrap(),
        info.decimals,
        "get_decimals_by_country_iso_code({code})"
      );
    }
  }

  #[test]
  fn test_every_currency_resolves_to_first_listing() {
    for info in COUNTRY_CURRENCIES {
      for currency in info.currencies {
        let first = COUNTRY_CURRENCIES
          .iter()
          .find(|candidate| candidate.has_currency(currency))
          .unwrap();
        assert_eq!(
          get_decimals_by_currency_iso_code(currency).unwrap(),
          first.decimals,
          "get_decimals_by_currency_iso_code({currency})"
        );
      }
    }
  }
}
