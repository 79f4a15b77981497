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

//! Country-currency record type and ISO code shape predicates.

use serde::Serialize;

/// Currency information for a single country.
///
/// `currencies` is ordered: the first entry is the country's primary
/// currency, and `decimals` is the minor-unit count of that primary
/// currency (2 for USD, 0 for JPY, 3 for KWD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CountryCurrencyInfo {
  /// ISO 3166-1 alpha-2 country code
  #[serde(rename = "CountryIsoCode")]
  pub country_iso_code: &'static str,
  /// ISO 4217 currency codes, primary currency first; never empty
  #[serde(rename = "Currencies")]
  pub currencies: &'static [&'static str],
  /// Decimal places (minor units) of the primary currency
  #[serde(rename = "Decimals")]
  pub decimals: u8,
}

impl CountryCurrencyInfo {
  /// Get the country's primary currency code
  pub fn primary_currency(&self) -> &'static str {
    self.currencies[0]
  }

  /// Check if this record lists the given currency code
  pub fn has_currency(&self, currency_iso_code: &str) -> bool {
    self.currencies.iter().any(|c| *c == currency_iso_code)
  }
}

impl std::fmt::Display for CountryCurrencyInfo {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}: {}", self.country_iso_code, self.currencies.join("/"))
  }
}

/// Check that a code has the ISO 3166-1 alpha-2 shape: exactly two
/// uppercase ASCII letters. Shape only, not membership in the dataset.
pub fn is_country_code(code: &str) -> bool {
  code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// Check that a code has the ISO 4217 shape: exactly three uppercase
/// ASCII letters. Shape only, not membership in the dataset.
pub fn is_currency_code(code: &str) -> bool {
  code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
  use super::*;

  const US: CountryCurrencyInfo =
    CountryCurrencyInfo { country_iso_code: "US", currencies: &["USD"], decimals: 2 };

  #[test]
  fn test_record_accessors() {
    assert_eq!(US.primary_currency(), "USD");
    assert!(US.has_currency("USD"));
    assert!(!US.has_currency("EUR"));
    assert!(!US.has_currency("usd"));

    let bt = CountryCurrencyInfo { country_iso_code: "BT", currencies: &["BTN", "INR"], decimals: 2 };
    assert_eq!(bt.primary_currency(), "BTN");
    assert!(bt.has_currency("INR"));
  }

  #[test]
  fn test_record_display() {
    assert_eq!(format!("{}", US), "US: USD");

    let bt = CountryCurrencyInfo { country_iso_code: "BT", currencies: &["BTN", "INR"], decimals: 2 };
    assert_eq!(format!("{}", bt), "BT: BTN/INR");
  }

  #[test]
  fn test_country_code_shape() {
    assert!(is_country_code("US"));
    assert!(is_country_code("ZZ"));
    assert!(!is_country_code("us"));
    assert!(!is_country_code("U"));
    assert!(!is_country_code("USA"));
    assert!(!is_country_code("U1"));
    assert!(!is_country_code(""));
    assert!(!is_country_code("ÜS"));
  }

  #[test]
  fn test_currency_code_shape() {
    assert!(is_currency_code("USD"));
    assert!(is_currency_code("ZZZ"));
    assert!(!is_currency_code("usd"));
    assert!(!is_currency_code("US"));
    assert!(!is_currency_code("USDT"));
    assert!(!is_currency_code("US1"));
    assert!(!is_currency_code(""));
  }

  #[test]
  fn test_serialized_field_names() {
    let json = serde_json::to_value(US).unwrap();
    assert_eq!(json["CountryIsoCode"], "US");
    assert_eq!(json["Currencies"], serde_json::json!(["USD"]));
    assert_eq!(json["Decimals"], 2);
  }
}
