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

//! The country-currency dataset.
//!
//! One record per ISO 3166-1 alpha-2 code, sorted by country code. The
//! currency list is ordered with the primary (legal-tender) unit first;
//! ISO 4217 funds codes and secondary tender follow it. `decimals` is the
//! minor-unit count of the primary currency. Entities with no universal
//! currency (AQ, GS) are not listed.

use crate::types::CountryCurrencyInfo;

/// All country-currency records, sorted by ISO 3166-1 alpha-2 code.
#[rustfmt::skip]
pub static COUNTRY_CURRENCIES: &[CountryCurrencyInfo] = &[
  CountryCurrencyInfo { country_iso_code: "AD", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "AE", currencies: &["AED"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "AF", currencies: &["AFN"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "AG", currencies: &["XCD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "AI", currencies: &["XCD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "AL", currencies: &["ALL"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "AM", currencies: &["AMD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "AO", currencies: &["AOA"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "AR", currencies: &["ARS"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "AS", currencies: &["USD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "AT", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "AU", currencies: &["AUD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "AW", currencies: &["AWG"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "AX", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "AZ", currencies: &["AZN"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "BA", currencies: &["BAM"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "BB", currencies: &["BBD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "BD", currencies: &["BDT"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "BE", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "BF", currencies: &["XOF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "BG", currencies: &["BGN"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "BH", currencies: &["BHD"], decimals: 3 },
  CountryCurrencyInfo { country_iso_code: "BI", currencies: &["BIF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "BJ", currencies: &["XOF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "BL", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "BM", currencies: &["BMD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "BN", currencies: &["BND"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "BO", currencies: &["BOB", "BOV"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "BQ", currencies: &["USD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "BR", currencies: &["BRL"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "BS", currencies: &["BSD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "BT", currencies: &["BTN", "INR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "BV", currencies: &["NOK"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "BW", currencies: &["BWP"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "BY", currencies: &["BYN"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "BZ", currencies: &["BZD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "CA", currencies: &["CAD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "CC", currencies: &["AUD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "CD", currencies: &["CDF"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "CF", currencies: &["XAF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "CG", currencies: &["XAF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "CH", currencies: &["CHF", "CHE", "CHW"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "CI", currencies: &["XOF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "CK", currencies: &["NZD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "CL", currencies: &["CLP", "CLF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "CM", currencies: &["XAF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "CN", currencies: &["CNY"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "CO", currencies: &["COP", "COU"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "CR", currencies: &["CRC"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "CU", currencies: &["CUP"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "CV", currencies: &["CVE"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "CW", currencies: &["XCG"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "CX", currencies: &["AUD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "CY", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "CZ", currencies: &["CZK"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "DE", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "DJ", currencies: &["DJF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "DK", currencies: &["DKK"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "DM", currencies: &["XCD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "DO", currencies: &["DOP"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "DZ", currencies: &["DZD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "EC", currencies: &["USD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "EE", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "EG", currencies: &["EGP"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "EH", currencies: &["MAD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "ER", currencies: &["ERN"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "ES", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "ET", currencies: &["ETB"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "FI", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "FJ", currencies: &["FJD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "FK", currencies: &["FKP"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "FM", currencies: &["USD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "FO", currencies: &["DKK"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "FR", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "GA", currencies: &["XAF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "GB", currencies: &["GBP"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "GD", currencies: &["XCD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "GE", currencies: &["GEL"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "GF", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "GG", currencies: &["GBP"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "GH", currencies: &["GHS"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "GI", currencies: &["GIP"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "GL", currencies: &["DKK"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "GM", currencies: &["GMD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "GN", currencies: &["GNF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "GP", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "GQ", currencies: &["XAF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "GR", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "GT", currencies: &["GTQ"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "GU", currencies: &["USD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "GW", currencies: &["XOF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "GY", currencies: &["GYD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "HK", currencies: &["HKD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "HM", currencies: &["AUD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "HN", currencies: &["HNL"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "HR", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "HT", currencies: &["HTG", "USD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "HU", currencies: &["HUF"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "ID", currencies: &["IDR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "IE", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "IL", currencies: &["ILS"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "IM", currencies: &["GBP"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "IN", currencies: &["INR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "IO", currencies: &["USD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "IQ", currencies: &["IQD"], decimals: 3 },
  CountryCurrencyInfo { country_iso_code: "IR", currencies: &["IRR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "IS", currencies: &["ISK"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "IT", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "JE", currencies: &["GBP"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "JM", currencies: &["JMD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "JO", currencies: &["JOD"], decimals: 3 },
  CountryCurrencyInfo { country_iso_code: "JP", currencies: &["JPY"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "KE", currencies: &["KES"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "KG", currencies: &["KGS"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "KH", currencies: &["KHR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "KI", currencies: &["AUD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "KM", currencies: &["KMF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "KN", currencies: &["XCD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "KP", currencies: &["KPW"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "KR", currencies: &["KRW"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "KW", currencies: &["KWD"], decimals: 3 },
  CountryCurrencyInfo { country_iso_code: "KY", currencies: &["KYD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "KZ", currencies: &["KZT"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "LA", currencies: &["LAK"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "LB", currencies: &["LBP"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "LC", currencies: &["XCD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "LI", currencies: &["CHF"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "LK", currencies: &["LKR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "LR", currencies: &["LRD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "LS", currencies: &["LSL", "ZAR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "LT", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "LU", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "LV", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "LY", currencies: &["LYD"], decimals: 3 },
  CountryCurrencyInfo { country_iso_code: "MA", currencies: &["MAD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "MC", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "MD", currencies: &["MDL"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "ME", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "MF", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "MG", currencies: &["MGA"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "MH", currencies: &["USD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "MK", currencies: &["MKD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "ML", currencies: &["XOF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "MM", currencies: &["MMK"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "MN", currencies: &["MNT"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "MO", currencies: &["MOP"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "MP", currencies: &["USD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "MQ", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "MR", currencies: &["MRU"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "MS", currencies: &["XCD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "MT", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "MU", currencies: &["MUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "MV", currencies: &["MVR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "MW", currencies: &["MWK"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "MX", currencies: &["MXN", "MXV"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "MY", currencies: &["MYR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "MZ", currencies: &["MZN"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "NA", currencies: &["NAD", "ZAR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "NC", currencies: &["XPF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "NE", currencies: &["XOF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "NF", currencies: &["AUD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "NG", currencies: &["NGN"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "NI", currencies: &["NIO"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "NL", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "NO", currencies: &["NOK"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "NP", currencies: &["NPR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "NR", currencies: &["AUD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "NU", currencies: &["NZD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "NZ", currencies: &["NZD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "OM", currencies: &["OMR"], decimals: 3 },
  CountryCurrencyInfo { country_iso_code: "PA", currencies: &["PAB", "USD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "PE", currencies: &["PEN"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "PF", currencies: &["XPF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "PG", currencies: &["PGK"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "PH", currencies: &["PHP"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "PK", currencies: &["PKR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "PL", currencies: &["PLN"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "PM", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "PN", currencies: &["NZD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "PR", currencies: &["USD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "PS", currencies: &["ILS"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "PT", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "PW", currencies: &["USD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "PY", currencies: &["PYG"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "QA", currencies: &["QAR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "RE", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "RO", currencies: &["RON"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "RS", currencies: &["RSD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "RU", currencies: &["RUB"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "RW", currencies: &["RWF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "SA", currencies: &["SAR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "SB", currencies: &["SBD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "SC", currencies: &["SCR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "SD", currencies: &["SDG"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "SE", currencies: &["SEK"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "SG", currencies: &["SGD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "SH", currencies: &["SHP"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "SI", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "SJ", currencies: &["NOK"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "SK", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "SL", currencies: &["SLE"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "SM", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "SN", currencies: &["XOF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "SO", currencies: &["SOS"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "SR", currencies: &["SRD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "SS", currencies: &["SSP"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "ST", currencies: &["STN"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "SV", currencies: &["USD", "SVC"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "SX", currencies: &["XCG"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "SY", currencies: &["SYP"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "SZ", currencies: &["SZL"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "TC", currencies: &["USD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "TD", currencies: &["XAF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "TF", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "TG", currencies: &["XOF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "TH", currencies: &["THB"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "TJ", currencies: &["TJS"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "TK", currencies: &["NZD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "TL", currencies: &["USD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "TM", currencies: &["TMT"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "TN", currencies: &["TND"], decimals: 3 },
  CountryCurrencyInfo { country_iso_code: "TO", currencies: &["TOP"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "TR", currencies: &["TRY"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "TT", currencies: &["TTD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "TV", currencies: &["AUD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "TW", currencies: &["TWD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "TZ", currencies: &["TZS"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "UA", currencies: &["UAH"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "UG", currencies: &["UGX"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "UM", currencies: &["USD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "US", currencies: &["USD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "UY", currencies: &["UYU", "UYI", "UYW"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "UZ", currencies: &["UZS"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "VA", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "VC", currencies: &["XCD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "VE", currencies: &["VES", "VED"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "VG", currencies: &["USD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "VI", currencies: &["USD"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "VN", currencies: &["VND"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "VU", currencies: &["VUV"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "WF", currencies: &["XPF"], decimals: 0 },
  CountryCurrencyInfo { country_iso_code: "WS", currencies: &["WST"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "YE", currencies: &["YER"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "YT", currencies: &["EUR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "ZA", currencies: &["ZAR"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "ZM", currencies: &["ZMW"], decimals: 2 },
  CountryCurrencyInfo { country_iso_code: "ZW", currencies: &["ZWG"], decimals: 2 },
];

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{is_country_code, is_currency_code};
  use std::collections::HashSet;

  #[test]
  fn test_country_codes_unique_and_sorted() {
    let mut seen = HashSet::new();
    for info in COUNTRY_CURRENCIES {
      assert!(seen.insert(info.country_iso_code), "duplicate country code {}", info.country_iso_code);
    }
    for pair in COUNTRY_CURRENCIES.windows(2) {
      assert!(
        pair[0].country_iso_code < pair[1].country_iso_code,
        "{} listed after {}",
        pair[1].country_iso_code,
        pair[0].country_iso_code
      );
    }
  }

  #[test]
  fn test_codes_well_formed() {
    for info in COUNTRY_CURRENCIES {
      assert!(is_country_code(info.country_iso_code), "bad country code {}", info.country_iso_code);
      assert!(!info.currencies.is_empty(), "{} has no currencies", info.country_iso_code);
      for currency in info.currencies {
        assert!(is_currency_code(currency), "{} has bad currency code {currency}", info.country_iso_code);
      }
    }
  }

  #[test]
  fn test_no_duplicate_currencies_within_record() {
    for info in COUNTRY_CURRENCIES {
      let unique: HashSet<_> = info.currencies.iter().collect();
      assert_eq!(
        unique.len(),
        info.currencies.len(),
        "{} lists a currency twice",
        info.country_iso_code
      );
    }
  }

  #[test]
  fn test_dataset_coverage() {
    assert!(COUNTRY_CURRENCIES.len() > 240, "dataset has {} records", COUNTRY_CURRENCIES.len());
    assert_eq!(COUNTRY_CURRENCIES[0].country_iso_code, "AD");
    assert_eq!(COUNTRY_CURRENCIES[COUNTRY_CURRENCIES.len() - 1].country_iso_code, "ZW");
  }

  #[test]
  fn test_known_minor_units() {
    // Spot checks against ISO 4217 minor-unit exponents
    let decimals = |code: &str| {
      COUNTRY_CURRENCIES.iter().find(|info| info.country_iso_code == code).unwrap().decimals
    };
    assert_eq!(decimals("US"), 2);
    assert_eq!(decimals("JP"), 0);
    assert_eq!(decimals("IS"), 0);
    assert_eq!(decimals("CL"), 0);
    assert_eq!(decimals("BH"), 3);
    assert_eq!(decimals("TN"), 3);
    assert_eq!(decimals("SN"), 0);
  }
}
