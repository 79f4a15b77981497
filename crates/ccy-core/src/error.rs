use thiserror::Error;

/// The main error type for country-currency lookups
#[derive(Error, Debug)]
pub enum Error {
  /// Lookup key with no matching dataset record. Carries the country or
  /// currency code the caller supplied.
  #[error("no country-currency record for code: {0}")]
  NotFound(String),
}

/// Result type alias for country-currency lookups
pub type Result<T> = std::result::Result<T, Error>;
