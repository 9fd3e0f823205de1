//! Driven port for fetching country metadata.
//!
//! The domain owns the [`CountryInfo`] shape so the currency resolver stays
//! independent of whichever upstream answers the lookup.

use async_trait::async_trait;

use crate::domain::CurrencyCode;

use super::define_port_error;

/// Common and official names of a country.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountryName {
    pub common: String,
    pub official: String,
}

/// Descriptive metadata for one currency.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CurrencyDetails {
    pub name: Option<String>,
    pub symbol: Option<String>,
}

/// Country metadata relevant to currency resolution.
///
/// `currencies` keeps upstream document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountryInfo {
    pub name: CountryName,
    pub currencies: Vec<(CurrencyCode, CurrencyDetails)>,
}

impl CountryInfo {
    /// First listed currency, if any.
    #[must_use]
    pub fn primary_currency(&self) -> Option<&CurrencyCode> {
        self.currencies.first().map(|(code, _)| code)
    }
}

define_port_error! {
    /// Errors surfaced while looking up country metadata.
    pub enum CountryInfoSourceError {
        /// No country matched the supplied name.
        NotFound { country: String } =>
            "no information found for country: {country}",
        /// The request was rejected before reaching the upstream.
        InvalidRequest { message: String } =>
            "country lookup rejected: {message}",
        /// Network transport failed before receiving a response.
        Transport { message: String } =>
            "country lookup transport failed: {message}",
        /// The upstream did not answer in time.
        Timeout { message: String } =>
            "country lookup timed out: {message}",
        /// The upstream rate-limited the request.
        RateLimited { message: String } =>
            "country lookup rate limited: {message}",
        /// The upstream response could not be decoded.
        Decode { message: String } =>
            "country lookup returned an invalid payload: {message}",
    }
}

/// Port for resolving a country name to its metadata.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryInfoSource: Send + Sync {
    /// Look up a country by name.
    ///
    /// Returns [`CountryInfoSourceError::NotFound`] when nothing matches.
    async fn country_info(&self, country: &str) -> Result<CountryInfo, CountryInfoSourceError>;
}

/// Fixture source that recognises no countries.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCountryInfoSource;

#[async_trait]
impl CountryInfoSource for FixtureCountryInfoSource {
    async fn country_info(&self, country: &str) -> Result<CountryInfo, CountryInfoSourceError> {
        Err(CountryInfoSourceError::not_found(country))
    }
}
