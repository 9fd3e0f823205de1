//! Country to currency resolution.
//!
//! [`CountryCurrencyResolver`] asks a [`CountryInfoSource`] for the country's
//! metadata and picks the first listed currency. Lookups are never cached, so
//! a member's currency always reflects the upstream at write time.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::CurrencyCode;
use super::ports::{CountryInfoSource, CountryInfoSourceError};

/// Why a country could not be resolved to a currency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyResolutionError {
    /// No country matched the name.
    #[error("currency not found for country: {country}")]
    CountryNotFound { country: String },
    /// The country matched but lists no currency.
    #[error("currency information not available for country: {country}")]
    CurrencyUnavailable { country: String },
    /// The lookup itself failed.
    #[error("currency lookup for country {country} failed")]
    Upstream {
        country: String,
        #[source]
        source: CountryInfoSourceError,
    },
}

impl CurrencyResolutionError {
    /// Country name the failure relates to.
    #[must_use]
    pub fn country(&self) -> &str {
        match self {
            Self::CountryNotFound { country }
            | Self::CurrencyUnavailable { country }
            | Self::Upstream { country, .. } => country,
        }
    }

    /// Stable machine-readable code for the failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::CountryNotFound { .. } => "country_not_found",
            Self::CurrencyUnavailable { .. } => "currency_unavailable",
            Self::Upstream { .. } => "currency_lookup_failed",
        }
    }
}

/// Resolves a country name to a currency code.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CurrencyResolver: Send + Sync {
    /// Resolve the currency for `country`.
    ///
    /// When a country lists several currencies the first one in upstream
    /// order wins.
    async fn resolve(&self, country: &str) -> Result<CurrencyCode, CurrencyResolutionError>;
}

/// [`CurrencyResolver`] backed by a [`CountryInfoSource`].
pub struct CountryCurrencyResolver<S> {
    source: Arc<S>,
}

impl<S> CountryCurrencyResolver<S> {
    /// Create a resolver over the given source.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

impl<S> Clone for CountryCurrencyResolver<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

#[async_trait]
impl<S> CurrencyResolver for CountryCurrencyResolver<S>
where
    S: CountryInfoSource,
{
    async fn resolve(&self, country: &str) -> Result<CurrencyCode, CurrencyResolutionError> {
        if country.trim().is_empty() {
            return Err(CurrencyResolutionError::CountryNotFound {
                country: country.to_owned(),
            });
        }

        let info = self
            .source
            .country_info(country)
            .await
            .map_err(|source| match source {
                CountryInfoSourceError::NotFound { .. } => {
                    CurrencyResolutionError::CountryNotFound {
                        country: country.to_owned(),
                    }
                }
                other => CurrencyResolutionError::Upstream {
                    country: country.to_owned(),
                    source: other,
                },
            })?;

        let code = info.primary_currency().cloned().ok_or_else(|| {
            CurrencyResolutionError::CurrencyUnavailable {
                country: country.to_owned(),
            }
        })?;
        debug!(country, official = %info.name.official, currency = %code, "resolved currency");
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        CountryInfo, CountryName, CurrencyDetails, FixtureCountryInfoSource,
        MockCountryInfoSource,
    };
    use rstest::rstest;

    fn info(codes: &[&str]) -> CountryInfo {
        CountryInfo {
            name: CountryName {
                common: "Switzerland".to_owned(),
                official: "Swiss Confederation".to_owned(),
            },
            currencies: codes
                .iter()
                .map(|code| {
                    (
                        CurrencyCode::new(*code).expect("valid code"),
                        CurrencyDetails::default(),
                    )
                })
                .collect(),
        }
    }

    fn resolver_returning(
        result: Result<CountryInfo, CountryInfoSourceError>,
    ) -> CountryCurrencyResolver<MockCountryInfoSource> {
        let mut source = MockCountryInfoSource::new();
        source
            .expect_country_info()
            .times(1)
            .return_once(move |_| result);
        CountryCurrencyResolver::new(Arc::new(source))
    }

    #[tokio::test]
    async fn picks_first_listed_currency() {
        let resolver = resolver_returning(Ok(info(&["CHF", "EUR"])));
        let code = resolver.resolve("Switzerland").await.expect("resolves");
        assert_eq!(code.as_str(), "CHF");
    }

    #[tokio::test]
    async fn empty_currency_list_is_unavailable() {
        let resolver = resolver_returning(Ok(info(&[])));
        let error = resolver.resolve("Antarctica").await.expect_err("no currency");
        assert_eq!(
            error,
            CurrencyResolutionError::CurrencyUnavailable {
                country: "Antarctica".to_owned()
            }
        );
    }

    #[tokio::test]
    async fn unknown_country_is_not_found() {
        let resolver = CountryCurrencyResolver::new(Arc::new(FixtureCountryInfoSource));
        let error = resolver.resolve("Unknown").await.expect_err("unknown");
        assert_eq!(error.country(), "Unknown");
        assert_eq!(error.code(), "country_not_found");
    }

    #[rstest]
    #[case::transport(CountryInfoSourceError::transport("reset"))]
    #[case::timeout(CountryInfoSourceError::timeout("slow"))]
    #[case::decode(CountryInfoSourceError::decode("not json"))]
    #[tokio::test]
    async fn source_failures_are_upstream_errors(#[case] failure: CountryInfoSourceError) {
        let resolver = resolver_returning(Err(failure.clone()));
        let error = resolver.resolve("brasil").await.expect_err("upstream");
        assert_eq!(
            error,
            CurrencyResolutionError::Upstream {
                country: "brasil".to_owned(),
                source: failure,
            }
        );
    }

    #[tokio::test]
    async fn blank_country_skips_the_source() {
        let mut source = MockCountryInfoSource::new();
        source.expect_country_info().times(0);
        let resolver = CountryCurrencyResolver::new(Arc::new(source));

        let error = resolver.resolve("  ").await.expect_err("blank");
        assert!(matches!(error, CurrencyResolutionError::CountryNotFound { .. }));
    }
}
