//! Canned REST Countries documents shared by integration suites.

use std::collections::HashMap;

use async_trait::async_trait;
use roster::domain::CurrencyCode;
use roster::domain::ports::{
    CountryInfo, CountryInfoSource, CountryInfoSourceError, CountryName, CurrencyDetails,
};
use serde_json::{Value, json};

/// Raw upstream documents keyed by lower-cased lookup name.
pub fn documents() -> HashMap<&'static str, Value> {
    HashMap::from([
        (
            "brasil",
            json!([{
                "name": {"common": "Brazil", "official": "Federative Republic of Brazil"},
                "currencies": {"BRL": {"name": "Brazilian real", "symbol": "R$"}}
            }]),
        ),
        (
            "uke",
            json!([{
                "name": {
                    "common": "United Kingdom",
                    "official": "United Kingdom of Great Britain and Northern Ireland"
                },
                "currencies": {"GBP": {"name": "British pound", "symbol": "£"}}
            }]),
        ),
        (
            "switzerland",
            json!([{
                "name": {"common": "Switzerland", "official": "Swiss Confederation"},
                "currencies": {
                    "CHF": {"name": "Swiss franc", "symbol": "Fr."},
                    "EUR": {"name": "Euro", "symbol": "€"}
                }
            }]),
        ),
        (
            "antarctica",
            json!([{
                "name": {"common": "Antarctica", "official": "Antarctica"}
            }]),
        ),
    ])
}

fn country(common: &str, official: &str, currencies: &[(&str, &str)]) -> CountryInfo {
    CountryInfo {
        name: CountryName {
            common: common.to_owned(),
            official: official.to_owned(),
        },
        currencies: currencies
            .iter()
            .map(|(code, name)| {
                (
                    CurrencyCode::new(*code).expect("valid currency code"),
                    CurrencyDetails {
                        name: Some((*name).to_owned()),
                        symbol: None,
                    },
                )
            })
            .collect(),
    }
}

/// In-process country source answering from a fixed table.
#[derive(Debug, Clone)]
pub struct StaticCountryInfoSource {
    countries: HashMap<String, CountryInfo>,
}

impl Default for StaticCountryInfoSource {
    fn default() -> Self {
        let countries = HashMap::from([
            (
                "brasil".to_owned(),
                country("Brazil", "Federative Republic of Brazil", &[("BRL", "Brazilian real")]),
            ),
            (
                "uke".to_owned(),
                country("United Kingdom", "United Kingdom", &[("GBP", "British pound")]),
            ),
            (
                "switzerland".to_owned(),
                country(
                    "Switzerland",
                    "Swiss Confederation",
                    &[("CHF", "Swiss franc"), ("EUR", "Euro")],
                ),
            ),
            ("antarctica".to_owned(), country("Antarctica", "Antarctica", &[])),
        ]);
        Self { countries }
    }
}

#[async_trait]
impl CountryInfoSource for StaticCountryInfoSource {
    async fn country_info(&self, name: &str) -> Result<CountryInfo, CountryInfoSourceError> {
        self.countries
            .get(&name.trim().to_lowercase())
            .cloned()
            .ok_or_else(|| CountryInfoSourceError::not_found(name))
    }
}
