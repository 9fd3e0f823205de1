//! DTOs for decoding REST Countries JSON responses.
//!
//! The lookup endpoint answers with an array of country documents. Only the
//! name pair and the currency object are decoded; everything else is ignored.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::CurrencyCode;
use crate::domain::ports::{CountryInfo, CountryName, CurrencyDetails};

#[derive(Debug, Deserialize)]
pub(super) struct CountryDto {
    #[serde(default)]
    pub(super) name: CountryNameDto,
    /// Currency code to details, in document order.
    #[serde(default)]
    pub(super) currencies: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct CountryNameDto {
    #[serde(default)]
    pub(super) common: String,
    #[serde(default)]
    pub(super) official: String,
}

#[derive(Debug, Default, Deserialize)]
struct CurrencyDetailsDto {
    name: Option<String>,
    symbol: Option<String>,
}

impl CountryDto {
    pub(super) fn into_domain(self) -> Result<CountryInfo, String> {
        let currencies = self
            .currencies
            .into_iter()
            .map(|(code, details)| {
                let code = CurrencyCode::new(code.as_str())
                    .map_err(|err| format!("currency code {code:?}: {err}"))?;
                let details: CurrencyDetailsDto = serde_json::from_value(details)
                    .map_err(|err| format!("currency {code} details: {err}"))?;
                Ok((
                    code,
                    CurrencyDetails {
                        name: details.name,
                        symbol: details.symbol,
                    },
                ))
            })
            .collect::<Result<Vec<_>, String>>()?;

        Ok(CountryInfo {
            name: CountryName {
                common: self.name.common,
                official: self.name.official,
            },
            currencies,
        })
    }
}
