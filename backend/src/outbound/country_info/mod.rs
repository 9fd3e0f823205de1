//! Country metadata adapters backed by the REST Countries API.

mod dto;
mod http_source;

pub use http_source::{CountryInfoHttpSource, CountryInfoSettings, default_headers};
