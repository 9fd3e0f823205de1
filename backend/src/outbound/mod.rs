//! Driven adapters: the country lookup upstream and the member store.

pub mod country_info;
pub mod persistence;
