//! Wiring of the member service onto its adapters.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use roster::domain::ports::{CountryInfoSource, MemberRepository};
use roster::domain::{CountryCurrencyResolver, MemberService};
use roster::inbound::http::state::HttpState;
use roster::outbound::country_info::CountryInfoHttpSource;
use roster::outbound::persistence::{DieselMemberRepository, InMemoryMemberRepository};

use super::ServerConfig;

fn member_state<R, S>(repository: Arc<R>, source: Arc<S>) -> HttpState
where
    R: MemberRepository + 'static,
    S: CountryInfoSource + 'static,
{
    let resolver = Arc::new(CountryCurrencyResolver::new(source));
    HttpState::from_service(Arc::new(MemberService::new(repository, resolver)))
}

/// Build handler state from the configured adapters.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the country lookup client cannot be built.
pub(crate) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let source = CountryInfoHttpSource::new(config.country_info.clone()).map_err(|err| {
        std::io::Error::other(format!("country lookup client construction failed: {err}"))
    })?;
    let source = Arc::new(source);
    info!(base_url = %config.country_info.base_url, "country lookup configured");

    let state = match &config.db_pool {
        Some(pool) => member_state(Arc::new(DieselMemberRepository::new(pool.clone())), source),
        None => {
            warn!("no database configured; members are kept in memory and lost on restart");
            member_state(Arc::new(InMemoryMemberRepository::new()), source)
        }
    };
    Ok(web::Data::new(state))
}
