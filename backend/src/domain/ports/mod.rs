//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod country_info_source;
mod member_repository;
mod members_command;
mod members_query;

#[cfg(test)]
pub use country_info_source::MockCountryInfoSource;
pub use country_info_source::{
    CountryInfo, CountryInfoSource, CountryInfoSourceError, CountryName, CurrencyDetails,
    FixtureCountryInfoSource,
};
#[cfg(test)]
pub use member_repository::MockMemberRepository;
pub use member_repository::{MemberRepository, MemberRepositoryError};
#[cfg(test)]
pub use members_command::MockMembersCommand;
pub use members_command::MembersCommand;
#[cfg(test)]
pub use members_query::MockMembersQuery;
pub use members_query::MembersQuery;
