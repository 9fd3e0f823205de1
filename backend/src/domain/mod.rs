//! Domain primitives, services and ports.
//!
//! Purpose: define the member roster model and its business rules free of
//! transport and storage concerns. Adapters live under `inbound` and
//! `outbound` and talk to the domain only through [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - Member, MemberDraft, MemberSnapshot, NewMember: member shapes.
//! - MemberService: the driving-port implementation.
//! - CountryCurrencyResolver: currency lookup over a country info source.

pub mod currency;
pub mod error;
pub mod member;
pub mod member_mapping;
pub mod member_service;
pub mod ports;
pub mod trace_id;

#[cfg(test)]
pub use self::currency::MockCurrencyResolver;
pub use self::currency::{CountryCurrencyResolver, CurrencyResolutionError, CurrencyResolver};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::member::{
    CurrencyCode, EmptyCurrencyCode, MAX_CONTRACT_DURATION, Member, MemberDraft, MemberId,
    MemberKind, MemberSnapshot, MemberValidationError, NewMember, ParseMemberKindError,
};
pub use self::member_service::{MemberService, MemberServiceError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
