//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for external callers
//! - Driven Ports (outbound) - Membership storage the service depends on

pub mod inbound;
pub mod outbound;

pub use inbound::UniquenessApi;
pub use outbound::MembershipFilter;
