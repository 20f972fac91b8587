//! Domain models with validation at construction
//!
//! Form input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod action;
pub mod incident;
pub mod role;
pub mod staff;
pub mod student;
pub mod validation;

pub use action::NewAction;
pub use incident::{parse_committee_member_id, NewIncident};
pub use role::Role;
pub use staff::NewStaffMember;
pub use student::NewStudent;
pub use validation::ValidationError;
