//! `barkeep-auth`
//!
//! **Responsibility:** who is saving, and what that means for review status.
//!
//! Authentication itself is the host's concern; this crate only models the
//! acting principal handed to the managers.

pub mod principal;
pub mod roles;

pub use principal::Principal;
pub use roles::Role;
