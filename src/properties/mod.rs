//! Property model.
//!
//! # Responsibilities
//! - Case-insensitive, case-preserving keys ([`PropertyKey`])
//! - Immutable resolved pairs ([`Property`])
//! - The ordered, queryable result of a load ([`PropertySet`])
//!
//! # Design Decisions
//! - Ordered by the uppercased key; display keeps the original spelling
//! - Absent and empty are different: a key can be known yet empty
//! - Only the registration engine grows a set; callers can read, clear or
//!   drop it

pub mod key;
pub mod property;
pub mod set;

pub use key::PropertyKey;
pub use property::Property;
pub use set::PropertySet;
