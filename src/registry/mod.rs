//! Type and closure registry.
//!
//! # Responsibilities
//! - Map every configuration key to its declared value type (`Text` when
//!   the key is not registered)
//! - Map every key to its closure: the keys that must co-exist with it
//! - Coerce raw text into the declared type, or the empty sentinel
//!
//! # Design Decisions
//! - Built once from parallel key/type tables, read-only afterwards; shared
//!   as `Arc<TypeRegistry>` instead of hidden global state
//! - Key lookups ignore case
//! - Closures and types are independent lookups: members of one closure may
//!   have different types
//! - Coercion goes through a dispatch table keyed by [`ValueType`]; a type
//!   with no rule is a fatal misconfiguration, a value that does not parse
//!   is not

pub mod builtin;
pub mod coerce;
pub mod region;
pub mod table;
pub mod value;

pub use coerce::Coercer;
pub use region::Region;
pub use table::{ClosureClass, TypeRegistry, TypeRegistryBuilder};
pub use value::{PropertyValue, RawValue, ValueType};
