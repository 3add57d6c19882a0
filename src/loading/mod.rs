//! Registration and load orchestration.
//!
//! # Data Flow
//! ```text
//! [source, source, ...]            (ordered; later overrides earlier)
//!     → transport (byte stream)
//!     → decoder ((key, raw value) pairs)
//!     → RegistrationEngine::add_property
//!         1. resolve value against the declared type
//!         2. first sight of a key: make its closure known (empty)
//!         3. upsert the key with the resolved value
//!     → PropertySet
//! ```
//!
//! # Design Decisions
//! - Registration needs `&mut PropertySet`, so closure expansion and upsert
//!   of one call can never interleave with another call on the same set
//! - No partial success: the first transport, decode or registration error
//!   aborts the load and the set is dropped
//! - No retries; callers wrap the whole `load` if they want them

pub mod engine;
pub mod loader;

pub use engine::RegistrationEngine;
pub use loader::PropertiesLoader;
