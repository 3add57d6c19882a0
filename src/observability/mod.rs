//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! registry, engine and loader produce:
//!     → logging.rs (structured log events, stderr)
//!     → metrics.rs (counters through the `metrics` facade)
//! ```
//!
//! # Design Decisions
//! - Every load runs in a `load` span carrying a generated `load_id`
//! - Coercion mismatches are warnings plus a counter, never errors
//! - No metrics exporter is installed here; the embedding application
//!   chooses a recorder

pub mod logging;
pub mod metrics;
