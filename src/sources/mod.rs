//! Source plumbing: locations, transports and format decoders.
//!
//! # Data Flow
//! ```text
//! location string
//!     → location.rs (scheme by prefix, format by suffix)
//!     → transport.rs (file / http / resource byte stream)
//!     → decoder.rs (properties text or JSON → raw key/value pairs)
//! ```
//!
//! # Design Decisions
//! - Transports and decoders are replaceable adapters behind traits; they
//!   share no state with the registry
//! - An unrecognized scheme or suffix fails before any source is read

pub mod decoder;
pub mod json;
pub mod location;
pub mod properties_text;
pub mod transport;

pub use decoder::{decoder_for, Decoder};
pub use location::{Format, Scheme, SourceLocation};
pub use transport::{
    ByteStream, FileTransport, HttpTransport, ResourceTransport, SchemeTransport, Transport,
};
