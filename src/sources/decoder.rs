//! Format decoders: source content to raw key/value pairs.

use crate::error::ParseError;
use crate::registry::RawValue;
use crate::sources::json::JsonDecoder;
use crate::sources::location::Format;
use crate::sources::properties_text::PropertiesDecoder;

/// Decodes the full content of one source into `(key, raw value)` pairs, in
/// the order they should be registered.
pub trait Decoder: Send + Sync {
    fn decode(&self, content: &[u8]) -> Result<Vec<(String, RawValue)>, ParseError>;
}

/// Decoder for a source format.
pub fn decoder_for(format: Format) -> &'static dyn Decoder {
    match format {
        Format::Properties => &PropertiesDecoder,
        Format::Json => &JsonDecoder,
    }
}
