//! Metrics collection.
//!
//! # Metrics
//! - `typed_props_properties_registered_total` (counter)
//! - `typed_props_coercion_failures_total` (counter): by `value_type`
//! - `typed_props_sources_loaded_total` (counter): by `scheme`, `format`
//! - `typed_props_load_failures_total` (counter)

use ::metrics::counter;

pub fn record_property_registered() {
    counter!("typed_props_properties_registered_total").increment(1);
}

pub fn record_coercion_failure(value_type: &str) {
    counter!("typed_props_coercion_failures_total", "value_type" => value_type.to_string())
        .increment(1);
}

pub fn record_source_loaded(scheme: &'static str, format: &'static str) {
    counter!("typed_props_sources_loaded_total", "scheme" => scheme, "format" => format)
        .increment(1);
}

pub fn record_load_failure() {
    counter!("typed_props_load_failures_total").increment(1);
}
