//! Printing a property set to an output stream.

use std::io::{self, Write};

use crate::properties::PropertySet;

/// Write every property in key order, one `key, declared-type, value` line
/// each.
pub fn print_properties<W: Write>(set: &PropertySet, out: &mut W) -> io::Result<()> {
    for property in set.render() {
        writeln!(out, "{}", property)?;
    }
    Ok(())
}

/// Write the set as one pretty-printed JSON object, `null` for missing keys.
pub fn print_json<W: Write>(set: &PropertySet, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, set)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::RegistrationEngine;
    use crate::registry::TypeRegistry;

    fn sample() -> PropertySet {
        let engine = RegistrationEngine::new(TypeRegistry::builtin());
        let mut set = PropertySet::new();
        engine.add_property(&mut set, "score.factor", "2.4".into()).unwrap();
        engine.add_property(&mut set, "JDBC_URL", "jdbc:mysql://localhost/test".into()).unwrap();
        set
    }

    #[test]
    fn test_print_lines() {
        let mut out = Vec::new();
        print_properties(&sample(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "JDBC_DRIVER, Text, \n\
             JDBC_PASSWORD, Text, \n\
             JDBC_URL, Text, jdbc:mysql://localhost/test\n\
             JDBC_USERNAME, Text, \n\
             score.factor, Float64, 2.4\n"
        );
    }

    #[test]
    fn test_print_json() {
        let mut out = Vec::new();
        print_json(&sample(), &mut out).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["score.factor"], 2.4);
        assert!(parsed["JDBC_DRIVER"].is_null());
    }
}
