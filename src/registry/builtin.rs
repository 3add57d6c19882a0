//! Default registry tables.
//!
//! Each row of [`BUILTIN_KEYS`] is one closure; the matching row of
//! [`BUILTIN_TYPES`] declares the type of each key in the same position.

pub const BUILTIN_KEYS: &[&[&str]] = &[
    &["JDBC_DRIVER", "JDBC_URL", "JDBC_USERNAME", "JDBC_PASSWORD"],
    &["hibernate.generate_statistics", "hibernate.show_sql"],
    &["aws_access_key", "aws_secret_key", "aws_account_id", "aws_region_id"],
    &["jpa.showSql"],
    &["JPA_SHOWSQL"],
    &["auth.endpoint.uri"],
    &["job.timeout"],
    &["score.factor"],
    &["sns.broadcast.topic_name"],
];

pub const BUILTIN_TYPES: &[&[&str]] = &[
    &["Text", "Text", "Text", "Text"],
    &["Boolean", "Boolean"],
    &["Text", "Text", "Integer64", "Region"],
    &["Boolean"],
    &["Boolean"],
    &["Text"],
    &["Integer64"],
    &["Float64"],
    &["Text"],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_have_matching_shapes() {
        assert_eq!(BUILTIN_KEYS.len(), BUILTIN_TYPES.len());
        for (keys, types) in BUILTIN_KEYS.iter().zip(BUILTIN_TYPES) {
            assert_eq!(keys.len(), types.len());
        }
    }
}
