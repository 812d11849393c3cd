//! Unique test data helpers backed by ULIDs.

use ulid::Ulid;

/// Generate a unique string in the format `{prefix}-{ulid}`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("skill");
/// let b = unique_str("skill");
/// assert_ne!(a, b);
/// assert!(a.starts_with("skill-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique email address in the format `{prefix}-{ulid}@example.test`.
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new())
}
