use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Regex patterns used for redacting personal data and credentials from logs.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// Standard email addresses
    pub fn email() -> &'static Regex {
        static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
        });
        &EMAIL_REGEX
    }

    /// Compact JWS: three base64url segments, header starting with `{"`
    pub fn jwt() -> &'static Regex {
        static JWT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\beyJ[A-Za-z0-9_-]*\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]*").unwrap()
        });
        &JWT_REGEX
    }

    /// Long opaque runs (secrets, hashes), 32 chars or more
    pub fn opaque_token() -> &'static Regex {
        static OPAQUE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9+/_-]{32,}={0,2}").unwrap()
        });
        &OPAQUE_REGEX
    }
}

/// Mask emails and credentials in a string before it is logged.
///
/// Emails keep the first character of the local part and the full domain.
/// JWTs and other long opaque runs become `[REDACTED_TOKEN]`.
pub fn redact(input: &str) -> String {
    let without_jwt = PiiRegexRegistry::jwt().replace_all(input, "[REDACTED_TOKEN]");

    let without_email =
        PiiRegexRegistry::email().replace_all(&without_jwt, |caps: &regex::Captures| {
            let full_match = &caps[0];
            match full_match.find('@') {
                Some(0) | None => full_match.to_string(),
                Some(at_pos) => {
                    let first_char = &full_match[..1];
                    format!("{first_char}***{}", &full_match[at_pos..])
                }
            }
        });

    PiiRegexRegistry::opaque_token()
        .replace_all(&without_email, "[REDACTED_TOKEN]")
        .to_string()
}

/// Redacts its contents when formatted.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}
