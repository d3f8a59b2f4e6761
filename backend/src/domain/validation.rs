//! Field constraint checks shared by the entity drafts.
//!
//! Each draft implements [`Validate`] by listing its violations explicitly;
//! nothing is discovered at runtime. The messages mirror the wording clients
//! already see for the equivalent constraints.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::error::{EntityKind, Error, FieldViolation};

pub(crate) const NOT_BLANK: &str = "must not be blank";
pub(crate) const INVALID_URL: &str = "must be a valid URL";
pub(crate) const INVALID_EMAIL: &str = "must be a well-formed email address";
pub(crate) const INVALID_USERNAME: &str = "must start with a letter and contain only letters, digits, '-' or '_' with no consecutive separators";
pub(crate) const NOT_UNIQUE: &str = "must be unique";
pub(crate) const UNKNOWN_OWNER: &str = "must reference an existing record";

/// Explicit per-entity constraint check.
pub trait Validate {
    /// Every violated constraint, in field order. Never fails.
    fn violations(&self) -> Vec<FieldViolation>;

    /// Succeed when nothing is violated.
    ///
    /// # Errors
    ///
    /// Returns a request-origin [`Error::ValidationFailure`] carrying every
    /// violation.
    fn ensure_valid(&self) -> Result<(), Error> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Error::validation(violations))
        }
    }
}

/// Accumulates violations for one entity kind.
pub(crate) struct Violations {
    kind: EntityKind,
    items: Vec<FieldViolation>,
}

impl Violations {
    pub(crate) const fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
        }
    }

    /// Record a violation together with the value that broke it.
    pub(crate) fn reject(&mut self, field: &str, message: impl Into<String>, value: impl Into<Value>) {
        self.items.push(
            FieldViolation::new(self.kind, field, message).with_rejected_value(value.into()),
        );
    }

    /// Record a violation without echoing the value back, for secrets.
    pub(crate) fn reject_redacted(&mut self, field: &str, message: impl Into<String>) {
        self.items.push(FieldViolation::new(self.kind, field, message));
    }

    pub(crate) fn into_vec(self) -> Vec<FieldViolation> {
        self.items
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub(crate) fn size_between(min: usize, max: usize) -> String {
    format!("size must be between {min} and {max}")
}

pub(crate) fn size_at_least(min: usize) -> String {
    format!("size must be at least {min}")
}

/// Absolute URL with a host, e.g. `https://x.test/a.jpg`.
pub(crate) fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok_and(|parsed| parsed.has_host())
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

pub(crate) fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Username shape: a leading ASCII letter, then letters, digits, `-` or `_`,
/// never two separators in a row.
pub(crate) fn is_valid_username(value: &str) -> bool {
    let mut chars = value.chars();
    if !chars.next().is_some_and(|first| first.is_ascii_alphabetic()) {
        return false;
    }
    let mut previous_separator = false;
    for ch in chars {
        let separator = matches!(ch, '-' | '_');
        if !(separator || ch.is_ascii_alphanumeric()) || (separator && previous_separator) {
            return false;
        }
        previous_separator = separator;
    }
    true
}

/// Minimum account username length in characters.
pub const USERNAME_MIN: usize = 5;
/// Maximum account username length in characters.
pub const USERNAME_MAX: usize = 30;

/// Presence and length of an account username.
pub(crate) fn check_username_length(violations: &mut Violations, username: &str) {
    if is_blank(username) {
        violations.reject("username", NOT_BLANK, username);
    }
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&char_len(username)) {
        violations.reject("username", size_between(USERNAME_MIN, USERNAME_MAX), username);
    }
}

/// Longest email address an account may register.
pub const EMAIL_MAX: usize = 255;

pub(crate) fn check_email(violations: &mut Violations, email: &str) {
    if is_blank(email) {
        violations.reject("email", NOT_BLANK, email);
    } else if !is_valid_email(email) {
        violations.reject("email", INVALID_EMAIL, email);
    }
    if char_len(email) > EMAIL_MAX {
        violations.reject("email", size_between(0, EMAIL_MAX), email);
    }
}

/// Presence and, when `min` is given, length of a password. Never echoes it.
pub(crate) fn check_password(violations: &mut Violations, password: &str, min: Option<usize>) {
    if is_blank(password) {
        violations.reject_redacted("password", NOT_BLANK);
    }
    if let Some(min) = min.filter(|min| char_len(password) < *min) {
        violations.reject_redacted("password", size_at_least(min));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://x.test/a.jpg", true)]
    #[case("http://localhost:8080/p.png", true)]
    #[case("ftp://files.example/raw", true)]
    #[case("not a url", false)]
    #[case("mailto:someone@example.com", false)]
    #[case("/relative/path.jpg", false)]
    fn url_requires_absolute_with_host(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_url(value), expected);
    }

    #[rstest]
    #[case("ada@example.com", true)]
    #[case("first.last+tag@mail.example.org", true)]
    #[case("ada@localhost", true)]
    #[case("ada", false)]
    #[case("ada@", false)]
    #[case("@example.com", false)]
    #[case("ada@@example.com", false)]
    #[case("ada lovelace@example.com", false)]
    fn email_shape(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(value), expected);
    }

    #[rstest]
    #[case("snapper", true)]
    #[case("snap-per_01", true)]
    #[case("a-b_c-d", true)]
    #[case("1snapper", false)]
    #[case("_snapper", false)]
    #[case("snap--per", false)]
    #[case("snap-_per", false)]
    #[case("snap per", false)]
    #[case("snäpper", false)]
    #[case("", false)]
    fn username_shape(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_username(value), expected);
    }

    #[rstest]
    #[case("", true)]
    #[case("   \t", true)]
    #[case(" x ", false)]
    fn blank_detection(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_blank(value), expected);
    }

    #[test]
    fn char_len_counts_scalar_values() {
        assert_eq!(char_len("héllo"), 5);
    }

    #[rstest]
    #[case(EMAIL_MAX, 0)]
    #[case(EMAIL_MAX + 1, 1)]
    fn email_length_is_capped(#[case] length: usize, #[case] expected: usize) {
        let domain = "@example.com";
        let email = format!("{}{domain}", "a".repeat(length - domain.len()));
        let mut violations = Violations::new(EntityKind::Snapper);

        check_email(&mut violations, &email);

        let items = violations.into_vec();
        assert_eq!(items.len(), expected);
        assert!(
            items
                .iter()
                .all(|violation| violation.message() == "size must be between 0 and 255")
        );
    }

    #[test]
    fn redacted_violation_has_no_rejected_value() {
        let mut violations = Violations::new(EntityKind::User);
        violations.reject_redacted("password", NOT_BLANK);
        violations.reject("email", INVALID_EMAIL, "nope");

        let items = violations.into_vec();
        assert_eq!(items.len(), 2);
        assert!(items.first().is_some_and(|v| v.rejected_value().is_none()));
        assert!(items.get(1).is_some_and(|v| v.rejected_value().is_some()));
    }
}
