//! String validation rules for the text field.
//!
//! These are the predicates the field consults when editing ends on an
//! [`Email`](crate::textfield::FieldKind::Email) or
//! [`Password`](crate::textfield::FieldKind::Password) field. They are also
//! exported on their own so hosts can validate form values without a widget,
//! and so a failed password can be reported rule by rule.
//!
//! All functions are pure and total: no allocation beyond the compiled
//! pattern, no panics, no normalization. An empty string is neither a valid
//! email nor a valid password.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_textfield::validate::{is_valid_email, is_valid_password};
//!
//! assert!(is_valid_email("a.b@example.com"));
//! assert!(!is_valid_email("a@b"));
//!
//! assert!(is_valid_password("Abc12345!"));
//! assert!(!is_valid_password("abc12345")); // no uppercase, no special char
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

// Anchored to the whole string: `is_match` alone would accept any string
// that merely contains an address.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,4}$").expect("email pattern")
});

/// Special characters accepted by [`has_special_character`].
pub const PASSWORD_SPECIAL_CHARACTERS: &str = "-_!/@#$%^&*(),.?\":{}";

/// Reports whether `s` is a syntactically valid email address.
///
/// The whole string must match
/// `[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,4}` — a substring match is
/// not enough. Matching is character-literal; no trimming or case folding is
/// applied.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Reports whether `s` satisfies all five password rules at once.
///
/// The rules are exposed individually so a caller can tell the user which
/// one failed:
/// [`is_valid_password_length`], [`has_lowercase_character`],
/// [`has_uppercase_character`], [`has_special_character`] and
/// [`has_numeric_character`].
pub fn is_valid_password(s: &str) -> bool {
    is_valid_password_length(s)
        && has_lowercase_character(s)
        && has_uppercase_character(s)
        && has_special_character(s)
        && has_numeric_character(s)
}

/// Password rule: between 8 and 40 characters inclusive.
pub fn is_valid_password_length(s: &str) -> bool {
    let count = s.chars().count();
    (8..=40).contains(&count)
}

/// Password rule: at least one lowercase ASCII letter.
pub fn has_lowercase_character(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_lowercase())
}

/// Password rule: at least one uppercase ASCII letter.
pub fn has_uppercase_character(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_uppercase())
}

/// Password rule: at least one character from
/// [`PASSWORD_SPECIAL_CHARACTERS`].
pub fn has_special_character(s: &str) -> bool {
    s.chars().any(|c| PASSWORD_SPECIAL_CHARACTERS.contains(c))
}

/// Password rule: at least one ASCII digit.
pub fn has_numeric_character(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a.b@example.com"));
        assert!(is_valid_email("USER_99+tag@mail-host.org"));
        assert!(is_valid_email("x@y.co"));
        assert!(is_valid_email("first.last@sub.domain.info"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b")); // no domain suffix
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("a@b.x")); // suffix shorter than 2
        assert!(!is_valid_email("a@b.abcde")); // suffix longer than 4
        assert!(!is_valid_email("a b@example.com")); // space not in class
    }

    #[test]
    fn test_email_match_is_anchored() {
        // Contains a valid address but is not one.
        assert!(!is_valid_email("see a.b@example.com for details"));
        assert!(!is_valid_email("a.b@example.com,c.d@example.com"));
    }

    #[test]
    fn test_valid_passwords() {
        assert!(is_valid_password("Abc12345!"));
        assert!(is_valid_password("S0mething-Else"));
        assert!(is_valid_password("{Quoted\"1}aaaa"));
    }

    #[test]
    fn test_password_rules_are_independent() {
        // Each candidate holds length in [8, 40] and drops exactly one rule.
        let no_lower = "ABC12345!";
        let no_upper = "abc12345!";
        let no_special = "Abc123456";
        let no_digit = "Abcdefgh!";
        assert!(!has_lowercase_character(no_lower));
        assert!(!is_valid_password(no_lower));
        assert!(!has_uppercase_character(no_upper));
        assert!(!is_valid_password(no_upper));
        assert!(!has_special_character(no_special));
        assert!(!is_valid_password(no_special));
        assert!(!has_numeric_character(no_digit));
        assert!(!is_valid_password(no_digit));
    }

    #[test]
    fn test_password_length_bounds() {
        assert!(!is_valid_password_length("Ab1!xyz")); // 7
        assert!(is_valid_password_length("Ab1!xyzw")); // 8
        let forty: String = "Ab1!".repeat(10);
        assert!(is_valid_password_length(&forty));
        let forty_one = format!("{forty}x");
        assert!(!is_valid_password_length(&forty_one));
        assert!(!is_valid_password(&forty_one));
    }

    #[test]
    fn test_empty_string_fails_both() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_password(""));
    }

    #[test]
    fn test_no_normalization() {
        // Leading/trailing whitespace is not trimmed away.
        assert!(!is_valid_email(" a.b@example.com"));
        assert!(!is_valid_email("a.b@example.com "));
    }
}
