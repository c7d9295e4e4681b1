use regex::Regex;
use std::sync::LazyLock;

/// `local-part@domain.tld`. The local part allows ASCII letters, digits and
/// `._%+-`; domain labels are separated by dots and the final label is 2 to
/// 64 letters.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,64}$";

/// `EMAIL_PATTERN`, compiled once. `None` only if the pattern is broken,
/// which `test::email_pattern_compiles` rules out.
static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

/// Check that an email address looks like `user@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(email))
}

/// Can the form be submitted? Both fields must be filled in, and the email has
/// to pass `is_valid_email`.
pub fn is_form_valid(email: &str, password: &str) -> bool {
    !email.is_empty() && !password.is_empty() && is_valid_email(email)
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::{prop_assert, proptest};

    #[test]
    fn email_pattern_compiles() {
        assert!(EMAIL.is_some(), "{EMAIL_PATTERN} should compile");
    }

    #[test]
    fn accepts_simple_address() {
        assert!(is_form_valid("user@example.com", "secret"));
    }

    #[test]
    fn accepts_subdomains_and_symbols() {
        assert!(is_form_valid("first.last+tag%x_y-z@mail.example.co.uk", "x"));
    }

    #[test]
    fn rejects_empty_email() {
        assert!(!is_form_valid("", "x"));
    }

    #[test]
    fn rejects_empty_password() {
        assert!(!is_form_valid("a@b.com", ""));
    }

    #[test]
    fn rejects_missing_tld() {
        assert!(!is_valid_email("user@localhost"));
    }

    #[test]
    fn rejects_single_letter_tld() {
        assert!(!is_valid_email("user@example.c"));
    }

    #[test]
    fn rejects_numeric_tld() {
        assert!(!is_valid_email("user@example.123"));
    }

    #[test]
    fn rejects_overlong_tld() {
        let email = format!("user@example.{}", "a".repeat(65));
        assert!(!is_valid_email(&email));
    }

    #[test]
    fn accepts_longest_tld() {
        let email = format!("user@example.{}", "a".repeat(64));
        assert!(is_valid_email(&email));
    }

    #[test]
    fn rejects_empty_labels() {
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user@.com"));
    }

    #[test]
    fn rejects_whitespace() {
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email(" user@example.com"));
    }

    #[test]
    fn rejects_two_ats() {
        assert!(!is_valid_email("user@name@example.com"));
    }

    proptest! {
        #[test]
        fn without_an_at_is_never_valid(email in "[^@]*", password in ".*") {
            prop_assert!(!is_form_valid(&email, &password));
        }

        #[test]
        fn well_formed_addresses_are_valid(
            local in "[A-Za-z0-9._%+-]{1,24}",
            labels in proptest::collection::vec("[A-Za-z0-9-]{1,16}", 1..4),
            tld in "[A-Za-z]{2,64}",
            password in ".+",
        ) {
            let email = format!("{local}@{}.{tld}", labels.join("."));

            prop_assert!(is_form_valid(&email, &password), "{email} should be valid");
        }
    }
}
