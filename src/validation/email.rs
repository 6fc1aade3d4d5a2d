//! E-mail address format check

use regex::Regex;
use std::sync::OnceLock;

/// HTML "valid e-mail address" production
const EMAIL_PATTERN: &str = r#"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"#;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Whether `value` is a syntactically valid e-mail address
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        assert!(is_valid_email("ann@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co.uk"));
    }

    #[test]
    fn test_accepts_dotless_domain() {
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email("root@localhost"));
    }

    #[test]
    fn test_rejects_missing_at() {
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("ann.example.com"));
    }

    #[test]
    fn test_rejects_missing_domain() {
        assert!(!is_valid_email("ann@"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_rejects_malformed_labels() {
        assert!(!is_valid_email("ann@-example.com"));
        assert!(!is_valid_email("ann@example..com"));
        assert!(!is_valid_email("ann@example.com."));
        assert!(!is_valid_email("ann @example.com"));
    }

    #[test]
    fn test_rejects_overlong_label() {
        let label = "a".repeat(64);
        assert!(!is_valid_email(&format!("ann@{label}.com")));
        let label = "a".repeat(63);
        assert!(is_valid_email(&format!("ann@{label}.com")));
    }
}
