use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\-\s]{7,15}$").expect("valid phone regex"));

/// The `type` of a form control as rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Email,
    Tel,
    Select,
    Textarea,
}

impl InputType {
    pub fn as_html(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Select => "select",
            Self::Textarea => "textarea",
        }
    }
}

/// Which rule a field is checked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Email,
    Phone,
    NonEmpty,
}

impl Rule {
    /// Email-typed controls take precedence over the `phone` name.
    pub fn for_field(input_type: InputType, name: &str) -> Self {
        if input_type == InputType::Email {
            Self::Email
        } else if name == "phone" {
            Self::Phone
        } else {
            Self::NonEmpty
        }
    }

    pub fn check(self, value: &str) -> FieldFlag {
        let value = value.trim();
        let ok = match self {
            Self::Email => is_valid_email(value),
            Self::Phone => is_valid_phone(value),
            Self::NonEmpty => !value.is_empty(),
        };
        FieldFlag::from(ok)
    }
}

/// Visual state of a validated control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldFlag {
    Valid,
    Invalid,
}

impl FieldFlag {
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Valid => "input--valid",
            Self::Invalid => "input--invalid",
        }
    }
}

impl From<bool> for FieldFlag {
    fn from(ok: bool) -> Self {
        if ok {
            Self::Valid
        } else {
            Self::Invalid
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(!is_valid_email("foo"));
        assert!(!is_valid_email("foo@bar"));
        assert!(!is_valid_email("fo o@bar.com"));
        assert!(!is_valid_email("foo@@bar.com"));
        assert!(is_valid_email("foo@bar.com"));
        assert!(is_valid_email("a.b@c.d.e"));
    }

    #[test]
    fn phone_shape() {
        assert!(!is_valid_phone("123"));
        assert!(!is_valid_phone("555-CALL-NOW"));
        assert!(!is_valid_phone("++15551234567"));
        assert!(is_valid_phone("+1 555-123-4567"));
        assert!(is_valid_phone("5551234"));
        // 16 characters after the plus is one too many
        assert!(!is_valid_phone("+1234567890123456"));
    }

    #[test]
    fn rule_selection_prefers_email_type() {
        assert_eq!(Rule::for_field(InputType::Email, "phone"), Rule::Email);
        assert_eq!(Rule::for_field(InputType::Tel, "phone"), Rule::Phone);
        assert_eq!(Rule::for_field(InputType::Text, "phone"), Rule::Phone);
        assert_eq!(Rule::for_field(InputType::Tel, "mobile"), Rule::NonEmpty);
    }

    #[test]
    fn values_are_trimmed_before_checking() {
        assert_eq!(Rule::NonEmpty.check("   "), FieldFlag::Invalid);
        assert_eq!(Rule::NonEmpty.check(" Ada "), FieldFlag::Valid);
        assert_eq!(Rule::Email.check("  foo@bar.com\n"), FieldFlag::Valid);
    }
}
