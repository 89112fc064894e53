//! Login request validation.
//!
//! Rules live in a table of (field, rule) pairs and are all evaluated, so a
//! response lists every violation rather than only the first. Messages are
//! rendered in the request's locale with the localized field name as `{0}`.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::sync::OnceLock;

use crate::auth::LoginRequest;
use crate::i18n::{Locale, Localize, MessageKey};

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 32;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static ALPHANUMERIC_REGEX: OnceLock<Regex> = OnceLock::new();

/// Exactly one `@`, with something on both sides. Any script is allowed.
fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^@\r\n]+@[^@\r\n]+$").unwrap())
}

fn alphanumeric_regex() -> &'static Regex {
    ALPHANUMERIC_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z0-9]*$").unwrap())
}

/// A validated field of [`LoginRequest`]. Serializes as its JSON name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    /// Key of the localized display name.
    pub fn display_key(&self) -> MessageKey {
        match self {
            Field::Email => MessageKey::FieldEmail,
            Field::Password => MessageKey::FieldPassword,
        }
    }

    fn value<'a>(&self, request: &'a LoginRequest) -> &'a str {
        match self {
            Field::Email => &request.email,
            Field::Password => &request.password,
        }
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The kind of a violated rule. Serializes as its error message key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Required,
    EmailFormat,
    LengthRange,
    PatternMatch,
}

impl RuleKind {
    pub fn message_key(&self) -> MessageKey {
        match self {
            RuleKind::Required => MessageKey::ErrorRequired,
            RuleKind::EmailFormat => MessageKey::ErrorEmail,
            RuleKind::LengthRange => MessageKey::ErrorStringLength,
            RuleKind::PatternMatch => MessageKey::ErrorRegularExpression,
        }
    }
}

impl Serialize for RuleKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message_key().as_str())
    }
}

/// A single check applied to a field value.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Value must not be blank
    Required,
    /// Value must look like an email address
    Email,
    /// Character count must be within `[min, max]`
    Length { min: usize, max: usize },
    /// Value must match the regex
    Pattern(fn() -> &'static Regex),
}

impl Rule {
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::Required => RuleKind::Required,
            Rule::Email => RuleKind::EmailFormat,
            Rule::Length { .. } => RuleKind::LengthRange,
            Rule::Pattern(_) => RuleKind::PatternMatch,
        }
    }

    fn is_satisfied(&self, value: &str) -> bool {
        match self {
            Rule::Required => !value.trim().is_empty(),
            Rule::Email => email_regex().is_match(value),
            Rule::Length { min, max } => (*min..=*max).contains(&value.chars().count()),
            Rule::Pattern(regex) => regex().is_match(value),
        }
    }

    /// Extra template arguments after the field name.
    fn extra_args(&self) -> Vec<String> {
        match self {
            Rule::Length { min, max } => vec![min.to_string(), max.to_string()],
            _ => Vec::new(),
        }
    }
}

/// Rules for a login request, in reporting order.
pub const LOGIN_RULES: &[(Field, Rule)] = &[
    (Field::Email, Rule::Required),
    (Field::Email, Rule::Email),
    (Field::Password, Rule::Required),
    (
        Field::Password,
        Rule::Length {
            min: PASSWORD_MIN_LENGTH,
            max: PASSWORD_MAX_LENGTH,
        },
    ),
    (Field::Password, Rule::Pattern(alphanumeric_regex)),
];

/// One violated rule with its localized message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub rule: RuleKind,
    pub message: String,
}

/// Validate `request`, rendering messages in `locale`.
///
/// Returns every violation; an empty list means the request is valid.
/// Format rules are skipped for blank values, which only report `required`.
pub fn validate(request: &LoginRequest, locale: Locale, localizer: &dyn Localize) -> Vec<FieldError> {
    validate_with(LOGIN_RULES, request, locale, localizer)
}

/// Validate against an explicit rule table.
pub fn validate_with(
    rules: &[(Field, Rule)],
    request: &LoginRequest,
    locale: Locale,
    localizer: &dyn Localize,
) -> Vec<FieldError> {
    rules
        .iter()
        .filter(|(field, rule)| {
            let value = field.value(request);
            let blank = value.trim().is_empty();
            if blank && !matches!(rule, Rule::Required) {
                return false;
            }
            !rule.is_satisfied(value)
        })
        .map(|(field, rule)| {
            let field_name = localizer.lookup(locale, field.display_key());
            let extra = rule.extra_args();
            let mut args: Vec<&str> = Vec::with_capacity(1 + extra.len());
            args.push(field_name);
            args.extend(extra.iter().map(String::as_str));

            FieldError {
                field: *field,
                rule: rule.kind(),
                message: localizer.localize(locale, rule.kind().message_key(), &args),
            }
        })
        .collect()
}
