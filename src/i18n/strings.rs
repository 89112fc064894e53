//! Message keys and the compiled template tables for each locale.
//!
//! Templates use positional placeholders (`{0}`, `{1}`, ...). Validation
//! messages receive the localized field name as `{0}`; the length message
//! also gets the bounds as `{1}` and `{2}`.

use std::fmt;

/// Identifier of a user-facing message, independent of language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKey {
    /// Login success. Placeholders: {0} = email
    MessageUserLoggedin,
    /// Placeholders: {0} = field name
    ErrorRequired,
    /// Placeholders: {0} = field name
    ErrorEmail,
    /// Placeholders: {0} = field name, {1} = min length, {2} = max length
    ErrorStringLength,
    /// Placeholders: {0} = field name
    ErrorRegularExpression,
    /// Request body could not be read as a login request
    ErrorInvalidBody,
    /// Title of the validation failure response
    TitleValidation,
    FieldEmail,
    FieldPassword,
}

impl MessageKey {
    /// Every key the application uses. The default locale must cover all of them.
    pub const ALL: [MessageKey; 9] = [
        MessageKey::MessageUserLoggedin,
        MessageKey::ErrorRequired,
        MessageKey::ErrorEmail,
        MessageKey::ErrorStringLength,
        MessageKey::ErrorRegularExpression,
        MessageKey::ErrorInvalidBody,
        MessageKey::TitleValidation,
        MessageKey::FieldEmail,
        MessageKey::FieldPassword,
    ];

    /// The stable string name of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::MessageUserLoggedin => "messageUserLoggedin",
            MessageKey::ErrorRequired => "errorRequired",
            MessageKey::ErrorEmail => "errorEmail",
            MessageKey::ErrorStringLength => "errorStringLength",
            MessageKey::ErrorRegularExpression => "errorRegularExpression",
            MessageKey::ErrorInvalidBody => "errorInvalidBody",
            MessageKey::TitleValidation => "titleValidation",
            MessageKey::FieldEmail => "fieldEmail",
            MessageKey::FieldPassword => "fieldPassword",
        }
    }

    /// Parse a key from its string name.
    pub fn from_name(name: &str) -> Option<MessageKey> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Templates for one locale, keyed by message.
pub type MessageTable = &'static [(MessageKey, &'static str)];

// ==================== English Strings ====================

pub const ENGLISH_MESSAGES: MessageTable = &[
    (MessageKey::MessageUserLoggedin, "User {0} has logged in successfully"),
    (MessageKey::ErrorRequired, "The {0} field is required."),
    (
        MessageKey::ErrorEmail,
        "The {0} field is not a valid e-mail address.",
    ),
    (
        MessageKey::ErrorStringLength,
        "The {0} field must be between {1} and {2} characters long.",
    ),
    (
        MessageKey::ErrorRegularExpression,
        "The {0} field may contain only Latin letters and digits.",
    ),
    (
        MessageKey::ErrorInvalidBody,
        "The request body is not a valid login request.",
    ),
    (
        MessageKey::TitleValidation,
        "One or more validation errors occurred.",
    ),
    (MessageKey::FieldEmail, "Email"),
    (MessageKey::FieldPassword, "Password"),
];

// ==================== Russian Strings ====================

pub const RUSSIAN_MESSAGES: MessageTable = &[
    (
        MessageKey::MessageUserLoggedin,
        "Пользователь {0} успешно вошёл в систему",
    ),
    (
        MessageKey::ErrorRequired,
        "Поле «{0}» обязательно для заполнения.",
    ),
    (
        MessageKey::ErrorEmail,
        "Поле «{0}» не является допустимым адресом электронной почты.",
    ),
    (
        MessageKey::ErrorStringLength,
        "Длина поля «{0}» должна быть от {1} до {2} символов.",
    ),
    (
        MessageKey::ErrorRegularExpression,
        "Поле «{0}» может содержать только латинские буквы и цифры.",
    ),
    (
        MessageKey::ErrorInvalidBody,
        "Тело запроса не является корректным запросом на вход.",
    ),
    (
        MessageKey::TitleValidation,
        "Произошла одна или несколько ошибок проверки.",
    ),
    (MessageKey::FieldEmail, "Электронная почта"),
    (MessageKey::FieldPassword, "Пароль"),
];

/// The compiled tables, by locale code.
pub const BUILTIN_TABLES: &[(&str, MessageTable)] =
    &[("en", ENGLISH_MESSAGES), ("ru", RUSSIAN_MESSAGES)];
