use serde::{Deserialize, Deserializer};
use std::fmt;

/// Body of `POST /Auth/login`.
///
/// Missing and `null` fields deserialize as empty strings so they surface
/// as `required` violations rather than body errors.
#[derive(Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub password: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep passwords out of logs
impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
