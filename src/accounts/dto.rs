use crate::query::first_value;

/// Query string for `/register` and `/verify`. Both fields are optional
/// here so a missing one reaches the presence check.
#[derive(Debug)]
pub struct CredentialsQuery {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl CredentialsQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            username: first_value(pairs, "username"),
            password: first_value(pairs, "password"),
        }
    }
}

/// Credentials after the presence check.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
