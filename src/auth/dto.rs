use serde::Deserialize;

/// Signup form body. Absent fields decode to empty strings so the
/// presence check sees one shape for "missing" and "blank".
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
}

/// Signin form body.
#[derive(Debug, Deserialize)]
pub struct SigninForm {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub password: String,
}
