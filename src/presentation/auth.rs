use crate::presentation::common::UserRef;
use crate::presentation::site::Site;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credentials element of the sign-in exchange
///
/// Sent with `name`, `password`, the site selector and an optional user to
/// impersonate; returned with the session `token` and the signed-in site and user.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// User name (request only)
    #[serde(rename = "@name", skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Password (request only)
    #[serde(rename = "@password", skip_serializing_if = "String::is_empty")]
    pub password: String,
    /// Session token (response only)
    #[serde(rename = "@token", skip_serializing_if = "String::is_empty")]
    pub token: String,
    /// Site selector on the way in, signed-in site on the way out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<Site>,
    /// User to impersonate on the way in, signed-in user on the way out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRef>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("password", &"***")
            .field("token", &if self.token.is_empty() { "" } else { "***" })
            .field("site", &self.site)
            .field("user", &self.user)
            .finish()
    }
}
