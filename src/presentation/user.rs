use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A user on a site
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// User LUID
    #[serde(rename = "@id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Login name
    #[serde(rename = "@name", skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Site role, e.g. `SiteAdministrator` or `Viewer`
    #[serde(rename = "@siteRole", skip_serializing_if = "Option::is_none")]
    pub site_role: Option<String>,
    /// Full name
    #[serde(rename = "@fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// E-mail address
    #[serde(rename = "@email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Last sign-in time
    #[serde(rename = "@lastLogin", skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    /// Identifier in an external authentication store
    #[serde(rename = "@externalAuthUserId", skip_serializing_if = "Option::is_none")]
    pub external_auth_user_id: Option<String>,
    /// Authentication method
    #[serde(rename = "@authSetting", skip_serializing_if = "Option::is_none")]
    pub auth_setting: Option<String>,
}
