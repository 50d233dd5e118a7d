/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A site (tenant) on the server
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    /// Site LUID
    #[serde(rename = "@id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Display name
    #[serde(rename = "@name", skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// URL-safe identifier; empty for the default site
    #[serde(rename = "@contentUrl", skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    /// Who may administer the site (`ContentAndUsers` or `ContentOnly`)
    #[serde(rename = "@adminMode", skip_serializing_if = "Option::is_none")]
    pub admin_mode: Option<String>,
    /// `Active` or `Suspended`
    #[serde(rename = "@state", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Maximum number of users
    #[serde(rename = "@userQuota", skip_serializing_if = "Option::is_none")]
    pub user_quota: Option<u32>,
    /// Storage quota in megabytes
    #[serde(rename = "@storageQuota", skip_serializing_if = "Option::is_none")]
    pub storage_quota: Option<u64>,
    /// Whether subscriptions are disabled
    #[serde(rename = "@disableSubscriptions", skip_serializing_if = "Option::is_none")]
    pub disable_subscriptions: Option<bool>,
    /// Usage figures, only returned when storage was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<SiteUsage>,
}

impl Site {
    /// Site selector used in sign-in requests
    pub fn selector(content_url: impl Into<String>) -> Self {
        Self {
            content_url: Some(content_url.into()),
            ..Default::default()
        }
    }
}

/// Usage figures of a site
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteUsage {
    /// Number of users on the site
    #[serde(rename = "@numUsers")]
    pub num_users: u64,
    /// Storage in use, in megabytes
    #[serde(rename = "@storage")]
    pub storage: u64,
}

/// Field a site is looked up or deleted by, instead of its LUID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteKey {
    /// Lookup by display name
    Name,
    /// Lookup by content URL
    ContentUrl,
}

impl SiteKey {
    /// Value of the `key` query parameter
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteKey::Name => "name",
            SiteKey::ContentUrl => "contentUrl",
        }
    }
}
