use crate::presentation::common::{OwnerRef, ProjectRef, Tags};
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A published workbook
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct Workbook {
    /// Workbook LUID
    #[serde(rename = "@id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Workbook name
    #[serde(rename = "@name", skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// URL-safe identifier
    #[serde(rename = "@contentUrl", skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    /// Whether views are shown as tabs
    #[serde(rename = "@showTabs", skip_serializing_if = "Option::is_none")]
    pub show_tabs: Option<bool>,
    /// Size in megabytes
    #[serde(rename = "@size", skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Creation time
    #[serde(rename = "@createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(rename = "@updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Containing project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectRef>,
    /// Owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerRef>,
    /// Tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}
