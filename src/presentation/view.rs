use crate::presentation::common::{OwnerRef, WorkbookRef};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A view (sheet or dashboard) of a workbook
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct View {
    /// View LUID
    #[serde(rename = "@id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// View name
    #[serde(rename = "@name", skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// URL-safe identifier
    #[serde(rename = "@contentUrl", skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    /// Workbook the view belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workbook: Option<WorkbookRef>,
    /// Owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerRef>,
    /// Usage statistics, only returned when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<ViewUsage>,
}

/// View usage statistics
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewUsage {
    /// Total number of times the view was opened
    #[serde(rename = "@totalViewCount")]
    pub total_view_count: u64,
}
