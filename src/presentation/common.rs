/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Reference to a project from another entity (`<project id=".." name=".."/>`)
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRef {
    /// Project LUID
    #[serde(rename = "@id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Project name, only present in some responses
    #[serde(rename = "@name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ProjectRef {
    /// Creates a reference by id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }
}

/// Owner of a piece of content (`<owner id=".."/>`)
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerRef {
    /// User LUID
    #[serde(rename = "@id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// User name, only present in some responses
    #[serde(rename = "@name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Reference to a user (`<user id=".."/>`), used for impersonation and in sign-in responses
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRef {
    /// User LUID
    #[serde(rename = "@id", skip_serializing_if = "String::is_empty")]
    pub id: String,
}

/// Reference to the workbook a view belongs to
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbookRef {
    /// Workbook LUID
    #[serde(rename = "@id", skip_serializing_if = "String::is_empty")]
    pub id: String,
}

/// A single content tag
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    /// Tag label
    #[serde(rename = "@label")]
    pub label: String,
}

/// Tags attached to a workbook or datasource
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct Tags {
    /// Individual tags
    #[serde(rename = "tag")]
    pub tags: Vec<Tag>,
}

/// Paging information returned with collections
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Current page, starting at 1
    #[serde(rename = "@pageNumber")]
    pub page_number: u32,
    /// Items per page
    #[serde(rename = "@pageSize")]
    pub page_size: u32,
    /// Total number of items on the server
    #[serde(rename = "@totalAvailable")]
    pub total_available: u32,
}

impl Pagination {
    /// Whether more pages follow the current one
    #[must_use]
    pub fn has_more(&self) -> bool {
        u64::from(self.page_number) * u64::from(self.page_size) < u64::from(self.total_available)
    }
}
