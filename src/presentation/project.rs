/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::presentation::common::OwnerRef;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A project grouping workbooks and datasources on a site
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Project LUID, empty when creating
    #[serde(rename = "@id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Project name
    #[serde(rename = "@name", skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Free text description
    #[serde(rename = "@description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `LockedToProject` or `ManagedByOwner`
    #[serde(rename = "@contentPermissions", skip_serializing_if = "Option::is_none")]
    pub content_permissions: Option<String>,
    /// Parent project for nested projects
    #[serde(rename = "@parentProjectId", skip_serializing_if = "Option::is_none")]
    pub parent_project_id: Option<String>,
    /// Owner of the project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerRef>,
}

impl Project {
    /// Creates a project payload with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the content permissions
    pub fn with_content_permissions(mut self, permissions: impl Into<String>) -> Self {
        self.content_permissions = Some(permissions.into());
        self
    }

    /// Set the parent project
    pub fn with_parent(mut self, parent_project_id: impl Into<String>) -> Self {
        self.parent_project_id = Some(parent_project_id.into());
        self
    }
}
