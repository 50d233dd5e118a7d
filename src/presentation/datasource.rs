/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::presentation::common::{OwnerRef, ProjectRef, Tags};
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A published datasource
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct Datasource {
    /// Datasource LUID, empty when publishing
    #[serde(rename = "@id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Datasource name, also used for the published file name
    #[serde(rename = "@name", skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Connection type, e.g. `excel-direct` or `postgres`
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub datasource_type: Option<String>,
    /// URL-safe identifier
    #[serde(rename = "@contentUrl", skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    /// Whether the datasource is certified
    #[serde(rename = "@isCertified", skip_serializing_if = "Option::is_none")]
    pub is_certified: Option<bool>,
    /// Creation time
    #[serde(rename = "@createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(rename = "@updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Credentials embedded on publish
    #[serde(
        rename = "connectionCredentials",
        skip_serializing_if = "Option::is_none"
    )]
    pub connection_credentials: Option<ConnectionCredentials>,
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

impl Datasource {
    /// Publish metadata for a datasource going into a project
    pub fn for_project(name: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project: Some(ProjectRef::new(project_id)),
            ..Default::default()
        }
    }

    /// Embed connection credentials on publish
    pub fn with_connection_credentials(mut self, credentials: ConnectionCredentials) -> Self {
        self.connection_credentials = Some(credentials);
        self
    }
}

/// Database credentials sent along a published datasource
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionCredentials {
    /// Database user
    #[serde(rename = "@name")]
    pub name: String,
    /// Database password
    #[serde(rename = "@password")]
    pub password: String,
    /// Whether the server stores the credentials
    #[serde(rename = "@embed", skip_serializing_if = "Option::is_none")]
    pub embed: Option<bool>,
}

/// File formats a datasource can be published as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatasourceFileType {
    /// Plain XML datasource definition
    #[default]
    Tds,
    /// Packaged datasource (zip with extracts)
    Tdsx,
}

impl DatasourceFileType {
    /// Value of the `datasourceType` query parameter and file extension
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            DatasourceFileType::Tds => "tds",
            DatasourceFileType::Tdsx => "tdsx",
        }
    }
}
