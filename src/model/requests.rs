/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::xml::to_xml;
use crate::presentation::{Credentials, Datasource, Project, Site, UserRef};
use serde::{Deserialize, Serialize};

/// Sign-in payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "tsRequest")]
pub struct SignInRequest {
    /// Credentials, site selector and optional impersonation target
    pub credentials: Credentials,
}

impl SignInRequest {
    /// Builds the payload
    ///
    /// # Arguments
    /// * `username` - User name
    /// * `password` - Password
    /// * `site_selector` - Content URL of the site; empty selects the default site
    /// * `impersonate` - LUID of a user to act as; `None` or empty disables impersonation
    pub fn new(username: &str, password: &str, site_selector: &str, impersonate: Option<&str>) -> Self {
        let user = impersonate
            .filter(|id| !id.is_empty())
            .map(|id| UserRef { id: id.to_string() });
        Self {
            credentials: Credentials {
                name: username.to_string(),
                password: password.to_string(),
                token: String::new(),
                site: Some(Site::selector(site_selector)),
                user,
            },
        }
    }

    /// XML document for the request body
    pub fn to_xml(&self) -> Result<String, AppError> {
        to_xml(self)
    }
}

/// Create-project payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "tsRequest")]
pub struct CreateProjectRequest {
    /// Project to create
    pub project: Project,
}

impl CreateProjectRequest {
    /// Wraps a project
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    /// XML document for the request body
    pub fn to_xml(&self) -> Result<String, AppError> {
        to_xml(self)
    }
}

/// Metadata part of a datasource publish
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "tsRequest")]
pub struct DatasourceCreateRequest {
    /// Datasource metadata
    pub datasource: Datasource,
}

impl DatasourceCreateRequest {
    /// Wraps datasource metadata
    pub fn new(datasource: Datasource) -> Self {
        Self { datasource }
    }

    /// XML document for the metadata part
    pub fn to_xml(&self) -> Result<String, AppError> {
        to_xml(self)
    }
}
