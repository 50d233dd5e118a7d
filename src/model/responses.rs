/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Response envelopes
//!
//! Every XML response is a `tsResponse` document wrapping a single entity or a
//! collection (optionally preceded by a `pagination` element). Each envelope
//! implements [`ResponseBody`] so the dispatcher can decode straight into it.

use crate::error::AppError;
use crate::model::http::{ResponseBody, ResponseFormat};
use crate::model::xml::from_xml;
use crate::presentation::{
    Credentials, Datasource, Pagination, Project, ServerError, ServerInfo, Site, User, View,
    Workbook,
};
use serde::{Deserialize, Serialize};

/// Sign-in response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "tsResponse")]
pub struct AuthResponse {
    /// Token plus signed-in site and user
    pub credentials: Credentials,
}

/// Server info response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "tsResponse")]
pub struct ServerInfoResponse {
    /// Server versions
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

/// `<sites>` collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sites {
    /// Sites in the page
    #[serde(rename = "site")]
    pub sites: Vec<Site>,
}

/// Query-sites response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "tsResponse")]
pub struct QuerySitesResponse {
    /// Paging information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// Sites
    #[serde(default)]
    pub sites: Sites,
}

/// Single site response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "tsResponse")]
pub struct QuerySiteResponse {
    /// The site
    pub site: Site,
}

/// Single user response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "tsResponse")]
pub struct QueryUserOnSiteResponse {
    /// The user
    pub user: User,
}

/// `<projects>` collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projects {
    /// Projects in the page
    #[serde(rename = "project")]
    pub projects: Vec<Project>,
}

/// Query-projects response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "tsResponse")]
pub struct QueryProjectsResponse {
    /// Paging information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// Projects
    #[serde(default)]
    pub projects: Projects,
}

/// Create-project response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "tsResponse")]
pub struct CreateProjectResponse {
    /// The created project
    pub project: Project,
}

/// `<views>` collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Views {
    /// Views in the page
    #[serde(rename = "view")]
    pub views: Vec<View>,
}

/// Query-views response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "tsResponse")]
pub struct QueryViewsResponse {
    /// Paging information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// Views
    #[serde(default)]
    pub views: Views,
}

/// `<workbooks>` collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workbooks {
    /// Workbooks in the page
    #[serde(rename = "workbook")]
    pub workbooks: Vec<Workbook>,
}

/// Query-workbooks response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "tsResponse")]
pub struct QueryWorkbooksResponse {
    /// Paging information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// Workbooks
    #[serde(default)]
    pub workbooks: Workbooks,
}

/// `<datasources>` collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Datasources {
    /// Datasources in the page
    #[serde(rename = "datasource")]
    pub datasources: Vec<Datasource>,
}

/// Query-datasources response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "tsResponse")]
pub struct QueryDatasourcesResponse {
    /// Paging information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// Datasources
    #[serde(default)]
    pub datasources: Datasources,
}

/// Single datasource response, returned by publish
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "tsResponse")]
pub struct DatasourceResponse {
    /// The datasource
    pub datasource: Datasource,
}

/// Error body of a failed response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "tsResponse")]
pub struct ErrorResponse {
    /// The error
    pub error: ServerError,
}

macro_rules! xml_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ResponseBody for $ty {
                const FORMAT: ResponseFormat = ResponseFormat::Xml;

                fn decode(body: Vec<u8>) -> Result<Self, AppError> {
                    from_xml(&body)
                }
            }
        )+
    };
}

xml_response!(
    AuthResponse,
    ServerInfoResponse,
    QuerySitesResponse,
    QuerySiteResponse,
    QueryUserOnSiteResponse,
    QueryProjectsResponse,
    CreateProjectResponse,
    QueryViewsResponse,
    QueryWorkbooksResponse,
    QueryDatasourcesResponse,
    DatasourceResponse,
    ErrorResponse,
);
