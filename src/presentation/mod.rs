/// Credentials exchanged during sign-in
pub mod auth;
/// Reference and helper elements shared by several entities
pub mod common;
/// Datasource models
pub mod datasource;
/// Project models
pub mod project;
/// Server information and server-reported errors
pub mod server;
/// Site models
pub mod site;
/// Tabular (CSV) view exports
pub mod tabular;
/// User models
pub mod user;
/// View models
pub mod view;
/// Workbook models
pub mod workbook;

pub use auth::Credentials;
pub use common::{OwnerRef, Pagination, ProjectRef, Tag, Tags, UserRef, WorkbookRef};
pub use datasource::{ConnectionCredentials, Datasource, DatasourceFileType};
pub use project::Project;
pub use server::{ProductVersion, ServerError, ServerInfo};
pub use site::{Site, SiteKey, SiteUsage};
pub use tabular::ViewData;
pub use user::User;
pub use view::{View, ViewUsage};
pub use workbook::Workbook;
