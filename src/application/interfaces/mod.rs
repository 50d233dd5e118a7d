/// Authentication service interface
pub mod auth;
/// Views, workbooks and datasources service interface
pub mod content;
/// Project service interface
pub mod project;
/// Server, site and user service interface
pub mod site;

pub use auth::AuthService;
pub use content::ContentService;
pub use project::ProjectService;
pub use site::SiteService;
