/// Sign-in and sign-out
pub mod auth_service;
/// Views, workbooks and datasources
pub mod content_service;
/// Projects
pub mod project_service;
/// Server info, sites and users
pub mod site_service;
