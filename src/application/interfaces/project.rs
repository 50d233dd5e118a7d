use crate::error::AppError;
use crate::presentation::Project;
use async_trait::async_trait;

/// Interface for projects
#[async_trait]
pub trait ProjectService: Send + Sync {
    /// Gets the projects of a site
    async fn query_projects(&self, site_id: &str) -> Result<Vec<Project>, AppError>;

    /// Finds a project by name
    ///
    /// The server has no lookup by name, so this scans the project list.
    async fn get_project_by_name(&self, site_id: &str, name: &str) -> Result<Project, AppError>;

    /// Finds a project by LUID by scanning the project list
    async fn get_project_by_id(&self, site_id: &str, project_id: &str)
    -> Result<Project, AppError>;

    /// Creates a project and returns it as stored by the server
    async fn create_project(&self, site_id: &str, project: &Project) -> Result<Project, AppError>;

    /// Deletes a project
    async fn delete_project(&self, site_id: &str, project_id: &str) -> Result<(), AppError>;
}
