use crate::application::client::Client;
use crate::application::interfaces::ProjectService;
use crate::constants::APPLICATION_XML;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::requests::CreateProjectRequest;
use crate::model::responses::{CreateProjectResponse, QueryProjectsResponse};
use crate::presentation::Project;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

#[async_trait]
impl ProjectService for Client {
    async fn query_projects(&self, site_id: &str) -> Result<Vec<Project>, AppError> {
        info!("Getting projects for site: {}", site_id);
        let url = self.endpoint(&["sites", site_id, "projects"], &[])?;
        let response: QueryProjectsResponse = self.send(ApiRequest::get(url)).await?;
        debug!(
            "Projects obtained: {} projects",
            response.projects.projects.len()
        );
        Ok(response.projects.projects)
    }

    async fn get_project_by_name(&self, site_id: &str, name: &str) -> Result<Project, AppError> {
        self.query_projects(site_id)
            .await?
            .into_iter()
            .find(|project| project.name == name)
            .ok_or_else(|| AppError::ProjectNotFound {
                field: "name",
                value: name.to_string(),
            })
    }

    async fn get_project_by_id(
        &self,
        site_id: &str,
        project_id: &str,
    ) -> Result<Project, AppError> {
        self.query_projects(site_id)
            .await?
            .into_iter()
            .find(|project| project.id == project_id)
            .ok_or_else(|| AppError::ProjectNotFound {
                field: "id",
                value: project_id.to_string(),
            })
    }

    async fn create_project(&self, site_id: &str, project: &Project) -> Result<Project, AppError> {
        info!("Creating project {} on site {}", project.name, site_id);
        let payload = CreateProjectRequest::new(project.clone()).to_xml()?;
        let url = self.endpoint(&["sites", site_id, "projects"], &[])?;
        let request = ApiRequest::post(url)
            .with_header(CONTENT_TYPE.as_str(), APPLICATION_XML)
            .with_body(payload);

        let response: CreateProjectResponse = self.send(request).await?;
        debug!("Project created: {}", response.project.id);
        Ok(response.project)
    }

    async fn delete_project(&self, site_id: &str, project_id: &str) -> Result<(), AppError> {
        info!("Deleting project {} on site {}", project_id, site_id);
        let url = self.endpoint(&["sites", site_id, "projects", project_id], &[])?;
        self.send(ApiRequest::delete(url)).await
    }
}
