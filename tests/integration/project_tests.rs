use crate::common::{self, SITE_ID};
use mockito::Matcher;
use tableau_client::prelude::*;

const PROJECTS: &str = r#"<tsResponse>
  <pagination pageNumber="1" pageSize="100" totalAvailable="2"/>
  <projects>
    <project id="p1" name="Finance" description="Quarterly reports" contentPermissions="ManagedByOwner"/>
    <project id="p2" name="Operations" contentPermissions="LockedToProject"/>
  </projects>
</tsResponse>"#;

async fn mock_projects(server: &mut mockito::ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/api/2.8/sites/site-1/projects")
        .with_status(200)
        .with_body(PROJECTS)
        .create_async()
        .await
}

#[tokio::test]
async fn test_query_projects() {
    let mut server = mockito::Server::new_async().await;
    let _m = mock_projects(&mut server).await;
    let (client, _) = common::create_test_client(&server.url());

    let projects = client.query_projects(SITE_ID).await.unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[1].content_permissions.as_deref(), Some("LockedToProject"));
}

#[tokio::test]
async fn test_get_project_by_name() {
    let mut server = mockito::Server::new_async().await;
    let _m = mock_projects(&mut server).await;
    let (client, _) = common::create_test_client(&server.url());

    let project = client.get_project_by_name(SITE_ID, "Finance").await.unwrap();
    assert_eq!(project.id, "p1");
}

#[tokio::test]
async fn test_get_project_by_name_missing() {
    let mut server = mockito::Server::new_async().await;
    let _m = mock_projects(&mut server).await;
    let (client, _) = common::create_test_client(&server.url());

    match client.get_project_by_name(SITE_ID, "Marketing").await {
        Err(AppError::ProjectNotFound { field, value }) => {
            assert_eq!(field, "name");
            assert_eq!(value, "Marketing");
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_get_project_by_id() {
    let mut server = mockito::Server::new_async().await;
    let _m = mock_projects(&mut server).await;
    let (client, _) = common::create_test_client(&server.url());

    let project = client.get_project_by_id(SITE_ID, "p2").await.unwrap();
    assert_eq!(project.name, "Operations");

    let err = client.get_project_by_id(SITE_ID, "p9").await.unwrap_err();
    assert_eq!(err.to_string(), "project with id 'p9' not found");
}

#[tokio::test]
async fn test_create_project() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("POST", "/api/2.8/sites/site-1/projects")
        .match_header("content-type", "application/xml")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"^<tsRequest><project "#.to_string()),
            Matcher::Regex(r#"name="Marketing""#.to_string()),
            Matcher::Regex(r#"description="Campaigns""#.to_string()),
        ]))
        .with_status(201)
        .with_body(
            r#"<tsResponse><project id="p3" name="Marketing" description="Campaigns" contentPermissions="ManagedByOwner"/></tsResponse>"#,
        )
        .create_async()
        .await;
    let (client, _) = common::create_test_client(&server.url());

    let created = client
        .create_project(SITE_ID, &Project::new("Marketing").with_description("Campaigns"))
        .await
        .unwrap();
    m.assert_async().await;
    assert_eq!(created.id, "p3");
    assert_eq!(created.content_permissions.as_deref(), Some("ManagedByOwner"));
}

#[tokio::test]
async fn test_create_project_conflict() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/api/2.8/sites/site-1/projects")
        .with_status(409)
        .with_body(
            r#"<tsResponse><error code="409006"><summary>Resource Conflict</summary><detail>A project with this name already exists.</detail></error></tsResponse>"#,
        )
        .create_async()
        .await;
    let (client, _) = common::create_test_client(&server.url());

    let err = client
        .create_project(SITE_ID, &Project::new("Finance"))
        .await
        .unwrap_err();
    match err {
        AppError::Server { status, error } => {
            assert_eq!(status.as_u16(), 409);
            assert_eq!(error.code, "409006");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_project() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("DELETE", "/api/2.8/sites/site-1/projects/p2")
        .with_status(204)
        .create_async()
        .await;
    let (client, _) = common::create_test_client(&server.url());

    client.delete_project(SITE_ID, "p2").await.unwrap();
    m.assert_async().await;
}
