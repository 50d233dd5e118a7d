use tableau_client::model::requests::{
    CreateProjectRequest, DatasourceCreateRequest, SignInRequest,
};
use tableau_client::presentation::{ConnectionCredentials, Datasource, Project};

#[test]
fn test_sign_in_request_default_site() {
    let xml = SignInRequest::new("admin", "secret", "", None)
        .to_xml()
        .unwrap();

    assert!(xml.starts_with("<tsRequest>"));
    assert!(xml.contains(r#"<credentials name="admin" password="secret">"#));
    assert!(xml.contains(r#"<site contentUrl="""#));
    assert!(!xml.contains("<user"));
    assert!(!xml.contains("token="));
}

#[test]
fn test_sign_in_request_named_site() {
    let xml = SignInRequest::new("admin", "secret", "sales", None)
        .to_xml()
        .unwrap();
    assert!(xml.contains(r#"<site contentUrl="sales""#));
}

#[test]
fn test_sign_in_request_with_impersonation() {
    let xml = SignInRequest::new("admin", "secret", "", Some("user-9"))
        .to_xml()
        .unwrap();
    assert!(xml.contains(r#"<user id="user-9""#));
}

#[test]
fn test_sign_in_request_ignores_empty_impersonation() {
    let request = SignInRequest::new("admin", "secret", "", Some(""));
    assert!(request.credentials.user.is_none());
}

#[test]
fn test_sign_in_request_escapes_attributes() {
    let xml = SignInRequest::new("admin", "p<w>&\"d", "", None)
        .to_xml()
        .unwrap();
    assert!(!xml.contains("p<w>"));
    assert!(xml.contains("&lt;"));
    assert!(xml.contains("&amp;"));
}

#[test]
fn test_create_project_request() {
    let project = Project::new("Marketing")
        .with_description("Campaign workbooks")
        .with_content_permissions("LockedToProject");
    let xml = CreateProjectRequest::new(project).to_xml().unwrap();

    assert!(xml.starts_with("<tsRequest>"));
    assert!(xml.contains(r#"name="Marketing""#));
    assert!(xml.contains(r#"description="Campaign workbooks""#));
    assert!(xml.contains(r#"contentPermissions="LockedToProject""#));
    assert!(!xml.contains("parentProjectId"));
    assert!(!xml.contains(r#" id="#));
}

#[test]
fn test_datasource_create_request() {
    let datasource = Datasource::for_project("Sales", "p1").with_connection_credentials(
        ConnectionCredentials {
            name: "db_user".to_string(),
            password: "db_pass".to_string(),
            embed: Some(true),
        },
    );
    let xml = DatasourceCreateRequest::new(datasource).to_xml().unwrap();

    assert!(xml.contains(r#"<datasource name="Sales">"#));
    assert!(xml.contains(r#"<connectionCredentials name="db_user" password="db_pass" embed="true""#));
    assert!(xml.contains(r#"<project id="p1""#));
}
