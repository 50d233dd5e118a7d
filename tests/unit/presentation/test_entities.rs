use tableau_client::presentation::{
    Credentials, DatasourceFileType, Pagination, Project, Site, SiteKey,
};

#[test]
fn test_credentials_debug_redacts_secrets() {
    let credentials = Credentials {
        name: "admin".to_string(),
        password: "hunter2".to_string(),
        token: "tok-abc".to_string(),
        ..Default::default()
    };
    let debug = format!("{credentials:?}");
    assert!(debug.contains("admin"));
    assert!(!debug.contains("hunter2"));
    assert!(!debug.contains("tok-abc"));
}

#[test]
fn test_site_selector_only_sets_content_url() {
    let site = Site::selector("sales");
    assert_eq!(site.content_url.as_deref(), Some("sales"));
    assert!(site.id.is_empty());
    assert!(site.name.is_empty());
}

#[test]
fn test_site_key_query_values() {
    assert_eq!(SiteKey::Name.as_str(), "name");
    assert_eq!(SiteKey::ContentUrl.as_str(), "contentUrl");
}

#[test]
fn test_datasource_file_type_extension() {
    assert_eq!(DatasourceFileType::default(), DatasourceFileType::Tds);
    assert_eq!(DatasourceFileType::Tds.extension(), "tds");
    assert_eq!(DatasourceFileType::Tdsx.extension(), "tdsx");
}

#[test]
fn test_project_builder() {
    let project = Project::new("Finance")
        .with_description("Quarterly")
        .with_parent("p0");
    assert_eq!(project.name, "Finance");
    assert_eq!(project.description.as_deref(), Some("Quarterly"));
    assert_eq!(project.parent_project_id.as_deref(), Some("p0"));
    assert!(project.content_permissions.is_none());
}

#[test]
fn test_pagination_has_more() {
    let page = Pagination {
        page_number: 2,
        page_size: 100,
        total_available: 201,
    };
    assert!(page.has_more());

    let last = Pagination {
        page_number: 3,
        page_size: 100,
        total_available: 201,
    };
    assert!(!last.has_more());
}

#[test]
fn test_project_display_is_json() {
    let project = Project::new("Finance");
    let display = project.to_string();
    assert!(display.contains("Finance"));
}
