use std::error::Error;
use tableau_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let config = Config::new();
    let site = config.server.default_site_name.clone();
    let username = std::env::var("TABLEAU_USERNAME").unwrap_or_default();
    let password = std::env::var("TABLEAU_PASSWORD").unwrap_or_default();
    let project_name = std::env::var("TABLEAU_PROJECT").unwrap_or_else(|_| "Default".to_string());
    let tds_path = std::env::args()
        .nth(1)
        .ok_or("usage: publish_datasource <file.tds>")?;

    let mut client = Client::new(config)?;
    let session = client.sign_in(&username, &password, &site, None).await?;
    let site_id = session.site_id.clone().unwrap_or_default();

    let project = client.get_project_by_name(&site_id, &project_name).await?;
    info!("Publishing into project {} ({})", project.name, project.id);

    let name = std::path::Path::new(&tds_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("datasource")
        .to_string();
    let tds = tokio::fs::read_to_string(&tds_path).await?;

    let published = client
        .publish_tds(&site_id, &Datasource::for_project(name, project.id), &tds, true)
        .await?;
    info!("✅ Published datasource {} ({})", published.name, published.id);

    for datasource in client.query_datasources(&site_id).await? {
        info!("Datasource {} type={:?}", datasource.name, datasource.datasource_type);
    }

    client.sign_out().await?;
    Ok(())
}
