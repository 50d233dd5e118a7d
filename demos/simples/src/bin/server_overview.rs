use std::error::Error;
use tableau_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let config = Config::new();
    info!("Loaded config → {}", config.server.base_url);

    let username = std::env::var("TABLEAU_USERNAME").unwrap_or_default();
    let password = std::env::var("TABLEAU_PASSWORD").unwrap_or_default();
    let site = config.server.default_site_name.clone();

    let mut client = Client::new(config)?;

    let info = client.server_info().await?;
    info!(
        "Server {} (build {}), REST API {}",
        info.product_version.value, info.product_version.build, info.rest_api_version
    );

    let session = match client.sign_in(&username, &password, &site, None).await {
        Ok(session) => session,
        Err(e) => {
            error!("Sign-in failed: {e}");
            return Err(Box::new(e) as Box<dyn Error>);
        }
    };
    let site_id = session.site_id.clone().unwrap_or_default();
    info!("✅ Signed in to site {}", site_id);

    for site in client.query_sites().await? {
        info!("Site {} ({}) state={:?}", site.name, site.id, site.state);
    }

    for project in client.query_projects(&site_id).await? {
        info!("Project {} ({})", project.name, project.id);
    }

    for workbook in client.query_workbooks(&site_id, &[("pageSize", "100")]).await? {
        info!("Workbook {} ({})", workbook.name, workbook.id);
        let views = client
            .query_workbook_views(&site_id, &workbook.id, &[("includeUsageStatistics", "true")])
            .await?;
        for view in views {
            let count = view.usage.map(|u| u.total_view_count).unwrap_or_default();
            info!("  View {} viewed {} times", view.name, count);
        }
    }

    client.sign_out().await?;
    info!("Signed out");
    Ok(())
}
