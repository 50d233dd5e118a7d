use std::error::Error;
use tableau_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let config = Config::new();
    let site = config.server.default_site_name.clone();
    let username = std::env::var("TABLEAU_USERNAME").unwrap_or_default();
    let password = std::env::var("TABLEAU_PASSWORD").unwrap_or_default();

    let mut client = Client::new(config)?;
    let session = client.sign_in(&username, &password, &site, None).await?;
    let site_id = session.site_id.clone().unwrap_or_default();

    let views = client.query_views(&site_id).await?;
    let Some(view) = views.first() else {
        warn!("No views on site {}", site_id);
        client.sign_out().await?;
        return Ok(());
    };

    let data = client.query_view_data(&site_id, &view.id).await?;
    info!("View {} columns: {:?}", view.name, data.headers()?);
    for record in data.records()?.iter().take(10) {
        info!("{:?}", record);
    }

    client.sign_out().await?;
    Ok(())
}
