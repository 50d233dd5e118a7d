/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::auth::{Session, site_selector};
use crate::application::client::Client;
use crate::application::interfaces::AuthService;
use crate::constants::APPLICATION_XML;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::requests::SignInRequest;
use crate::model::responses::AuthResponse;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info, warn};

#[async_trait]
impl AuthService for Client {
    async fn sign_in(
        &mut self,
        username: &str,
        password: &str,
        site: &str,
        impersonate_user_id: Option<&str>,
    ) -> Result<Session, AppError> {
        let config = self.config();
        let selector = site_selector(&config.server, site);
        info!("Signing in as {} to site '{}'", username, selector);

        let payload =
            SignInRequest::new(username, password, &selector, impersonate_user_id).to_xml()?;
        let request = ApiRequest::post(self.endpoint(&["auth", "signin"], &[])?)
            .with_header(CONTENT_TYPE.as_str(), APPLICATION_XML)
            .with_body(payload);

        let response: AuthResponse = self.send(request).await?;
        let session = Session::from(response.credentials);
        if !session.is_signed_in() {
            warn!("Sign-in response carried no token");
        }

        debug!("Signed in, site: {:?}, user: {:?}", session.site_id, session.user_id);
        self.set_session(session.clone());
        Ok(session)
    }

    async fn sign_out(&mut self) -> Result<(), AppError> {
        info!("Signing out");
        let request = ApiRequest::post(self.endpoint(&["auth", "signout"], &[])?)
            .with_header(CONTENT_TYPE.as_str(), APPLICATION_XML);

        self.send::<()>(request).await?;
        self.set_session(Session::default());

        info!("Signed out");
        Ok(())
    }
}
