/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Session state
//!
//! The session is a plain value owned by the client: sign-in fills it and
//! sign-out clears it. It is not synchronized; a client shared between tasks
//! must be wrapped by the caller (for example in a `tokio::sync::Mutex`).

use crate::application::config::ServerConfig;
use crate::presentation::Credentials;
use std::fmt;

/// Authentication state of a client
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Token sent in the `X-Tableau-Auth` header
    pub token: Option<String>,
    /// LUID of the site signed in to
    pub site_id: Option<String>,
    /// LUID of the signed-in (or impersonated) user
    pub user_id: Option<String>,
}

impl Session {
    /// Whether a token is held
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Token to attach to requests
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Drops all state
    pub fn clear(&mut self) {
        *self = Session::default();
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("site_id", &self.site_id)
            .field("user_id", &self.user_id)
            .finish()
    }
}

impl From<Credentials> for Session {
    fn from(credentials: Credentials) -> Self {
        let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };
        Session {
            token: non_empty(credentials.token),
            site_id: credentials.site.and_then(|site| non_empty(site.id)),
            user_id: credentials.user.and_then(|user| non_empty(user.id)),
        }
    }
}

/// Site selector sent at sign-in
///
/// The server addresses its default site with an empty content URL. When
/// `omit_default_site_name` is set, asking for the default site by name is
/// translated to that empty selector.
pub fn site_selector(server: &ServerConfig, site: &str) -> String {
    if server.omit_default_site_name && site == server.default_site_name {
        String::new()
    } else {
        site.to_string()
    }
}
