use tableau_client::application::auth::{Session, site_selector};
use tableau_client::application::config::Config;
use tableau_client::presentation::{Credentials, Site, UserRef};

#[test]
fn test_site_selector_omits_default_site() {
    let config = Config::with_base_url("https://tableau.example.com");
    assert_eq!(site_selector(&config.server, "Default"), "");
}

#[test]
fn test_site_selector_keeps_other_sites() {
    let config = Config::with_base_url("https://tableau.example.com");
    assert_eq!(site_selector(&config.server, "sales"), "sales");
}

#[test]
fn test_site_selector_keeps_default_when_flag_off() {
    let mut config = Config::with_base_url("https://tableau.example.com");
    config.server.omit_default_site_name = false;
    assert_eq!(site_selector(&config.server, "Default"), "Default");
}

#[test]
fn test_site_selector_uses_configured_default_name() {
    let mut config = Config::with_base_url("https://tableau.example.com");
    config.server.default_site_name = "Main".to_string();
    assert_eq!(site_selector(&config.server, "Main"), "");
    assert_eq!(site_selector(&config.server, "Default"), "Default");
}

#[test]
fn test_session_from_credentials() {
    let credentials = Credentials {
        token: "tok-123".to_string(),
        site: Some(Site {
            id: "site-1".to_string(),
            ..Default::default()
        }),
        user: Some(UserRef {
            id: "user-1".to_string(),
        }),
        ..Default::default()
    };

    let session = Session::from(credentials);
    assert!(session.is_signed_in());
    assert_eq!(session.token(), Some("tok-123"));
    assert_eq!(session.site_id.as_deref(), Some("site-1"));
    assert_eq!(session.user_id.as_deref(), Some("user-1"));
}

#[test]
fn test_session_without_token_is_not_signed_in() {
    let session = Session::from(Credentials::default());
    assert!(!session.is_signed_in());
    assert_eq!(session.token(), None);
    assert_eq!(session.site_id, None);
}

#[test]
fn test_session_clear() {
    let mut session = Session {
        token: Some("tok".to_string()),
        site_id: Some("s".to_string()),
        user_id: None,
    };
    session.clear();
    assert_eq!(session, Session::default());
}

#[test]
fn test_session_debug_redacts_token() {
    let session = Session {
        token: Some("very-secret".to_string()),
        site_id: None,
        user_id: None,
    };
    let debug = format!("{session:?}");
    assert!(!debug.contains("very-secret"));
    assert!(debug.contains("***"));
}
