use std::env;

use featurd::{
    ExtractError,
    config::{self, Settings},
    region::Region,
    spotify::{DEFAULT_API_URL, DEFAULT_TOKEN_URL},
};

// Tests run in parallel and share the process environment, so each test
// owns the variables of a different region.

#[test]
fn test_credential_variable_names() {
    assert_eq!(config::client_id_var(Region::Nasaoc), "SPOTIFY_NASAOC_ID");
    assert_eq!(config::client_secret_var(Region::Af), "SPOTIFY_AF_SECRET");
}

#[test]
fn test_settings_from_env() {
    unsafe {
        env::set_var("SPOTIFY_EU_ID", "eu-id");
        env::set_var("SPOTIFY_EU_SECRET", "eu-secret");
    }

    let settings = Settings::from_env(Region::Eu).unwrap();

    assert_eq!(settings.region, Region::Eu);
    assert_eq!(settings.credentials.client_id(), "eu-id");
    assert_eq!(settings.credentials.client_secret(), "eu-secret");
}

#[test]
fn test_missing_secret_is_configuration_error() {
    unsafe {
        env::set_var("SPOTIFY_AS_ID", "as-id");
        env::remove_var("SPOTIFY_AS_SECRET");
    }

    let err = Settings::from_env(Region::As).unwrap_err();

    assert!(err.is_configuration());
    match err {
        ExtractError::MissingCredential { var } => assert_eq!(var, "SPOTIFY_AS_SECRET"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_blank_id_counts_as_missing() {
    unsafe {
        env::set_var("SPOTIFY_AF_ID", "  ");
        env::set_var("SPOTIFY_AF_SECRET", "af-secret");
    }

    let err = config::credentials(Region::Af).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::MissingCredential { ref var } if var == "SPOTIFY_AF_ID"
    ));
}

#[test]
fn test_endpoint_overrides() {
    unsafe {
        env::remove_var("SPOTIFY_API_URL");
        env::remove_var("SPOTIFY_API_TOKEN_URL");
    }
    assert_eq!(config::spotify_apiurl(), DEFAULT_API_URL);
    assert_eq!(config::spotify_apitoken_url(), DEFAULT_TOKEN_URL);

    unsafe {
        env::set_var("SPOTIFY_API_URL", "http://localhost:8080/v1");
        env::set_var("SPOTIFY_API_TOKEN_URL", "http://localhost:8080/token");
    }
    assert_eq!(config::spotify_apiurl(), "http://localhost:8080/v1");
    assert_eq!(config::spotify_apitoken_url(), "http://localhost:8080/token");

    unsafe {
        env::remove_var("SPOTIFY_API_URL");
        env::remove_var("SPOTIFY_API_TOKEN_URL");
    }
}

#[test]
fn test_env_file_location() {
    let path = config::env_file_path();
    assert!(path.ends_with("featurd/.env"));
}

#[test]
fn test_error_classification() {
    assert!(ExtractError::InvalidDate("x".into()).is_configuration());
    assert!(!ExtractError::Cancelled.is_configuration());
    assert!(
        !ExtractError::RateLimitWindow {
            retry_after: 90_000
        }
        .is_configuration()
    );
}
