//! Configuration management.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file in the local data directory:
//!
//! - Linux: `~/.local/share/featurd/.env`
//! - macOS: `~/Library/Application Support/featurd/.env`
//! - Windows: `%LOCALAPPDATA%/featurd/.env`
//!
//! Variables already present in the process environment win over the file.
//!
//! Every extraction region is served by its own Spotify app, so credentials
//! are looked up per region: `SPOTIFY_{REGION}_ID` and
//! `SPOTIFY_{REGION}_SECRET`, e.g. `SPOTIFY_NASAOC_ID`.

use std::{env, path::PathBuf};

use crate::{
    error::{ExtractError, Res},
    region::Region,
    spotify::{DEFAULT_API_URL, DEFAULT_TOKEN_URL},
    types::Credentials,
};

pub const APP_DIR: &str = "featurd";

/// Path of the optional `.env` file.
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push(".env");
    path
}

/// Loads the `.env` file from the local data directory if there is one.
///
/// Returns whether a file was loaded. A missing file is not an error; an
/// unreadable or malformed one is.
pub async fn load_env() -> Result<bool, String> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(false);
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    Ok(true)
}

pub fn client_id_var(region: Region) -> String {
    format!("SPOTIFY_{}_ID", region.code())
}

pub fn client_secret_var(region: Region) -> String {
    format!("SPOTIFY_{}_SECRET", region.code())
}

fn required(var: String) -> Res<String> {
    match env::var(&var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ExtractError::MissingCredential { var }),
    }
}

/// Credentials of the app serving `region`.
pub fn credentials(region: Region) -> Res<Credentials> {
    let client_id = required(client_id_var(region))?;
    let client_secret = required(client_secret_var(region))?;
    Ok(Credentials::new(client_id, client_secret))
}

/// Base URL of the Web API, `SPOTIFY_API_URL` or the public endpoint.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Token endpoint, `SPOTIFY_API_TOKEN_URL` or the public endpoint.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Everything one region run needs from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub region: Region,
    pub credentials: Credentials,
    pub api_url: String,
    pub token_url: String,
}

impl Settings {
    /// Reads the settings for `region`. Fails before any network activity
    /// when the region's credentials are missing.
    pub fn from_env(region: Region) -> Res<Self> {
        Ok(Self {
            region,
            credentials: credentials(region)?,
            api_url: spotify_apiurl(),
            token_url: spotify_apitoken_url(),
        })
    }
}
