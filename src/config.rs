//! Configuration management for the downloader.
//!
//! Settings live in a dotenv-style key/value file in the platform-specific
//! local data directory (`ymdl/config.env`) and are loaded once at startup
//! into an explicit [`Config`] value that gets passed into the pipeline.
//! Process environment variables take precedence over the file, mirroring the
//! usual hierarchy:
//!
//! 1. Environment variables (highest priority)
//! 2. `config.env` file in the local data directory
//! 3. Application defaults (download directory only)

use std::{env, path::PathBuf};

use crate::{Res, error::Error};

/// Environment key carrying the pre-obtained OAuth token.
pub const TOKEN_VAR: &str = "YMDL_TOKEN";

/// Environment key carrying the root download directory.
pub const DOWNLOAD_DIR_VAR: &str = "YMDL_DOWNLOAD_DIR";

/// Explicit configuration value handed to the pipeline constructor.
///
/// The token is immutable for the process lifetime; there is no ambient
/// global configuration state anywhere else in the crate.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub download_dir: PathBuf,
}

impl Config {
    /// Loads configuration from the environment, seeding it from the
    /// `config.env` file first when one exists.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no token is available from either
    /// source. A missing download directory falls back to the platform
    /// download folder.
    pub async fn load() -> Res<Self> {
        // Seed process env from the persisted file; absence is fine, the
        // variables may be set directly.
        let _ = dotenv::from_path(Self::file_path());

        let token = env::var(TOKEN_VAR).map_err(|_| {
            Error::Config(format!(
                "no token configured; run ymdl config --token <TOKEN> or set {TOKEN_VAR}"
            ))
        })?;

        let download_dir = env::var(DOWNLOAD_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_download_dir());

        Ok(Self {
            token,
            download_dir,
        })
    }

    /// Writes the current values back to the `config.env` file, creating the
    /// data directory when needed.
    pub async fn persist(&self) -> Res<()> {
        let path = Self::file_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let contents = format!(
            "{TOKEN_VAR}={token}\n{DOWNLOAD_DIR_VAR}={dir}\n",
            token = self.token,
            dir = self.download_dir.display(),
        );
        async_fs::write(path, contents).await?;
        Ok(())
    }

    /// The token shortened for display, so settings output never echoes the
    /// full credential.
    pub fn masked_token(&self) -> String {
        let prefix: String = self.token.chars().take(5).collect();
        format!("{prefix}...")
    }

    /// Location of the persisted settings file:
    ///
    /// - Linux: `~/.local/share/ymdl/config.env`
    /// - macOS: `~/Library/Application Support/ymdl/config.env`
    /// - Windows: `%LOCALAPPDATA%/ymdl/config.env`
    pub fn file_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("ymdl/config.env");
        path
    }

    /// Default download root used when the directory key is unset.
    pub fn default_download_dir() -> PathBuf {
        dirs::download_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ymdl")
    }
}
