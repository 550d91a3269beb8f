use std::path::PathBuf;

use crate::{config::Config, error, info, success, warning};

/// Shows the stored settings, or rewrites them when `--token`/`--directory`
/// are given. Values may be set before any configuration file exists.
pub async fn settings(token: Option<String>, directory: Option<PathBuf>) {
    if token.is_none() && directory.is_none() {
        show().await;
        return;
    }

    let mut config = match Config::load().await {
        Ok(config) => config,
        // first run: start from an empty token and the default directory
        Err(_) => Config {
            token: String::new(),
            download_dir: Config::default_download_dir(),
        },
    };

    if let Some(token) = token {
        config.token = token;
    }
    if let Some(directory) = directory {
        config.download_dir = directory;
    }

    if config.token.is_empty() {
        warning!("No token stored yet; downloads will fail until one is set");
    }

    match config.persist().await {
        Ok(()) => success!("Settings written to {}", Config::file_path().display()),
        Err(e) => error!("Cannot write settings: {}", e),
    }
}

async fn show() {
    match Config::load().await {
        Ok(config) => {
            info!("current token: {}", config.masked_token());
            info!("current directory: {}", config.download_dir.display());
        }
        Err(e) => warning!("{}", e),
    }
}
