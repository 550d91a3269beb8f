//! # CLI Module
//!
//! User-facing command implementations for the downloader. Each command
//! loads the persisted configuration, builds the pipeline and reports
//! progress and failures with the crate's colored status macros:
//!
//! - [`album`] - Download a whole album (or list its tracks with `--list`)
//! - [`track`] - Download a single track
//! - [`settings`] - Show or rewrite the stored token and download directory
//!
//! Failures on individual tracks never abort an album batch; a failed
//! album/track lookup aborts only the request it belongs to.

mod album;
mod settings;
mod track;

pub use album::album;
pub use settings::settings;
pub use track::track;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{config::Config, error};

/// Loads the configuration or terminates with a hint on how to create it.
pub(crate) async fn load_config() -> Config {
    match Config::load().await {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    }
}

/// Spinner used while waiting on catalog metadata.
pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
