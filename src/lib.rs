//! Yandex Music Downloader CLI Library
//!
//! This library turns opaque album/track identifiers from the Yandex Music
//! catalog into playable, fully tagged MP3 files on local disk. It covers the
//! whole chain: catalog metadata lookup, the two-hop signed download
//! negotiation, resilient HTTP transport, content streaming, cover art
//! retrieval and ID3 tagging.
//!
//! # Modules
//!
//! - `catalog` - Catalog API client: albums, tracks, download resolution, covers
//! - `cli` - Command-line interface implementations
//! - `config` - Persisted configuration (OAuth token, download directory)
//! - `content` - Streaming download of resolved content URLs to disk
//! - `error` - Closed error taxonomy used across the pipeline
//! - `pipeline` - Orchestration of album and single-track downloads
//! - `tagging` - ID3 tag cascade and embedding
//! - `transport` - Shared HTTP client with retry/backoff and default headers
//! - `types` - Data structures and type definitions
//! - `utils` - Filename sanitization and small helpers
//!
//! # Example
//!
//! ```
//! use ymdl::{config::Config, pipeline::Downloader};
//!
//! #[tokio::main]
//! async fn main() -> ymdl::Res<()> {
//!     let config = Config::load().await?;
//!     let downloader = Downloader::new(&config)?;
//!     downloader.download_album("12345").await?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod pipeline;
pub mod tagging;
pub mod transport;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Carries the crate's closed [`error::Error`] taxonomy so callers can tell
/// transient transport failures apart from definitive absences and malformed
/// protocol responses.
pub type Res<T> = std::result::Result<T, error::Error>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Found album: {} - {}", artist, title);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Downloaded {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// that require immediate program termination, such as a missing credential.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used at the CLI boundary where
/// recovery is not possible.
///
/// # Example
///
/// ```
/// error!("No token configured. Run ymdl config --token <TOKEN>");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// recoverable issues, such as a single failed track inside an album batch.
///
/// # Example
///
/// ```
/// warning!("Cover download failed: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
