use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use ymdl::cli;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Download a full album with cover art and tags
    Album(AlbumOptions),

    /// Download a single track
    Track(TrackOptions),

    /// Show or update the stored token and download directory
    Config(ConfigOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumOptions {
    /// Album identifier from the catalog
    pub id: String,

    /// List the album's tracks without downloading anything
    #[clap(long)]
    pub list: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TrackOptions {
    /// Track identifier from the catalog
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ConfigOptions {
    /// Store a new OAuth token
    #[clap(long)]
    pub token: Option<String>,

    /// Store a new download directory
    #[clap(long)]
    pub directory: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Album(opt) => cli::album(opt.id, opt.list).await,
        Command::Track(opt) => cli::track(opt.id).await,
        Command::Config(opt) => cli::settings(opt.token, opt.directory).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
