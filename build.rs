//! Build script for the Yandex Music downloader CLI.
//!
//! Copies the configuration template (`config.env.example`) into the user's
//! local data directory during the build, so a ready-to-edit example sits next
//! to the place where `ymdl` expects its real configuration file.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=config.env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template_path = manifest_dir.join("config.env.example");

    // Compute target dir (the local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("ymdl");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if template_path.is_file() {
        let contents = fs::read_to_string(&template_path)?;
        fs::write(out_dir.join("config.env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=config.env.example not found at {}",
            template_path.display()
        );
    }

    Ok(())
}
