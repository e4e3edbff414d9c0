// src/bin/cli.rs
use color_eyre::eyre::Result;
use wordchart::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = cli::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
    Ok(())
}
