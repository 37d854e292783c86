mod cli;
mod config;
mod embed;
mod error;
mod library;
mod metadata;
mod riff;
mod runtime;
mod spreadsheet;
mod tags;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()?;
    Ok(())
}
