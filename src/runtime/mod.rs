use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::error::Result;

mod commands;
mod settings;

fn init_logging(verbose: bool, debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    let settings = settings::load_settings();

    match cli.command {
        Commands::BuildRiffChunk { metadata, out } => commands::build_riff_chunk(&metadata, &out),
        Commands::PatchWav {
            input,
            chunk,
            out,
            preserve_riff_size,
        } => commands::patch_wav(&input, &chunk, &out, preserve_riff_size),
        Commands::Decode { input, json } => commands::decode(&input, json),
        Commands::Embed {
            inputs,
            data,
            out_dir,
            dry_run,
            no_id3,
            no_riff,
        } => {
            let mut embed = settings.embed.clone();
            embed.write_id3 &= !no_id3;
            embed.write_riff_info &= !no_riff;
            commands::embed(
                &inputs,
                data.as_deref(),
                commands::EmbedArgs {
                    embed,
                    out_dir,
                    dry_run,
                },
                &settings.library,
            )
        }
        Commands::Inspect { input } => commands::inspect(&input),
    }
}
