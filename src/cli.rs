use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "wavembed")]
#[command(about = "Embed RIFF INFO and ID3 metadata into WAV files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serialize a LIST/INFO chunk from metadata
    BuildRiffChunk {
        /// Metadata as inline JSON or a path to a JSON file
        #[arg(short, long)]
        metadata: String,

        /// Where to write the chunk bytes
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Splice a raw chunk into a WAV file right after its fmt chunk
    PatchWav {
        /// Input WAV file
        #[arg(short, long = "in")]
        input: PathBuf,

        /// Chunk bytes to insert
        #[arg(short, long)]
        chunk: PathBuf,

        /// Output WAV file (may equal the input)
        #[arg(short, long)]
        out: PathBuf,

        /// Leave the outer RIFF size field as it was
        #[arg(long)]
        preserve_riff_size: bool,
    },

    /// Decode a spreadsheet export and print its track records
    Decode {
        /// .csv or .xlsx export
        input: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Embed metadata into WAV files, optionally matched from a spreadsheet
    Embed {
        /// WAV files or directories to scan
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Spreadsheet export to match against the file names
        #[arg(long)]
        data: Option<PathBuf>,

        /// Write results into this directory instead of overwriting
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Build everything in memory but write nothing
        #[arg(long)]
        dry_run: bool,

        /// Skip the ID3 tag chunk
        #[arg(long)]
        no_id3: bool,

        /// Skip the LIST/INFO chunk
        #[arg(long)]
        no_riff: bool,
    },

    /// List the chunks of a WAV file and the tags found in it
    Inspect {
        /// WAV file
        input: PathBuf,
    },
}
