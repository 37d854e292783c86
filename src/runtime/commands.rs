use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{EmbedSettings, LibrarySettings};
use crate::embed::{BatchReport, EmbedOptions, embed_inputs, persist_atomically};
use crate::error::Result;
use crate::metadata::TrackMetadata;
use crate::riff::{RiffSize, build_info_chunk, chunks, splice};
use crate::spreadsheet::parse_spreadsheet;
use crate::tags::{Id3TagWriter, TagWriter, read_tags};

pub struct EmbedArgs {
    pub embed: EmbedSettings,
    pub out_dir: Option<PathBuf>,
    pub dry_run: bool,
}

/// Inline JSON when it looks like an object, otherwise a file path.
fn read_metadata_arg(arg: &str) -> Result<TrackMetadata> {
    let json = if arg.trim_start().starts_with('{') {
        arg.to_string()
    } else {
        fs::read_to_string(arg)?
    };
    Ok(serde_json::from_str(&json)?)
}

pub fn build_riff_chunk(metadata: &str, out: &Path) -> Result<()> {
    let meta = read_metadata_arg(metadata)?;
    let chunk = build_info_chunk(&meta);
    persist_atomically(out, &chunk, |_| Ok(()))?;

    info!(path = %out.display(), bytes = chunk.len(), "wrote LIST/INFO chunk");
    println!("{} bytes -> {}", chunk.len(), out.display());
    Ok(())
}

pub fn patch_wav(input: &Path, chunk: &Path, out: &Path, preserve_riff_size: bool) -> Result<()> {
    let wav = fs::read(input)?;
    let chunk = fs::read(chunk)?;
    let riff_size = if preserve_riff_size {
        RiffSize::Preserve
    } else {
        RiffSize::Recompute
    };

    let patched = splice(&wav, &chunk, riff_size)?;
    persist_atomically(out, &patched, |_| Ok(()))?;

    info!(input = %input.display(), out = %out.display(), inserted = chunk.len(), "patched WAV");
    println!("{} -> {} ({} bytes)", input.display(), out.display(), patched.len());
    Ok(())
}

pub fn decode(input: &Path, json: bool) -> Result<()> {
    let decoded = parse_spreadsheet(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&decoded.records)?);
        return Ok(());
    }

    for (i, r) in decoded.records.iter().enumerate() {
        println!("Track #{}", i + 1);
        println!("  File Name From Data: {}", r.filename_from_data);
        println!("  Track Title: {}", r.track_title);
        println!("  Source Program: {}", r.source_program);
        println!("  BPM: {} | Key: {}", r.bpm, r.key);
        println!("  Writers: {}", none_if_empty(&r.composers()));
        println!("  Publishers: {}", none_if_empty(&r.publishers_display()));
    }
    println!(
        "{} tracks, {} rows skipped",
        decoded.records.len(),
        decoded.rejected
    );
    Ok(())
}

fn none_if_empty(s: &str) -> &str {
    if s.is_empty() { "None" } else { s }
}

pub fn embed(
    inputs: &[PathBuf],
    data: Option<&Path>,
    args: EmbedArgs,
    library: &LibrarySettings,
) -> Result<()> {
    let opts = EmbedOptions {
        out_dir: args.out_dir,
        dry_run: args.dry_run,
        ..EmbedOptions::from_settings(&args.embed)
    };
    let writer = args
        .embed
        .write_id3
        .then(|| Id3TagWriter::from_setting(args.embed.id3_version));
    let tags = writer.as_ref().map(|w| w as &dyn TagWriter);

    let report = embed_inputs(inputs, data, library, &opts, tags);
    print_report(&report);
    report.into_result()
}

fn print_report(report: &BatchReport) {
    if let Some(err) = report.data_error() {
        eprintln!("{err}");
    }
    if report.is_empty() {
        return;
    }
    for (path, err) in report.failures() {
        eprintln!("{}: {err}", path.display());
    }
    println!("{} of {} files embedded", report.succeeded(), report.len());
}

pub fn inspect(input: &Path) -> Result<()> {
    let wav = fs::read(input)?;

    println!("{}", input.display());
    for c in chunks(&wav)? {
        println!("  {:>10}  '{}'  {} bytes", c.offset, c.id_str(), c.size);
    }

    for tag in read_tags(input)? {
        println!("  [{}]", tag.kind);
        let fields = [
            ("title", &tag.title),
            ("artist", &tag.artist),
            ("album", &tag.album),
            ("comment", &tag.comment),
        ];
        for (name, value) in fields {
            if let Some(v) = value {
                println!("    {name}: {v}");
            }
        }
    }
    Ok(())
}
