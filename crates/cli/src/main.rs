//! CLI tool for extracting plain slide text from PPTX files.

use anyhow::{Context, Result};
use clap::Parser;
use slide_text_core::{looks_like_zip, ExtractedSlide};
use slide_text_pptx::SlideTextExtractor;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Extract the text of every slide in PowerPoint (.pptx) files.
#[derive(Parser, Debug)]
#[command(name = "slide-text")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input PowerPoint file(s) (.pptx)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: print to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit a JSON array of slides instead of plain text
    #[arg(short, long)]
    json: bool,

    /// Prefix each slide with a "Slide N:" header
    #[arg(short, long)]
    numbered: bool,

    /// Decode XML entity references (&amp; etc.) in slide text
    #[arg(long)]
    decode_entities: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let extractor = SlideTextExtractor::new().with_entity_decoding(args.decode_entities);
    let mut failures = 0;

    for input_path in &args.input {
        log::info!("Processing: {}", input_path.display());

        match process_file(input_path, &args, &extractor) {
            Ok(output) => match &args.output {
                Some(dir) => {
                    let output_path = get_output_path(input_path, dir, args.json)?;
                    write_output(&output_path, &output)?;
                    log::info!("Written to: {}", output_path.display());
                }
                None => print!("{}", output),
            },
            Err(e) => {
                failures += 1;
                eprintln!("Error processing {}: {:#}", input_path.display(), e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} file(s) failed", failures, args.input.len());
    }

    Ok(())
}

/// Process a single PowerPoint file.
fn process_file(input_path: &Path, args: &Args, extractor: &SlideTextExtractor) -> Result<String> {
    let data = std::fs::read(input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;

    if !looks_like_zip(&data) {
        log::warn!(
            "{} does not start with a ZIP header; legacy .ppt files are not supported",
            input_path.display()
        );
    }

    let slides = extractor.extract_slides(&data)?;
    log::debug!("Found {} slides in {}", slides.len(), input_path.display());

    if args.json {
        let mut json = serde_json::to_string_pretty(&slides).context("Failed to serialize slides")?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(format_plain(&slides, args.numbered))
    }
}

/// Render slides as plain text, one block per slide separated by blank lines.
fn format_plain(slides: &[ExtractedSlide], numbered: bool) -> String {
    if slides.is_empty() {
        return String::new();
    }

    let blocks: Vec<String> = slides
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            if numbered {
                format!("Slide {}:\n{}", i + 1, slide.text)
            } else {
                slide.text.clone()
            }
        })
        .collect();

    format!("{}\n", blocks.join("\n\n"))
}

/// Determine the output path for a processed file.
fn get_output_path(input_path: &Path, output_dir: &Path, json: bool) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let extension = if json { "json" } else { "txt" };

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    Ok(output_dir.join(format!("{}.{}", stem, extension)))
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
