//! ansiart CLI - Print images to the terminal in 256 colors

use ansiart::config::{Config, OutputTarget};
use ansiart::{bench, source, AnsiArtError, Converter, ImageSource};
use clap::Parser;
use rayon::prelude::*;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ansiart", version, about = "Print images as ANSI 256-color art")]
struct Args {
    /// Input image files ("-" reads stdin and requires --mime-type)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Output width in characters (default: 75% of the terminal width)
    #[arg(short, long)]
    width: Option<u32>,
    /// Color match early-exit distance; higher is faster but less faithful
    #[arg(short, long)]
    min_dist: Option<f64>,
    /// Read inputs as raw bytes of this MIME type, e.g. image/png
    #[arg(long)]
    mime_type: Option<String>,
    /// Stream to print to
    #[arg(short, long, value_enum)]
    output: Option<OutputTarget>,
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Time this many conversions of each input and print a JSON report
    #[arg(long, value_name = "RUNS")]
    bench: Option<usize>,
}

fn main() -> Result<(), AnsiArtError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let (options, target) = config.resolve(args.width, args.min_dist, args.output);
    log::info!("converting {} input(s) with {options:?}", args.inputs.len());

    let sources = args
        .inputs
        .iter()
        .map(|input| open_source(input, args.mime_type.as_deref()))
        .collect::<Result<Vec<_>, _>>()?;
    let converter = Converter::with_options(&options);

    if let Some(runs) = args.bench {
        for (input, source) in args.inputs.iter().zip(&sources) {
            let (report, art) = bench::run(runs, || {
                source::decode(source).map(|image| converter.convert(&image))
            })?;
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| AnsiArtError::Io(e.into()))?;
            println!("{}: {json}", input.display());
            if let Some(art) = art {
                print(target, &art)?;
            }
        }
        return Ok(());
    }

    let rendered = sources
        .par_iter()
        .map(|source| source::decode(source).map(|image| converter.convert(&image)))
        .collect::<Result<Vec<_>, _>>()?;

    for art in rendered {
        print(target, &art)?;
    }
    Ok(())
}

fn print(target: OutputTarget, art: &str) -> std::io::Result<()> {
    match target {
        OutputTarget::Stdout => write_art(std::io::stdout().lock(), art),
        OutputTarget::Stderr => write_art(std::io::stderr().lock(), art),
    }
}

fn write_art(mut out: impl Write, art: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{art}")?;
    out.flush()
}

fn open_source(input: &Path, mime_type: Option<&str>) -> Result<ImageSource, AnsiArtError> {
    let Some(mime_type) = mime_type else {
        if input.as_os_str() == "-" {
            return Err(AnsiArtError::MissingFormatHint);
        }
        return Ok(ImageSource::Path(input.to_path_buf()));
    };

    let data = if input.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        std::fs::read(input)?
    };
    Ok(ImageSource::bytes(data, mime_type))
}
