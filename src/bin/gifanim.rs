use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

/// Apply animated effects to an image and save the result as a GIF (or numbered frames).
#[derive(Parser, Debug)]
#[command(name = "gifanim", version)]
struct Cli {
    /// Path to the input image (PNG recommended).
    input: PathBuf,

    /// Output path. `.gif` writes one animation; any other extension writes `{base}_{i}{ext}`.
    output: PathBuf,

    /// Effect records as JSON, e.g. '{"effect": "jitter", "params": {"frames": 10, "max_shift": 5}}'.
    #[arg(long, num_args = 1..)]
    params: Vec<String>,

    /// JSON file holding an array of effect records, applied before any `--params`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Spread per-frame work over a thread pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Fail instead of replacing existing output files.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,

    /// Log pipeline stages to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let mut specs = Vec::new();
    if let Some(path) = &cli.config {
        specs.extend(
            gifanim::EffectSpec::list_from_path(path)
                .with_context(|| format!("load effect config '{}'", path.display()))?,
        );
    }
    for raw in &cli.params {
        specs.push(gifanim::EffectSpec::from_json_str(raw).context("parse --params")?);
    }

    let effects = gifanim::build_effects(&specs)?;

    let opts = gifanim::GenerateOpts {
        seed: cli.seed,
        parallel: cli.parallel,
        threads: cli.threads,
        overwrite: !cli.no_overwrite,
    };

    let out = gifanim::generate_from_path(&cli.input, &effects, &cli.output, &opts)
        .with_context(|| format!("animate '{}'", cli.input.display()))?;

    match out.mode {
        gifanim::OutputMode::AnimatedGif => eprintln!("wrote {}", cli.output.display()),
        gifanim::OutputMode::FrameFiles => {
            for p in &out.paths {
                eprintln!("wrote {}", p.display());
            }
        }
    }
    Ok(())
}
