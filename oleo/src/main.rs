use clap::Parser;
use oleo::filter::{ModeFilterOptions, ModeStrategy};
use oleo::{OilPaintConfig, default_output_path, oil_paint_file};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oleo")]
#[command(about = "Apply a digital oil-paint effect to an image")]
#[command(version)]
struct Cli {
    /// Input image (PNG, JPEG, PGM or PPM)
    input: PathBuf,

    /// Window size; an odd value from 3 to 11
    #[arg(short, long, default_value_t = oleo::filter::DEFAULT_WINDOW_SIZE)]
    window: i32,

    /// Output file path (default: <input>_oleo.png next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Filter on the current thread only
    #[arg(long)]
    sequential: bool,

    /// Rebuild every neighborhood histogram instead of sliding it
    #[arg(long)]
    reference: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG to control the log level, e.g. RUST_LOG=oleo_filter=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    let strategy = if cli.reference {
        ModeStrategy::Reference
    } else {
        ModeStrategy::Sliding
    };
    let options = ModeFilterOptions {
        strategy,
        parallel: !cli.sequential,
    };
    let config = OilPaintConfig::new(cli.window)?.with_options(options);

    let output = cli
        .output
        .unwrap_or_else(|| default_output_path(&cli.input));
    oil_paint_file(&cli.input, &output, &config)?;
    println!("{}", output.display());

    Ok(())
}
