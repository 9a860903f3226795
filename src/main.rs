use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use vpunits::convert::{
    parse_measurement_with_default, ConversionUnit, Converter, UnitFormatter, UnitProcessor,
};
use vpunits::settings::Config;

#[derive(Parser)]
#[command(name = "vpunits")]
#[command(about = "Convert CSS lengths between px, vw and vh", long_about = None)]
struct Cli {
    /// Config file (default: ./vpunits.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single length into px, vw and vh
    Convert {
        /// Length to convert (e.g. "192px", "12.5vw", "-4 vh")
        #[arg(allow_hyphen_values = true)]
        measurement: String,

        /// Unit for bare numbers
        #[arg(short, long, default_value = "px")]
        unit: ConversionUnit,

        /// Print the raw values as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        viewport: ViewportArgs,
    },

    /// Rewrite every px length in a stylesheet into vw or vh
    Rewrite {
        /// Stylesheet to read
        file: PathBuf,

        /// Target unit
        #[arg(short, long)]
        to: ConversionUnit,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        viewport: ViewportArgs,
    },

    /// List supported units
    Units,
}

#[derive(Args)]
struct ViewportArgs {
    /// Viewport width in px (overrides config)
    #[arg(long)]
    width: Option<f64>,

    /// Viewport height in px (overrides config)
    #[arg(long)]
    height: Option<f64>,

    /// Decimal places to keep (overrides config)
    #[arg(short, long)]
    precision: Option<u32>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Convert {
            measurement,
            unit,
            json,
            viewport,
        } => convert_measurement(config_path, &viewport, &measurement, unit, json),
        Commands::Rewrite {
            file,
            to,
            output,
            viewport,
        } => rewrite_stylesheet(config_path, &viewport, &file, to, output.as_deref()),
        Commands::Units => {
            list_units();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Resolve viewport and precision: CLI flag, then config file, then defaults
fn load_settings(
    config_path: Option<&Path>,
    args: &ViewportArgs,
) -> Result<(Converter, u32), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = Config::discover(config_path, &cwd)?
        .with_overrides(args.width, args.height, args.precision)
        .checked()?;

    let viewport = config.viewport()?;
    let precision = config.precision;

    log::debug!(
        "Viewport {}x{}, precision {}",
        viewport.width(),
        viewport.height(),
        precision
    );

    Ok((Converter::new(viewport), precision))
}

fn convert_measurement(
    config_path: Option<&Path>,
    args: &ViewportArgs,
    input: &str,
    default_unit: ConversionUnit,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (converter, precision) = load_settings(config_path, args)?;

    let measurement = parse_measurement_with_default(input, default_unit)?;
    let results = converter.convert_measurement(&measurement)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let formatter = UnitFormatter::new(precision);
    for (unit, _) in results.iter() {
        println!("{}: {}", unit, formatter.format_unit(&results, unit));
    }

    Ok(())
}

fn rewrite_stylesheet(
    config_path: Option<&Path>,
    args: &ViewportArgs,
    file: &Path,
    target: ConversionUnit,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (converter, precision) = load_settings(config_path, args)?;

    let content = std::fs::read_to_string(file)
        .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;

    let processor = UnitProcessor::new(converter, target, precision);
    let processed = processor.process_text(&content);

    log::info!(
        "Converted {} px values in {} to {}",
        processed.replacements,
        file.display(),
        target
    );

    if let Some(output_path) = output {
        std::fs::write(output_path, processed.text)?;
        eprintln!(
            "Wrote {} ({} replacements)",
            output_path.display(),
            processed.replacements
        );
    } else {
        print!("{}", processed.text);
    }

    Ok(())
}

fn list_units() {
    println!("Units:");
    for unit in ConversionUnit::ALL {
        println!("  {:<4}{}", unit.as_str(), unit.description());
    }
}
