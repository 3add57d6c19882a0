//! typed-props command-line loader.
//!
//! Loads the given sources in order (later ones override earlier ones) and
//! prints the resulting properties to stdout.
//!
//! ```text
//! typed-props resource:jdbc.properties https://config.local/app.json
//! typed-props --config typed-props.toml --format json --require-valid file:///etc/app/aws.json
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use typed_props::config::{load_config, PropsConfig};
use typed_props::observability::logging::init_logging;
use typed_props::sink::{print_json, print_properties};
use typed_props::PropertiesLoader;

#[derive(Parser)]
#[command(name = "typed-props")]
#[command(about = "Load typed configuration properties from files, HTTP endpoints and bundled resources", long_about = None)]
struct Cli {
    /// Source locations (file://, http(s)://, resource:), later override earlier
    #[arg(required_unless_present = "show_registry")]
    sources: Vec<String>,

    /// Loader configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level, overrides the configuration file
    #[arg(short, long)]
    log_level: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Exit with status 2 when any known property is missing
    #[arg(long)]
    require_valid: bool,

    /// Print the type registry and exit
    #[arg(long)]
    show_registry: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One `key, type, value` line per property
    Text,
    /// A single JSON object
    Json,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "typed-props failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PropsConfig::default(),
    };
    init_logging(
        cli.log_level
            .as_deref()
            .unwrap_or(&config.observability.log_level),
    );

    tracing::info!("typed-props v{} starting", env!("CARGO_PKG_VERSION"));

    let loader = PropertiesLoader::from_config(&config)?;
    if cli.show_registry {
        print!("{}", loader.engine().registry());
        return Ok(ExitCode::SUCCESS);
    }

    let properties = loader.load(&cli.sources)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => print_properties(&properties, &mut out)?,
        OutputFormat::Json => print_json(&properties, &mut out)?,
    }

    if cli.require_valid && !properties.is_valid() {
        let missing: Vec<String> = properties
            .missing_keys()
            .iter()
            .map(|k| k.to_string())
            .collect();
        eprintln!("Missing properties: {}", missing.join(", "));
        return Ok(ExitCode::from(2));
    }

    Ok(ExitCode::SUCCESS)
}
