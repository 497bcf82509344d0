//! CLI Adapter.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::app::api::{self, GenerateOptions};
use crate::domain::AppError;

const FOLDER_STRUCTURE: &str = "\
Generate Postman collections for every domain from property object fixtures.

Expected folder structure:

    test-properties/
    ├── domains.yml
    ├── mkcol.toml                  (optional)
    ├── Sales/
    │   ├── flat.json
    │   └── house.json
    ├── Lettings/
    │   └── studio.json
    └── generated-postman-collections/
        ├── dev.example.com - Let.json
        ├── dev.example.com - Sales.json
        └── localhost - Sales.json

* List every domain to target in domains.yml:

    - https://dev.example.com
    - https://stage.example.com
    - http://localhost

* Generated collections are written to \"generated-postman-collections\",
  which must already exist.
* The root folder can be named anything.";

#[derive(Parser)]
#[command(name = "mkcol")]
#[command(version)]
#[command(
    about = "Generate per-domain Postman collections from property objects",
    long_about = FOLDER_STRUCTURE
)]
struct Cli {
    /// Path to the property object location, e.g. /Users/me/test-properties
    property_object_location: PathBuf,

    /// Collection template overriding mkcol.toml and the bundled template
    #[arg(short, long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Pretty-print generated collections
    #[arg(short, long)]
    pretty: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_format);

    if let Err(e) = run_generate(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(cli: Cli) -> Result<(), AppError> {
    let options = GenerateOptions { template: cli.template, pretty: cli.pretty };
    let outcome = api::generate(&cli.property_object_location, options)?;

    for path in &outcome.written {
        println!("✅ Wrote {}", path.display());
    }
    println!(
        "✅ Generated {} collection(s) for {} domain(s) from {} sale(s) and {} letting(s)",
        outcome.written.len(),
        outcome.domain_count,
        outcome.sales_count,
        outcome.lettings_count
    );
    Ok(())
}

/// Initialize tracing on stderr. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8, format: LogFormat) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match verbose {
        0 => "mkcol=warn",
        1 => "mkcol=info",
        2 => "mkcol=debug",
        _ => "mkcol=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match format {
        LogFormat::Text => {
            fmt().with_env_filter(env_filter).with_target(false).with_writer(std::io::stderr).init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).with_writer(std::io::stderr).init();
        }
    }
}
