use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ibc_tx_display::config::AppConfig;
use ibc_tx_display::display::{RowDisplay, RowFormatter};
use ibc_tx_display::domain::{ChainRegistry, NetworkContext, TransactionRecord};
use ibc_tx_display::format::millis_to_secs;
use ibc_tx_display::format_address_hex;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render Cardano IBC transfer records the way the explorer table shows them
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Network to render addresses for (mainnet, preprod, preview, local)
    #[arg(short, long, global = true)]
    network: Option<NetworkContext>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every record in a JSON array file
    Render {
        /// File holding a JSON array of transfer records
        records: PathBuf,
        /// Chain registry JSON file (overrides the configured one)
        #[arg(short, long)]
        registry: Option<PathBuf>,
        /// Minutes east of UTC to show timestamps in
        #[arg(long, allow_hyphen_values = true)]
        utc_offset: Option<i32>,
        /// Record timestamps are epoch milliseconds
        #[arg(long)]
        millis: bool,
        /// Show full date and time instead of time of day
        #[arg(long)]
        full_date: bool,
        /// Print each row as JSON
        #[arg(long)]
        json: bool,
    },
    /// Encode a hex payment credential as an address
    Address {
        /// Hex-encoded credential (28 bytes, or tag byte + 28 bytes)
        credential: String,
    },
    /// Show the effective configuration
    Config {
        /// Write the effective configuration back to disk
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ibc_tx_display=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load();
    if let Some(network) = cli.network {
        config.network = network;
    }

    match cli.command {
        Commands::Render {
            records,
            registry,
            utc_offset,
            millis,
            full_date,
            json,
        } => {
            if let Some(path) = registry {
                config.registry_path = Some(path);
            }
            if let Some(minutes) = utc_offset {
                config.utc_offset_minutes = minutes;
            }
            config.timestamps_in_millis |= millis;
            if full_date {
                config.time_only = false;
            }
            render(&config, &records, json)
        }
        Commands::Address { credential } => {
            let address = format_address_hex(&credential, config.network)
                .wrap_err_with(|| format!("Cannot encode credential '{credential}'"))?;
            println!("{address}");
            Ok(())
        }
        Commands::Config { save } => {
            let path = AppConfig::config_path()?;
            println!("Config file: {}", path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
            if save {
                config.save()?;
                println!("Saved to {}", path.display());
            }
            Ok(())
        }
    }
}

/// Load records and print one line per record.
fn render(config: &AppConfig, path: &Path, json: bool) -> Result<()> {
    let registry = match &config.registry_path {
        Some(registry_path) => ChainRegistry::from_file(registry_path)
            .wrap_err_with(|| format!("Cannot load registry {}", registry_path.display()))?,
        None => ChainRegistry::builtin().clone(),
    };

    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Cannot read records from {}", path.display()))?;
    let mut records: Vec<TransactionRecord> =
        serde_json::from_str(&content).map_err(|e| eyre!("Invalid records file: {e}"))?;

    if config.timestamps_in_millis {
        for record in &mut records {
            record.create_time = millis_to_secs(record.create_time);
            record.end_time = record.end_time.map(millis_to_secs);
        }
    }

    let formatter = RowFormatter::new(&registry, config.display_options()?);
    tracing::info!(
        "Rendering {} records for {} with {} known chains",
        records.len(),
        config.network,
        registry.len()
    );

    let mut failures = 0usize;
    for (record, outcome) in formatter.format_all(&records, config.network) {
        match outcome {
            Ok(row) if json => println!("{}", serde_json::to_string(&row)?),
            Ok(row) => println!("{}", table_line(&row)),
            Err(err) => {
                failures += 1;
                tracing::warn!("Record {} failed: {err}", record.from_tx_hash);
                println!("{}\t<error: {err}>", record.from_tx_hash);
            }
        }
    }

    if failures > 0 {
        tracing::warn!("{failures} of {} records could not be rendered", records.len());
    }
    Ok(())
}

fn table_line(row: &RowDisplay) -> String {
    let status = format!("{} ({})", row.status_label, row.status_tag);
    [
        row.from_hash_display.as_str(),
        row.from_address_display.as_str(),
        row.chain_display_name.as_str(),
        status.as_str(),
        row.to_address_display.as_str(),
        row.to_hash_display.as_str(),
        row.create_time_display.as_str(),
        row.end_time_display.as_str(),
    ]
    .join("\t")
}
