use std::time::Duration;

use clap::{Parser, Subcommand};
use log::info;
use ubeat::clients::errors::{Error, Result};
use ubeat::clients::{ArtistId, ArtistRecord};
use ubeat::config::ConfigBuilder;

#[derive(Parser)]
#[command(name = "ubeat")]
#[command(version, about = "Look up artists in the ubeat music catalog", long_about = None)]
struct Cli {
    /// Catalog base URL, overrides UBEAT_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds, overrides UBEAT_TIMEOUT_SECS
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the first catalog record for an artist
    Artist {
        /// Artist identifier, sent verbatim
        id: String,

        /// Print only this field of the record
        #[arg(long)]
        field: Option<String>,
    },
}

pub async fn run() -> Result<()> {
    let output = execute(Cli::parse()).await?;
    println!("{output}");
    Ok(())
}

async fn execute(cli: Cli) -> Result<String> {
    let mut builder = ConfigBuilder::new();
    if let Some(base_url) = cli.base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(secs) = cli.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    match cli.command {
        Commands::Artist { id, field } => show_artist(builder, id.into(), field.as_deref()).await,
    }
}

async fn show_artist(builder: ConfigBuilder, id: ArtistId, field: Option<&str>) -> Result<String> {
    let config = builder.build()?;
    info!("Looking up artist {id} ...");
    let record = config.catalog.get_artist(&id).await?;
    render_record(&id, &record, field)
}

// Pretty JSON of the whole record, or of a single field's value
fn render_record(id: &ArtistId, record: &ArtistRecord, field: Option<&str>) -> Result<String> {
    let output = match field {
        Some(name) => {
            let value = record.get(name).ok_or_else(|| Error::MissingField {
                artist: id.to_string(),
                field: name.to_string(),
            })?;
            serde_json::to_string_pretty(value)?
        }
        None => serde_json::to_string_pretty(record)?,
    };
    Ok(output)
}
