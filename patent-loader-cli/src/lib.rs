//! Plant-patent batch loader library.
//!
//! The `pp-load` binary parses arguments, sets up tracing and calls
//! [`run`]. The pieces are public so a batch can also be driven from code:
//! read records with [`record::read_metadata_file`], then hand them to a
//! [`driver::BatchDriver`] bound to a `patent_fcrepo::FcrepoClient`.

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod load_log;
pub mod model;
pub mod output;
pub mod record;

use cli::Cli;
use config::LoaderConfig;
use driver::BatchDriver;
use error::{CliError, CliResult};
use load_log::LoadLog;
use output::Narrator;
use patent_fcrepo::FcrepoClient;
use std::io::Write;

/// Run one batch as described by the parsed command line.
///
/// Fatal only when the config, the asset directory or the metadata file is
/// unusable, the connection check fails, or the load log cannot be written.
pub async fn run(cli: Cli) -> CliResult<()> {
    let narrator = Narrator::new(cli.quiet);
    let config = LoaderConfig::load(&cli.config, cli.directory.as_deref())?;
    narrator.banner();

    if !config.asset_dir.is_dir() {
        return Err(CliError::Input(format!(
            "asset directory not found: {}",
            config.asset_dir.display()
        )));
    }
    let mut records = record::read_metadata_file(&config.metadata_file)
        .map_err(|e| CliError::Input(e.to_string()))?;
    narrator.scanning(&config.asset_dir, &config.metadata_file, records.len());
    if let Some(limit) = cli.limit {
        records.truncate(limit.get());
    }

    let client = FcrepoClient::new(&config.repository)?;

    if cli.dry_run {
        narrator.dry_run();
        let log = LoadLog::new(std::io::sink());
        let driver = BatchDriver::new(&client, &config.asset_dir, log, narrator).with_dry_run(true);
        return drive(driver, &records).await;
    }

    if !cli.skip_connection_check {
        client.check_connection().await.map_err(|e| {
            CliError::Remote(format!("cannot reach {}: {e}", client.base_url()))
        })?;
    }
    narrator.endpoint(client.base_url(), !cli.skip_connection_check);

    let log = LoadLog::open(&config.log_file)
        .map_err(|e| CliError::Log(format!("{}: {e}", config.log_file.display())))?;
    let driver = BatchDriver::new(&client, &config.asset_dir, log, narrator);
    drive(driver, &records).await
}

async fn drive<W: Write>(
    mut driver: BatchDriver<'_, W>,
    records: &[record::MetadataRecord],
) -> CliResult<()> {
    let summary = driver.run(records).await?;
    let narrator = driver.narrator();
    driver.finish()?;
    narrator.summary(&summary);
    Ok(())
}
