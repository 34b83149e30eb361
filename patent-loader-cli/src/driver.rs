//! Batch driver: one transaction per metadata row
//!
//! Per row, in order:
//!
//! 1. resolve the asset path; a missing file skips the row before any
//!    request is made
//! 2. checksum the asset and build the item and file records
//! 3. open a transaction (failure skips the row; nothing to roll back)
//! 4. create, upload, link, describe; any failure rolls back
//! 5. commit; a rejected commit rolls back
//! 6. append the load-log entry with the permanent URIs
//!
//! Row failures never stop the batch. Only a load-log write error does.

use crate::error::{CliError, CliResult};
use crate::load_log::{LoadLog, LoadLogEntry};
use crate::model::{PatentFile, PatentItem};
use crate::output::Narrator;
use crate::record::MetadataRecord;
use patent_fcrepo::{sha1_file, FcrepoClient, RepositorySync, Transaction};
use patent_graph_format::GraphBuildable;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// What happened to one row
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Committed and logged
    Loaded(LoadLogEntry),
    /// Dry run: asset found and payloads built
    Checked,
    /// Not attempted against the repository
    Skipped { reason: String },
    /// Attempted and rolled back (or never opened)
    Failed { reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemReport {
    /// 1-based row number in the metadata file
    pub row: usize,
    pub title: String,
    pub outcome: ItemOutcome,
}

/// Tallies plus every row's report, in input order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub loaded: usize,
    pub checked: usize,
    pub skipped: usize,
    pub failed: usize,
    pub items: Vec<ItemReport>,
}

impl BatchSummary {
    pub fn record(&mut self, report: ItemReport) {
        match report.outcome {
            ItemOutcome::Loaded(_) => self.loaded += 1,
            ItemOutcome::Checked => self.checked += 1,
            ItemOutcome::Skipped { .. } => self.skipped += 1,
            ItemOutcome::Failed { .. } => self.failed += 1,
        }
        self.items.push(report);
    }

    /// Log entries written during the batch
    pub fn entries(&self) -> impl Iterator<Item = &LoadLogEntry> {
        self.items.iter().filter_map(|r| match &r.outcome {
            ItemOutcome::Loaded(entry) => Some(entry),
            _ => None,
        })
    }
}

pub struct BatchDriver<'a, W: Write> {
    client: &'a FcrepoClient,
    asset_dir: PathBuf,
    log: LoadLog<W>,
    narrator: Narrator,
    dry_run: bool,
}

impl<'a, W: Write> BatchDriver<'a, W> {
    pub fn new(
        client: &'a FcrepoClient,
        asset_dir: impl Into<PathBuf>,
        log: LoadLog<W>,
        narrator: Narrator,
    ) -> Self {
        Self {
            client,
            asset_dir: asset_dir.into(),
            log,
            narrator,
            dry_run: false,
        }
    }

    /// Build payloads only; no requests are sent.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Process every record in order.
    pub async fn run(&mut self, records: &[MetadataRecord]) -> CliResult<BatchSummary> {
        let mut summary = BatchSummary::default();
        for (i, record) in records.iter().enumerate() {
            let row = i + 1;
            let outcome = self.load_item(row, record).await?;
            self.narrator.outcome(&outcome);
            summary.record(ItemReport {
                row,
                title: record.display_title().to_string(),
                outcome,
            });
        }
        info!(
            loaded = summary.loaded,
            skipped = summary.skipped,
            failed = summary.failed,
            "batch finished"
        );
        Ok(summary)
    }

    /// Load one record inside its own transaction.
    pub async fn load_item(
        &mut self,
        row: usize,
        record: &MetadataRecord,
    ) -> CliResult<ItemOutcome> {
        let title = record.display_title();
        let Some(file_name) = record.asset_filename() else {
            warn!(row, "no asset filename for row");
            return Ok(skipped("no asset filename or patent number"));
        };
        self.narrator.row(row, title, &file_name);

        let path = self.asset_dir.join(&file_name);
        if !path.is_file() {
            self.narrator.local_path(&path, false);
            warn!(row, path = %path.display(), "asset missing, row skipped");
            return Ok(skipped(format!("cannot access file {}", path.display())));
        }
        self.narrator.local_path(&path, true);

        let checksum = match sha1_file(&path) {
            Ok(checksum) => checksum,
            Err(e) => {
                warn!(row, error = %e, "checksum failed, row skipped");
                return Ok(skipped(e));
            }
        };
        self.narrator.checksum(&checksum);

        let records = PatentItem::from_record(record).and_then(|item| {
            PatentFile::from_record(record).map(|file| (item, file))
        });
        let (item, file) = match records {
            Ok(pair) => pair,
            Err(e) => {
                warn!(row, error = %e, "invalid metadata, row skipped");
                return Ok(skipped(e));
            }
        };

        if self.dry_run {
            self.narrator.payload("Item payload:", &item.to_create_payload());
            self.narrator.payload("File payload:", &file.to_create_payload());
            return Ok(ItemOutcome::Checked);
        }

        let mut tx = match Transaction::begin(self.client).await {
            Ok(tx) => tx,
            Err(e) => {
                self.narrator.step_failed("Opening transaction", &e);
                return Ok(failed(e));
            }
        };
        self.narrator.step("Opening transaction", tx.location());

        let result = RepositorySync::new(&tx)
            .run(&item, &file, &path, &checksum)
            .await;
        let synced = match result {
            Ok(synced) => synced,
            Err(e) => {
                self.narrator.step_failed("Syncing resources", &e);
                tx.rollback().await;
                return Ok(failed(e));
            }
        };
        self.narrator.step("Creating RDF resource", &synced.item.uri);
        self.narrator.step("Creating binary resource", &synced.file.uri);
        self.narrator.step("Updating file metadata", &synced.file.metadata_uri());

        if let Err(e) = tx.commit().await {
            self.narrator.step_failed("Committing transaction", &e);
            tx.rollback().await;
            return Ok(failed(e));
        }

        let entry = LoadLogEntry {
            title: item.title.clone(),
            item_uri: tx.resolve(&synced.item.uri),
            file_uri: tx.resolve(&synced.file.uri),
        };
        self.log
            .append(&entry)
            .map_err(|e| CliError::Log(e.to_string()))?;
        info!(item = %entry.item_uri, file = %entry.file_uri, "item loaded");
        Ok(ItemOutcome::Loaded(entry))
    }

    pub fn narrator(&self) -> Narrator {
        self.narrator
    }

    /// Flush the load log and hand it back.
    pub fn finish(self) -> CliResult<W> {
        self.log.finish().map_err(|e| CliError::Log(e.to_string()))
    }
}

fn skipped(reason: impl ToString) -> ItemOutcome {
    ItemOutcome::Skipped {
        reason: reason.to_string(),
    }
}

fn failed(reason: impl ToString) -> ItemOutcome {
    ItemOutcome::Failed {
        reason: reason.to_string(),
    }
}
