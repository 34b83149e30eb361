//! Console narration on stdout
//!
//! Diagnostics go through `tracing` on stderr; this is the operator-facing
//! running commentary. `--quiet` keeps only the final summary.

use crate::driver::{BatchSummary, ItemOutcome};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use patent_fcrepo::Checksum;
use std::fmt::Display;
use std::path::Path;

const TITLE: &str = "| PLANT PATENTS BATCH LOADER |";

#[derive(Clone, Copy, Debug, Default)]
pub struct Narrator {
    quiet: bool,
}

impl Narrator {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn banner(&self) {
        if self.quiet {
            return;
        }
        let border = "-".repeat(TITLE.len());
        println!("\n{border}\n{}\n{border}", TITLE.bold());
    }

    pub fn scanning(&self, asset_dir: &Path, metadata_file: &Path, rows: usize) {
        if self.quiet {
            return;
        }
        println!("Scanning directory => {}", asset_dir.display());
        println!(
            "Found {} rows of data in {}.",
            rows.to_string().bold(),
            metadata_file.display()
        );
    }

    pub fn endpoint(&self, endpoint: &str, checked: bool) {
        if self.quiet {
            return;
        }
        println!("Ready to load to endpoint => {endpoint}");
        if checked {
            println!("Testing connection with provided credentials => {}", "ok".green());
        }
    }

    pub fn dry_run(&self) {
        if !self.quiet {
            println!("{}", "Dry run: nothing will be sent to the repository.".yellow());
        }
    }

    pub fn row(&self, row: usize, title: &str, file_name: &str) {
        if !self.quiet {
            println!("\n{}. {}: {}", row, title.bold(), file_name);
        }
    }

    pub fn local_path(&self, path: &Path, exists: bool) {
        if self.quiet {
            return;
        }
        if exists {
            println!("Local path: {} => file exists.", path.display());
        } else {
            println!(
                "Local path: {} => {}",
                path.display(),
                "cannot access file".red()
            );
        }
    }

    pub fn checksum(&self, checksum: &Checksum) {
        if !self.quiet {
            println!("SHA1 checksum: {checksum}");
        }
    }

    /// A step that produced a URI
    pub fn step(&self, label: &str, uri: &str) {
        if !self.quiet {
            println!("{label}... {} {uri}", "ok".green());
        }
    }

    pub fn step_failed(&self, label: &str, err: &dyn Display) {
        if !self.quiet {
            println!("{label}... {} {err}", "failed:".red().bold());
        }
    }

    pub fn payload(&self, label: &str, body: &str) {
        if !self.quiet {
            println!("{}\n{}", label.cyan(), body.trim_end());
        }
    }

    pub fn outcome(&self, outcome: &ItemOutcome) {
        if self.quiet {
            return;
        }
        match outcome {
            ItemOutcome::Loaded(_) => println!("{}", "Transaction complete!".green()),
            ItemOutcome::Checked => println!("{}", "Checked.".green()),
            ItemOutcome::Skipped { reason } => {
                println!("{} {reason}", "Skipped:".yellow().bold())
            }
            ItemOutcome::Failed { reason } => println!("{} {reason}", "Failed:".red().bold()),
        }
    }

    pub fn summary(&self, summary: &BatchSummary) {
        if !self.quiet && !summary.items.is_empty() {
            println!("\n{}", summary_table(summary));
        }
        println!(
            "\n{} loaded, {} checked, {} skipped, {} failed",
            summary.loaded.to_string().green(),
            summary.checked,
            summary.skipped.to_string().yellow(),
            summary.failed.to_string().red()
        );
    }
}

/// One row per item: number, title, outcome, item URI or reason
pub fn summary_table(summary: &BatchSummary) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "title", "outcome", "detail"]);
    for report in &summary.items {
        let (label, detail) = match &report.outcome {
            ItemOutcome::Loaded(entry) => ("loaded", entry.item_uri.as_str()),
            ItemOutcome::Checked => ("checked", ""),
            ItemOutcome::Skipped { reason } => ("skipped", reason.as_str()),
            ItemOutcome::Failed { reason } => ("failed", reason.as_str()),
        };
        table.add_row(vec![
            report.row.to_string(),
            report.title.clone(),
            label.to_string(),
            detail.to_string(),
        ]);
    }
    table
}
