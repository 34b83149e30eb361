//! Metadata spreadsheet rows
//!
//! One CSV row per patent, read through the header so column order does
//! not matter. Values are trimmed; a record is never modified after reading.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Columns every metadata file must declare
pub const REQUIRED_COLUMNS: &[&str] = &[
    "patent_number",
    "title",
    "date",
    "year",
    "large_category",
    "inventor",
    "city",
    "state",
    "country",
    "uspc",
    "patent_url",
    "application_number",
    "pages",
    "scan_date",
];

/// Columns that may name the local asset, in order of preference
pub const ASSET_COLUMNS: &[&str] = &["image_url", "filename"];

/// Problems with a metadata file or with a single row
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("cannot read metadata {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("metadata header is missing column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("row has no value for required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' has an invalid value '{value}': {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// Column name → value mapping for one row
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    fields: BTreeMap<String, String>,
}

impl MetadataRecord {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    /// Value of `column`, or `""` when the column is absent
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    /// Value of `column` if present and non-empty
    pub fn non_empty(&self, column: &str) -> Option<&str> {
        Some(self.get(column)).filter(|v| !v.is_empty())
    }

    /// Value of a required column; empty counts as missing
    pub fn require(&self, column: &'static str) -> Result<&str, RecordError> {
        self.non_empty(column).ok_or(RecordError::MissingField(column))
    }

    /// Title for narration, falling back to the patent number
    pub fn display_title(&self) -> &str {
        self.non_empty("title")
            .or_else(|| self.non_empty("patent_number"))
            .unwrap_or("(untitled)")
    }

    /// File name of the local asset
    ///
    /// Taken from `image_url` or `filename` (last path segment only), else
    /// derived as `<patent_number lowercased>.pdf`.
    pub fn asset_filename(&self) -> Option<String> {
        let named = ASSET_COLUMNS
            .iter()
            .filter_map(|col| self.non_empty(col))
            .filter_map(|value| {
                value
                    .trim_end_matches(is_separator)
                    .rsplit(is_separator)
                    .next()
                    .filter(|name| !name.is_empty())
            })
            .next();
        match named {
            Some(name) => Some(name.to_string()),
            None => self
                .non_empty("patent_number")
                .map(|n| format!("{}.pdf", n.to_lowercase())),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MetadataRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Read every row of the metadata file at `path`.
pub fn read_metadata_file(path: &Path) -> Result<Vec<MetadataRecord>, RecordError> {
    let file = std::fs::File::open(path).map_err(|e| RecordError::Read {
        path: path.display().to_string(),
        source: e.into(),
    })?;
    read_metadata(file).map_err(|e| match e {
        RecordError::Read { source, .. } => RecordError::Read {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })
}

/// Read headered CSV rows from `reader`, checking the header first.
pub fn read_metadata<R: Read>(reader: R) -> Result<Vec<MetadataRecord>, RecordError> {
    let read_err = |source: csv::Error| RecordError::Read {
        path: "<input>".to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(read_err)?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(RecordError::MissingColumns(missing));
    }

    let mut records: Vec<MetadataRecord> = Vec::new();
    for result in reader.records() {
        let row = result.map_err(read_err)?;
        records.push(
            headers
                .iter()
                .zip(row.iter())
                .map(|(h, v)| (h.to_string(), v.to_string()))
                .collect(),
        );
    }
    Ok(records)
}
