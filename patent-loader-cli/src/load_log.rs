//! Append-only record of committed items
//!
//! One tab-separated line per item: `title`, item URI, file URI.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// What gets written for one committed item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadLogEntry {
    pub title: String,
    pub item_uri: String,
    pub file_uri: String,
}

impl LoadLogEntry {
    /// The log line, including its trailing newline
    pub fn to_line(&self) -> String {
        format!(
            "{}\t{}\t{}\n",
            sanitize(&self.title),
            sanitize(&self.item_uri),
            sanitize(&self.file_uri)
        )
    }
}

/// Tabs and line breaks inside a field would break the line format.
fn sanitize(field: &str) -> String {
    field
        .chars()
        .map(|c| if matches!(c, '\t' | '\n' | '\r') { ' ' } else { c })
        .collect()
}

/// Single writer held for the whole batch
pub struct LoadLog<W: Write> {
    writer: W,
    entries: usize,
}

impl LoadLog<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> LoadLog<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, entries: 0 }
    }

    /// Write one entry and flush it.
    pub fn append(&mut self, entry: &LoadLogEntry) -> io::Result<()> {
        self.writer.write_all(entry.to_line().as_bytes())?;
        self.writer.flush()?;
        self.entries += 1;
        Ok(())
    }

    /// Entries written so far
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Flush and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(title: &str) -> LoadLogEntry {
        LoadLogEntry {
            title: title.to_string(),
            item_uri: "http://localhost:8080/rest/i1".to_string(),
            file_uri: "http://localhost:8080/rest/f1".to_string(),
        }
    }

    #[test]
    fn test_line_format() {
        assert_eq!(
            entry("Rose plant").to_line(),
            "Rose plant\thttp://localhost:8080/rest/i1\thttp://localhost:8080/rest/f1\n"
        );
    }

    #[test]
    fn test_fields_are_sanitized() {
        let line = entry("Rose\tplant\nvariety").to_line();
        assert_eq!(line.matches('\t').count(), 2);
        assert!(line.starts_with("Rose plant variety\t"));
    }

    #[test]
    fn test_append_in_memory() {
        let mut log = LoadLog::new(Vec::new());
        assert!(log.is_empty());
        log.append(&entry("A")).unwrap();
        log.append(&entry("B")).unwrap();
        assert_eq!(log.len(), 2);

        let out = String::from_utf8(log.finish().unwrap()).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.lines().nth(1).unwrap().starts_with("B\t"));
    }

    #[test]
    fn test_open_appends_to_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("load.log");
        std::fs::write(&path, "earlier\tx\ty\n").unwrap();

        let mut log = LoadLog::open(&path).unwrap();
        log.append(&entry("Rose plant")).unwrap();
        drop(log);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("earlier\t"));
    }
}
