use std::io::Write;

use lsrs_fs::{Entry, EntryKind};
use lsrs_runtime::format_modified;
use serde::{Deserialize, Serialize};

use super::{EntryPrinter, PrinterConfig};
use crate::error::Result;

/// Entry kind as it appears in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JsonKind {
    File,
    Dir,
}

impl From<EntryKind> for JsonKind {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::File => JsonKind::File,
            EntryKind::Directory => JsonKind::Dir,
        }
    }
}

/// Stable JSON schema for one entry. Field names are part of the CLI's
/// contract. Ownership and mode are not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: JsonKind,
    pub bytes: u64,
    pub modified: String,
}

impl From<&Entry> for JsonEntry {
    fn from(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            kind: entry.kind.into(),
            bytes: entry.size_bytes,
            modified: format_modified(entry.modified),
        }
    }
}

/// Pretty-printed JSON array of the listing, in display order.
pub struct JsonPrinter<W: Write> {
    out: W,
}

impl<W: Write> JsonPrinter<W> {
    pub fn new(out: W, _cfg: PrinterConfig) -> Self {
        Self { out }
    }
}

impl<W: Write> EntryPrinter for JsonPrinter<W> {
    fn print(&mut self, entries: &[Entry]) -> Result<()> {
        let rows: Vec<JsonEntry> = entries.iter().map(JsonEntry::from).collect();

        // Encode fully first so a write failure is not reported as an
        // encoding failure.
        let text = serde_json::to_string_pretty(&rows)?;
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }
}
