use std::io::Write;

use lsrs_fs::Entry;
use lsrs_runtime::{MODIFIED_WIDTH, OWNER_MIN_WIDTH, format_modified};
use owo_colors::Style;

use super::{EntryPrinter, PrinterConfig, paint, styled_label};
use crate::error::Result;
use crate::format::{format_permissions, format_size};

const LINKS_WIDTH: usize = 3;
const SIZE_WIDTH: usize = 5;

/// One detail line per entry:
/// `perms links owner group size modified glyph name`.
pub struct LongPrinter<W: Write> {
    out: W,
    cfg: PrinterConfig,
}

impl<W: Write> LongPrinter<W> {
    pub fn new(out: W, cfg: PrinterConfig) -> Self {
        Self { out, cfg }
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Widest value in a column, never narrower than `OWNER_MIN_WIDTH`.
fn column_width<'a>(values: impl Iterator<Item = Option<&'a str>>) -> usize {
    values
        .map(|v| or_dash(v).chars().count())
        .fold(OWNER_MIN_WIDTH, usize::max)
}

impl<W: Write> EntryPrinter for LongPrinter<W> {
    fn print(&mut self, entries: &[Entry]) -> Result<()> {
        let color = self.cfg.use_color;
        let owner_width = column_width(entries.iter().map(|e| e.owner.as_deref()));
        let group_width = column_width(entries.iter().map(|e| e.group.as_deref()));

        for entry in entries {
            let perms = format_permissions(entry.mode_or_default());
            let links = entry
                .link_count
                .map_or_else(|| "-".to_owned(), |n| n.to_string());
            let size = if entry.is_dir() {
                "-".to_owned()
            } else {
                format_size(entry.size_bytes)
            };
            let modified = format_modified(entry.modified);

            // Pad before painting so escape codes do not skew the columns.
            let owner = format!("{:<owner_width$}", or_dash(entry.owner.as_deref()));
            let group = format!("{:<group_width$}", or_dash(entry.group.as_deref()));
            let size = format!("{size:>SIZE_WIDTH$}");
            let modified = format!("{modified:<MODIFIED_WIDTH$}");

            writeln!(
                self.out,
                "{} {links:>LINKS_WIDTH$} {} {} {} {} {}",
                paint(&perms, Style::new().bold(), color),
                paint(&owner, Style::new().yellow(), color),
                paint(&group, Style::new().cyan(), color),
                paint(&size, Style::new().bright_yellow(), color),
                paint(&modified, Style::new().magenta(), color),
                styled_label(&self.cfg, entry),
            )?;
        }

        self.out.flush()?;
        Ok(())
    }
}
