use std::{fmt::Display, io::Write};

use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
    presets::UTF8_FULL,
};
use lsrs_fs::Entry;
use lsrs_runtime::{TABLE_MAX_COLUMN_WIDTH, format_modified};

use super::{EntryPrinter, PrinterConfig, label};
use crate::error::Result;
use crate::format::format_size;

const HEADERS: [&str; 4] = ["Name", "Type", "Size", "Modified"];

/// Bordered grid with a header row and an entry-count summary row.
pub struct TablePrinter<W: Write> {
    out: W,
    cfg: PrinterConfig,
}

impl<W: Write> TablePrinter<W> {
    pub fn new(out: W, cfg: PrinterConfig) -> Self {
        Self { out, cfg }
    }

    fn build(&self, entries: &[Entry]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        // Styling is decided by our config, not by comfy-table's own tty check.
        if self.cfg.use_color {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        if let Some(width) = self.cfg.width {
            table.set_width(u16::try_from(width).unwrap_or(u16::MAX));
        }

        table.set_header(
            HEADERS
                .iter()
                .map(|h| Cell::new(h).fg(Color::Green).add_attribute(Attribute::Bold)),
        );

        for entry in entries {
            let size = if entry.is_dir() {
                "-".to_owned()
            } else {
                format_size(entry.size_bytes)
            };

            table.add_row(vec![
                Cell::new(label(self.cfg.glyphs, entry)).fg(Color::Magenta),
                Cell::new(entry.kind.label()),
                Cell::new(size).fg(Color::Yellow),
                Cell::new(format_modified(entry.modified)).fg(Color::Red),
            ]);
        }

        table.add_row(vec![
            Cell::new(""),
            summary_cell("Total Files"),
            summary_cell(entries.len()),
            Cell::new(""),
        ]);

        table.set_constraints(
            (0..HEADERS.len())
                .map(|_| ColumnConstraint::UpperBoundary(Width::Fixed(TABLE_MAX_COLUMN_WIDTH))),
        );

        table
    }
}

fn summary_cell<T: Display>(content: T) -> Cell {
    Cell::new(content)
        .fg(Color::Yellow)
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Right)
}

impl<W: Write> EntryPrinter for TablePrinter<W> {
    fn print(&mut self, entries: &[Entry]) -> Result<()> {
        let table = self.build(entries);
        writeln!(self.out, "{table}")?;
        self.out.flush()?;
        Ok(())
    }
}
