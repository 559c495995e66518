use std::io::Write;

use lsrs_fs::Entry;

use super::{EntryPrinter, PrinterConfig, label, styled_label};
use crate::{error::Result, glyph::GlyphSet};

const SEPARATOR: &str = "  ";

/// Without color or glyphs a directory would look like a file, so it gets a
/// trailing `/` instead.
fn needs_dir_marker(cfg: &PrinterConfig, entry: &Entry) -> bool {
    entry.is_dir() && !cfg.use_color && cfg.glyphs == GlyphSet::None
}

/// Entries side by side, wrapped to the terminal width when known.
pub struct InlinePrinter<W: Write> {
    out: W,
    cfg: PrinterConfig,
}

impl<W: Write> InlinePrinter<W> {
    pub fn new(out: W, cfg: PrinterConfig) -> Self {
        Self { out, cfg }
    }
}

impl<W: Write> EntryPrinter for InlinePrinter<W> {
    fn print(&mut self, entries: &[Entry]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut line_len = 0;
        for entry in entries {
            // Width is measured on the uncolored text.
            let marker = needs_dir_marker(&self.cfg, entry);
            let len = label(self.cfg.glyphs, entry).chars().count() + usize::from(marker);

            if line_len > 0 {
                if let Some(width) = self.cfg.width
                    && line_len + SEPARATOR.len() + len > width
                {
                    writeln!(self.out)?;
                    line_len = 0;
                } else {
                    write!(self.out, "{SEPARATOR}")?;
                    line_len += SEPARATOR.len();
                }
            }

            write!(self.out, "{}", styled_label(&self.cfg, entry))?;
            if marker {
                write!(self.out, "/")?;
            }
            line_len += len;
        }

        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
