use std::io::Write;

use lsrs_fs::Entry;

use super::{EntryPrinter, PrinterConfig, styled_label};
use crate::error::Result;

pub struct OneLinePrinter<W: Write> {
    out: W,
    cfg: PrinterConfig,
}

impl<W: Write> OneLinePrinter<W> {
    pub fn new(out: W, cfg: PrinterConfig) -> Self {
        Self { out, cfg }
    }
}

impl<W: Write> EntryPrinter for OneLinePrinter<W> {
    fn print(&mut self, entries: &[Entry]) -> Result<()> {
        for entry in entries {
            writeln!(self.out, "{}", styled_label(&self.cfg, entry))?;
        }
        self.out.flush()?;
        Ok(())
    }
}
