mod inline;
mod json;
mod long;
mod oneline;
mod table;

use std::io;

use clap::ValueEnum;
use lsrs_fs::Entry;
use owo_colors::{OwoColorize, Style};

use crate::error::Result;
use crate::glyph::GlyphSet;

pub use inline::InlinePrinter;
pub use json::{JsonEntry, JsonKind, JsonPrinter};
pub use long::LongPrinter;
pub use oneline::OneLinePrinter;
pub use table::TablePrinter;

/// Which renderer a listing goes through. Exactly one per invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Entries side by side.
    #[default]
    Default,
    /// One entry per line.
    OneLine,
    /// `ls -l` style detail lines.
    Long,
    /// Bordered table with a summary row.
    Table,
    /// Pretty-printed JSON array for machine consumption.
    Json,
}

impl RenderMode {
    /// Resolve the output flags into one mode. Precedence, highest first:
    /// json, table, long, oneline.
    pub fn select(json: bool, table: bool, long: bool, oneline: bool) -> Self {
        if json {
            RenderMode::Json
        } else if table {
            RenderMode::Table
        } else if long {
            RenderMode::Long
        } else if oneline {
            RenderMode::OneLine
        } else {
            RenderMode::Default
        }
    }
}

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

/// Everything a printer needs to know, fixed before any output happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    pub mode: RenderMode,
    pub use_color: bool,
    pub glyphs: GlyphSet,
    /// Terminal width in columns, if output goes to a terminal.
    pub width: Option<usize>,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::Default,
            use_color: false,
            glyphs: GlyphSet::Nerd,
            width: None,
        }
    }
}

/// Renders an already filtered and sorted listing.
pub trait EntryPrinter {
    fn print(&mut self, entries: &[Entry]) -> Result<()>;
}

/// Create the printer selected by `cfg`, writing to stdout.
pub fn make_printer(cfg: PrinterConfig) -> Box<dyn EntryPrinter> {
    let out = io::stdout().lock();
    match cfg.mode {
        RenderMode::Default => Box::new(InlinePrinter::new(out, cfg)),
        RenderMode::OneLine => Box::new(OneLinePrinter::new(out, cfg)),
        RenderMode::Long => Box::new(LongPrinter::new(out, cfg)),
        RenderMode::Table => Box::new(TablePrinter::new(out, cfg)),
        RenderMode::Json => Box::new(JsonPrinter::new(out, cfg)),
    }
}

fn dir_style() -> Style {
    Style::new().blue().bold()
}

/// Apply `style` only when color is on.
fn paint(text: &str, style: Style, enabled: bool) -> String {
    if enabled {
        text.style(style).to_string()
    } else {
        text.to_owned()
    }
}

/// `glyph name`, or just the name when the glyph set is empty.
fn label(glyphs: GlyphSet, entry: &Entry) -> String {
    match glyphs.glyph_for(&entry.name, entry.is_dir()) {
        "" => entry.name.clone(),
        glyph => format!("{glyph} {}", entry.name),
    }
}

/// Entry label with directories highlighted.
fn styled_label(cfg: &PrinterConfig, entry: &Entry) -> String {
    let text = label(cfg.glyphs, entry);
    if entry.is_dir() {
        paint(&text, dir_style(), cfg.use_color)
    } else {
        text
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
