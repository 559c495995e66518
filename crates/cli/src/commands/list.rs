use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Args;
use log::debug;
use lsrs_fs::{load_dir_default, prepare};
use lsrs_runtime::{PROGRAM_NAME, color_disabled_by_env, expand_tilde};
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::error::{Error, Result};
use crate::glyph::GlyphSet;
use crate::printer::{ColorChoice, PrinterConfig, RenderMode, make_printer};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Directory to list
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Include entries whose names start with '.'
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Display one entry per line
    #[arg(long, short = '1')]
    pub oneline: bool,

    /// Display permissions, owner, size and modification time
    #[arg(long, short = 'l')]
    pub long: bool,

    /// Display a bordered table
    #[arg(long, short = 't')]
    pub table: bool,

    /// Output a JSON array (takes precedence over every other format)
    #[arg(long, short = 'j')]
    pub json: bool,

    /// When to use colors
    #[arg(long, value_enum, value_name = "WHEN", default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Which glyphs to show next to names
    #[arg(long, value_enum, value_name = "SET", default_value_t = GlyphSet::Nerd)]
    pub icons: GlyphSet,
}

/// Immutable settings for one listing, built once from the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Absolute, existing path to list.
    pub target: PathBuf,
    pub show_hidden: bool,
    pub printer: PrinterConfig,
}

impl ListConfig {
    pub fn from_args(args: &ListArgs) -> Result<Self> {
        let target = resolve_target(&args.path)?;

        let stdout_tty = io::stdout().is_terminal();
        let use_color = resolve_color(args.color, stdout_tty, color_disabled_by_env());
        let width = if stdout_tty {
            terminal_size().map(|(Width(w), _)| usize::from(w))
        } else {
            None
        };

        Ok(Self {
            target,
            show_hidden: args.all,
            printer: PrinterConfig {
                mode: RenderMode::select(args.json, args.table, args.long, args.oneline),
                use_color,
                glyphs: args.icons,
                width,
            },
        })
    }
}

fn resolve_color(choice: ColorChoice, is_tty: bool, disabled_by_env: bool) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => is_tty && !disabled_by_env,
    }
}

/// Turn the user's path argument into an absolute path that exists.
///
/// Symlinks are not resolved, so a linked directory is listed under the
/// name the user gave.
pub fn resolve_target(raw: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(raw);

    let absolute = std::path::absolute(&expanded).map_err(|source| Error::PathResolution {
        path: raw.to_path_buf(),
        source,
    })?;

    match absolute.try_exists() {
        Ok(true) => Ok(absolute),
        Ok(false) => Err(Error::PathNotFound(absolute)),
        Err(source) => Err(Error::Read {
            path: absolute,
            source,
        }),
    }
}

pub fn run(args: ListArgs) -> ExitCode {
    match ListConfig::from_args(&args).and_then(|cfg| execute(&cfg)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::from(2)
        }
    }
}

fn execute(cfg: &ListConfig) -> Result<()> {
    debug!("[list] {:?}", cfg);

    let entries = prepare(load_dir_default(&cfg.target)?, cfg.show_hidden);
    debug!(
        "[list] rendering {} entries as {:?}",
        entries.len(),
        cfg.printer.mode
    );

    make_printer(cfg.printer).print(&entries)
}

fn report(err: &Error) {
    let msg = format!("{PROGRAM_NAME}: {err}");
    if io::stderr().is_terminal() && !color_disabled_by_env() {
        eprintln!("{}", msg.red());
    } else {
        eprintln!("{msg}");
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
