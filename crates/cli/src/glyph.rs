//! Icon selection for listing entries.
//!
//! Every glyph set resolves in the same order: directories (with `.git`
//! singled out), then exact well-known filenames, then the extension, then
//! a generic file glyph.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum GlyphSet {
    /// Nerd Font icons (needs a patched font).
    #[default]
    Nerd,
    /// Plain emoji, no special font required.
    Emoji,
    /// No glyphs at all.
    None,
}

impl GlyphSet {
    pub fn glyph_for(self, name: &str, is_dir: bool) -> &'static str {
        match self {
            GlyphSet::Nerd => NERD.select(name, is_dir),
            GlyphSet::Emoji => EMOJI.select(name, is_dir),
            GlyphSet::None => "",
        }
    }
}

/// Glyph from the default (Nerd Font) set.
pub fn glyph_for(name: &str, is_dir: bool) -> &'static str {
    GlyphSet::default().glyph_for(name, is_dir)
}

struct GlyphTable {
    git_dir: &'static str,
    folder: &'static str,
    by_name: fn(&str) -> Option<&'static str>,
    by_ext: fn(&str) -> Option<&'static str>,
    file: &'static str,
}

impl GlyphTable {
    fn select(&self, name: &str, is_dir: bool) -> &'static str {
        if is_dir {
            return if name == ".git" {
                self.git_dir
            } else {
                self.folder
            };
        }

        if let Some(glyph) = (self.by_name)(name) {
            return glyph;
        }

        extension(name)
            .and_then(self.by_ext)
            .unwrap_or(self.file)
    }
}

/// Text after the last `.`, if any. Case is preserved.
fn extension(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(_, ext)| ext)
}

const NERD: GlyphTable = GlyphTable {
    git_dir: "\u{e5fb}",
    folder: "\u{e5ff}",
    by_name: nerd_by_name,
    by_ext: nerd_by_ext,
    file: "\u{f016}",
};

fn nerd_by_name(name: &str) -> Option<&'static str> {
    let glyph = match name {
        "Makefile" | "makefile" => "\u{e779}",
        "CMakeLists.txt" => "\u{e615}",
        ".gitignore" => "\u{f1d3}",
        "Dockerfile" => "\u{e7b0}",
        _ => return None,
    };
    Some(glyph)
}

fn nerd_by_ext(ext: &str) -> Option<&'static str> {
    let glyph = match ext {
        "go" | "mod" | "sum" => "\u{e65e}",
        "rs" => "\u{e7a8}",
        "py" => "\u{e606}",
        "lua" => "\u{e620}",
        "c" => "\u{e61e}",
        "h" | "hpp" => "\u{f0fd}",
        "cpp" | "cc" | "cxx" => "\u{e61d}",
        "js" => "\u{e60c}",
        "ts" => "\u{e628}",
        "jsx" | "tsx" => "\u{e7ba}",
        "java" => "\u{e256}",
        "kt" | "kts" => "\u{e634}",
        "rb" => "\u{e791}",
        "php" => "\u{e608}",
        "html" | "htm" => "\u{e60e}",
        "css" => "\u{e614}",
        "scss" | "sass" => "\u{e603}",
        "json" => "\u{e60b}",
        "yaml" | "yml" => "\u{e6a8}",
        "toml" => "\u{e6b2}",
        "sh" | "bash" => "\u{e795}",
        "md" => "\u{f00ba}",
        "txt" => "\u{f15c}",
        _ => return None,
    };
    Some(glyph)
}

const EMOJI: GlyphTable = GlyphTable {
    git_dir: "🌱",
    folder: "📁",
    by_name: emoji_by_name,
    by_ext: emoji_by_ext,
    file: "📄",
};

fn emoji_by_name(name: &str) -> Option<&'static str> {
    let glyph = match name {
        "Makefile" | "makefile" | "CMakeLists.txt" => "🛠",
        ".gitignore" => "🙈",
        "Dockerfile" => "🐳",
        _ => return None,
    };
    Some(glyph)
}

fn emoji_by_ext(ext: &str) -> Option<&'static str> {
    let glyph = match ext {
        "go" | "rs" | "py" | "js" | "ts" | "cpp" | "c" | "h" => "🔧",
        "md" | "txt" => "📝",
        "zip" | "tar" | "gz" | "rar" => "📦",
        "png" | "jpg" | "jpeg" | "gif" | "svg" => "🖼",
        "mp3" | "wav" | "flac" => "🎵",
        "mp4" | "mkv" | "webm" => "🎬",
        "db" | "sqlite" => "🗃",
        _ => return None,
    };
    Some(glyph)
}

#[cfg(test)]
#[path = "glyph_tests.rs"]
mod tests;
