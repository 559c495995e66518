use super::*;

#[test]
fn exact_names_beat_extensions() {
    // No extension at all, still gets the make glyph.
    assert_eq!(glyph_for("Makefile", false), "\u{e779}");
    assert_eq!(glyph_for("makefile", false), "\u{e779}");
    // `.txt` would otherwise win.
    assert_eq!(glyph_for("CMakeLists.txt", false), "\u{e615}");
    assert_eq!(glyph_for("Dockerfile", false), "\u{e7b0}");
    assert_eq!(glyph_for(".gitignore", false), "\u{f1d3}");
}

#[test]
fn extensions_map_to_language_glyphs() {
    let cases: &[(&str, &str)] = &[
        ("notes.md", "\u{f00ba}"),
        ("main.rs", "\u{e7a8}"),
        ("go.mod", "\u{e65e}"),
        ("setup.py", "\u{e606}"),
        ("index.html", "\u{e60e}"),
        ("config.yml", "\u{e6a8}"),
        ("archive.tar.json", "\u{e60b}"),
        ("todo.txt", "\u{f15c}"),
    ];

    for (name, expected) in cases {
        assert_eq!(glyph_for(name, false), *expected, "glyph_for({name:?})");
    }
}

#[test]
fn unknown_or_missing_extensions_fall_back_to_generic_file() {
    for name in ["anything.unknownext", "LICENSE", "trailing.", "README.MD"] {
        assert_eq!(glyph_for(name, false), "\u{f016}", "glyph_for({name:?})");
    }
}

#[test]
fn directories_ignore_file_rules() {
    assert_eq!(glyph_for(".git", true), "\u{e5fb}");
    assert_eq!(glyph_for("src", true), "\u{e5ff}");
    // A directory named like a file still gets the folder glyph.
    assert_eq!(glyph_for("Makefile", true), "\u{e5ff}");
    assert_eq!(glyph_for("assets.md", true), "\u{e5ff}");
    // `.git` is only special as a directory.
    assert_eq!(glyph_for(".git", false), "\u{f016}");
}

#[test]
fn emoji_set_follows_the_same_order() {
    let set = GlyphSet::Emoji;

    assert_eq!(set.glyph_for("src", true), "📁");
    assert_eq!(set.glyph_for(".git", true), "🌱");
    assert_eq!(set.glyph_for("Makefile", false), "🛠");
    assert_eq!(set.glyph_for("CMakeLists.txt", false), "🛠");
    assert_eq!(set.glyph_for("notes.md", false), "📝");
    assert_eq!(set.glyph_for("photo.png", false), "🖼");
    assert_eq!(set.glyph_for("anything.unknownext", false), "📄");
}

#[test]
fn none_set_is_always_empty() {
    for (name, is_dir) in [("src", true), ("Makefile", false), ("a.rs", false)] {
        assert_eq!(GlyphSet::None.glyph_for(name, is_dir), "");
    }
}
