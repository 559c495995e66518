use super::*;
use chrono::TimeZone;
use serial_test::serial;

#[test]
fn format_modified_uses_canonical_format() {
    let ts = Local
        .with_ymd_and_hms(2006, 1, 2, 15, 4, 5)
        .single()
        .expect("unambiguous local time");

    assert_eq!(format_modified(Some(ts)), "Mon Jan 2 2006");
    assert_eq!(format_modified(None), "-");
}

#[test]
fn modified_width_fits_longest_rendering() {
    let ts = Local
        .with_ymd_and_hms(2026, 9, 30, 12, 0, 0)
        .single()
        .expect("unambiguous local time");

    let rendered = format_modified(Some(ts));
    assert_eq!(rendered, "Wed Sep 30 2026");
    assert_eq!(rendered.len(), MODIFIED_WIDTH);
}

#[test]
fn expand_tilde_cases() {
    let Some(home) = dirs::home_dir() else {
        return;
    };

    let cases: &[(&str, PathBuf)] = &[
        ("~", home.clone()),
        ("~/", home.clone()),
        ("~/src/lsrs", home.join("src/lsrs")),
        ("~other/src", PathBuf::from("~other/src")),
        ("/tmp/~", PathBuf::from("/tmp/~")),
        ("relative", PathBuf::from("relative")),
    ];

    for (input, expected) in cases {
        let got = expand_tilde(Path::new(input));
        assert_eq!(&got, expected, "expand_tilde({input:?})");
    }
}

#[test]
#[serial]
fn no_color_env_is_honoured() {
    unsafe { std::env::remove_var(NO_COLOR_ENV) };
    assert!(!color_disabled_by_env());

    unsafe { std::env::set_var(NO_COLOR_ENV, "") };
    assert!(!color_disabled_by_env());

    unsafe { std::env::set_var(NO_COLOR_ENV, "1") };
    assert!(color_disabled_by_env());

    unsafe { std::env::remove_var(NO_COLOR_ENV) };
}
