use lsrs_fs::{Mode, ModeType, Permissions};

const SIZE_SUFFIXES: [char; 6] = ['k', 'M', 'G', 'T', 'P', 'E'];

/// Human-readable size using decimal (1000-based) steps.
///
/// Below 1000 the plain integer is returned. Otherwise the unit is picked
/// from the integer quotient, so `999_999` stays in `k` and renders as
/// `1000k`. Scaled values under 10 keep one decimal (`1.2k`), larger ones
/// none (`123M`).
pub fn format_size(bytes: u64) -> String {
    if bytes < 1000 {
        return bytes.to_string();
    }

    let mut div: u64 = 1000;
    let mut exp = 0;
    let mut n = bytes / 1000;
    while n >= 1000 && exp < SIZE_SUFFIXES.len() - 1 {
        n /= 1000;
        div *= 1000;
        exp += 1;
    }

    let value = bytes as f64 / div as f64;
    let suffix = SIZE_SUFFIXES[exp];
    if value < 10.0 {
        format!("{value:.1}{suffix}")
    } else {
        format!("{value:.0}{suffix}")
    }
}

const RWX: [(Permissions, char); 9] = [
    (Permissions::OWNER_READ, 'r'),
    (Permissions::OWNER_WRITE, 'w'),
    (Permissions::OWNER_EXEC, 'x'),
    (Permissions::GROUP_READ, 'r'),
    (Permissions::GROUP_WRITE, 'w'),
    (Permissions::GROUP_EXEC, 'x'),
    (Permissions::OTHER_READ, 'r'),
    (Permissions::OTHER_WRITE, 'w'),
    (Permissions::OTHER_EXEC, 'x'),
];

/// `ls -l` style mode string, e.g. `drwxr-xr-x`.
pub fn format_permissions(mode: Mode) -> String {
    let mut s = String::with_capacity(10);

    s.push(match mode.file_type() {
        ModeType::Directory => 'd',
        ModeType::Symlink => 'l',
        ModeType::Regular | ModeType::Other => '-',
    });

    let perms = mode.permissions();
    for (bit, ch) in RWX {
        s.push(if perms.contains(bit) { ch } else { '-' });
    }

    s
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
