use bitflags::bitflags;
use chrono::{DateTime, Local};

const S_IFMT: u32 = 0o170_000;
const S_IFDIR: u32 = 0o040_000;
const S_IFLNK: u32 = 0o120_000;
const S_IFREG: u32 = 0o100_000;

/// Whether an entry is a directory. Computed once from the filesystem's
/// directory flag at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn is_dir(self) -> bool {
        matches!(self, EntryKind::Directory)
    }

    /// Short label used in tables and JSON output.
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::File => "File",
            EntryKind::Directory => "Dir",
        }
    }
}

bitflags! {
    /// The nine POSIX permission bits, owner/group/other.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u32 {
        const OWNER_READ  = 0o400;
        const OWNER_WRITE = 0o200;
        const OWNER_EXEC  = 0o100;
        const GROUP_READ  = 0o040;
        const GROUP_WRITE = 0o020;
        const GROUP_EXEC  = 0o010;
        const OTHER_READ  = 0o004;
        const OTHER_WRITE = 0o002;
        const OTHER_EXEC  = 0o001;
    }
}

/// File type as encoded in the `S_IFMT` field of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeType {
    Directory,
    Symlink,
    Regular,
    /// Sockets, fifos, devices, or a mode without type bits.
    Other,
}

/// Raw POSIX `st_mode` value: type field plus permission bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mode(u32);

impl Mode {
    pub fn from_raw(bits: u32) -> Self {
        Mode(bits)
    }

    /// Type-only mode for platforms that do not report POSIX modes.
    pub fn for_kind(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Directory => Mode(S_IFDIR),
            EntryKind::File => Mode(S_IFREG),
        }
    }

    pub fn file_type(self) -> ModeType {
        match self.0 & S_IFMT {
            S_IFDIR => ModeType::Directory,
            S_IFLNK => ModeType::Symlink,
            S_IFREG => ModeType::Regular,
            _ => ModeType::Other,
        }
    }

    pub fn permissions(self) -> Permissions {
        Permissions::from_bits_truncate(self.0)
    }
}

/// One member of a listed directory.
///
/// Entries are built once by the loader and never mutated afterwards;
/// the `with_*` methods consume and return the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Base name as returned by the filesystem; never empty.
    pub name: String,
    pub kind: EntryKind,
    /// Size in bytes. Meaningless for directories in most displays.
    pub size_bytes: u64,
    /// Last modification time, if the platform reports one.
    pub modified: Option<DateTime<Local>>,
    /// POSIX mode; `None` where the platform has no such concept.
    pub mode: Option<Mode>,
    /// Owner name, or the numeric uid when it does not resolve.
    pub owner: Option<String>,
    /// Group name, or the numeric gid when it does not resolve.
    pub group: Option<String>,
    pub link_count: Option<u64>,
}

impl Entry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
            size_bytes: 0,
            modified: None,
            mode: None,
            owner: None,
            group: None,
            link_count: None,
        }
    }

    pub fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = size_bytes;
        self
    }

    pub fn with_modified(mut self, modified: DateTime<Local>) -> Self {
        self.modified = Some(modified);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_ownership(mut self, owner: impl Into<String>, group: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self.group = Some(group.into());
        self
    }

    pub fn with_link_count(mut self, links: u64) -> Self {
        self.link_count = Some(links);
        self
    }

    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Dotfile convention only; platform hidden attributes are not consulted.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// The entry's mode, or a type-only stand-in when none was reported.
    pub fn mode_or_default(&self) -> Mode {
        self.mode.unwrap_or_else(|| Mode::for_kind(self.kind))
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
