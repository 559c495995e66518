use std::{
    collections::HashMap,
    fmt,
    fs::{self, Metadata},
    io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use log::debug;

use crate::{
    meta::{MetadataProvider, default_provider},
    record::{Entry, EntryKind, Mode},
};

/// Why a directory could not be listed at all.
#[derive(Debug)]
pub enum LoadError {
    /// The directory does not exist.
    NotFound(PathBuf),
    /// The directory exists but could not be opened or read.
    Read { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(path) => write!(f, "{} does not exist", path.display()),
            LoadError::Read { path, source } => {
                write!(f, "cannot read directory {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::NotFound(_) => None,
            LoadError::Read { source, .. } => Some(source),
        }
    }
}

/// Per-load memo of uid/gid lookups. A directory is usually owned by a
/// handful of accounts, so each id is resolved once.
struct NameCache<'a> {
    provider: &'a dyn MetadataProvider,
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl<'a> NameCache<'a> {
    fn new(provider: &'a dyn MetadataProvider) -> Self {
        Self {
            provider,
            users: HashMap::new(),
            groups: HashMap::new(),
        }
    }

    fn user(&mut self, uid: u32) -> String {
        let provider = self.provider;
        self.users
            .entry(uid)
            .or_insert_with(|| provider.user_name(uid).unwrap_or_else(|| uid.to_string()))
            .clone()
    }

    fn group(&mut self, gid: u32) -> String {
        let provider = self.provider;
        self.groups
            .entry(gid)
            .or_insert_with(|| provider.group_name(gid).unwrap_or_else(|| gid.to_string()))
            .clone()
    }
}

/// List the immediate children of `path` using the platform's metadata
/// provider.
pub fn load_dir_default(path: &Path) -> Result<Vec<Entry>, LoadError> {
    load_dir(path, default_provider())
}

/// List the immediate children of `path`.
///
/// Children whose metadata cannot be read (for example because they were
/// removed between listing and stat) are skipped. Failing to open the
/// directory, or an I/O error while iterating it, is an error. The returned
/// order is whatever the filesystem yields.
pub fn load_dir(path: &Path, provider: &dyn MetadataProvider) -> Result<Vec<Entry>, LoadError> {
    let rd = fs::read_dir(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    // DirEntry::metadata does not follow symlinks, so links keep their own
    // type bits and a dangling link still lists.
    let children = rd.map(|res| {
        res.map(|dir_entry| {
            let name = dir_entry.file_name().to_string_lossy().into_owned();
            (name, dir_entry.metadata())
        })
    });

    collect_entries(path, children, provider)
}

/// Build entries from `(name, metadata)` pairs as the directory yields them.
/// An iteration error aborts the load; a metadata error skips that child.
fn collect_entries<I>(
    path: &Path,
    children: I,
    provider: &dyn MetadataProvider,
) -> Result<Vec<Entry>, LoadError>
where
    I: IntoIterator<Item = io::Result<(String, io::Result<Metadata>)>>,
{
    let mut names = NameCache::new(provider);
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for child in children {
        let (name, metadata) = child.map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match metadata {
            Ok(metadata) => entries.push(build_entry(name, &metadata, &mut names)),
            Err(e) => {
                debug!("[load] skipping {:?}: {e}", path.join(&name));
                skipped += 1;
            }
        }
    }

    debug!(
        "[load] {:?}: {} entries, {} skipped",
        path,
        entries.len(),
        skipped
    );

    Ok(entries)
}

fn build_entry(name: String, metadata: &Metadata, names: &mut NameCache<'_>) -> Entry {
    let kind = if metadata.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    };

    let mut entry = Entry::new(name, kind).with_size(metadata.len());

    if let Ok(modified) = metadata.modified() {
        entry = entry.with_modified(DateTime::<Local>::from(modified));
    }

    if let Some(ext) = names.provider.extended(metadata) {
        let owner = names.user(ext.uid);
        let group = names.group(ext.gid);
        entry = entry
            .with_mode(Mode::from_raw(ext.mode))
            .with_ownership(owner, group)
            .with_link_count(ext.links);
    }

    entry
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
