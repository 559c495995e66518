mod listing;
mod loader;
mod meta;
mod record;

pub use listing::{filter_hidden, prepare, sort_entries};
pub use loader::{LoadError, load_dir, load_dir_default};
pub use meta::{Extended, MetadataProvider, NullProvider, default_provider};
#[cfg(unix)]
pub use meta::PosixProvider;
pub use record::{Entry, EntryKind, Mode, ModeType, Permissions};
