pub mod list;

pub use list::{ListArgs, ListConfig, resolve_target, run};
