mod config;
pub mod logging;

pub use config::{
    MODIFIED_WIDTH, OWNER_MIN_WIDTH, PROGRAM_NAME, TABLE_MAX_COLUMN_WIDTH, color_disabled_by_env,
    expand_tilde, format_modified,
};

pub use logging::init;
