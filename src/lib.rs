//! Resolution of the XDG base directories (data, config, cache).
//!
//! A user-specific home directory, overridable per category via
//! `XDG_*_HOME`, takes precedence over the system-wide fallback lists from
//! `XDG_DATA_DIRS` / `XDG_CONFIG_DIRS`. [`BaseDirectories`] caches one
//! resolution of that state and the [`search`] module walks the resulting
//! lists to locate existing files.

mod base_dirs;
mod env;
mod error;
pub mod path_list;
pub mod search;

pub use base_dirs::BaseDirectories;
pub use env::{EnvProvider, ProcessEnv};
pub use error::BaseDirError;
