//! The cached base-directory resolution.
//!
//! A [`BaseDirectories`] handle owns one fully-built cache of the resolved
//! home directories and search lists. The cache is rebuilt wholesale from
//! the current environment by [`BaseDirectories::refresh`]; it is never
//! mutated in place, so a failed rebuild leaves the previous resolution
//! intact and usable.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::env::{EnvProvider, ProcessEnv, resolve_list, resolve_scalar};
use crate::error::BaseDirError;
use crate::search;

const DEFAULT_RELATIVE_DATA_HOME: &str = "/.local/share";
const DEFAULT_RELATIVE_CONFIG_HOME: &str = "/.config";
const DEFAULT_RELATIVE_CACHE_HOME: &str = "/.cache";
const DEFAULT_DATA_DIRS: &[&str] = &["/usr/local/share", "/usr/share"];
const DEFAULT_CONFIG_DIRS: &[&str] = &["/etc/xdg"];

/// One complete generation of resolved directories.
#[derive(Debug)]
struct Cache {
    data_home: PathBuf,
    config_home: PathBuf,
    cache_home: PathBuf,
    data_dirs: Vec<PathBuf>,
    config_dirs: Vec<PathBuf>,
    searchable_data_dirs: Vec<PathBuf>,
    searchable_config_dirs: Vec<PathBuf>,
}

impl Cache {
    fn build(env: &impl EnvProvider) -> Result<Self, BaseDirError> {
        let home = env
            .var("HOME")
            .filter(|value| !value.is_empty())
            .ok_or(BaseDirError::MissingHome)?;

        let data_home = PathBuf::from(resolve_scalar(
            env,
            "XDG_DATA_HOME",
            &format!("{home}{DEFAULT_RELATIVE_DATA_HOME}"),
        ));
        let config_home = PathBuf::from(resolve_scalar(
            env,
            "XDG_CONFIG_HOME",
            &format!("{home}{DEFAULT_RELATIVE_CONFIG_HOME}"),
        ));
        let cache_home = PathBuf::from(resolve_scalar(
            env,
            "XDG_CACHE_HOME",
            &format!("{home}{DEFAULT_RELATIVE_CACHE_HOME}"),
        ));

        let data_dirs: Vec<PathBuf> = resolve_list(env, "XDG_DATA_DIRS", DEFAULT_DATA_DIRS)
            .into_iter()
            .map(PathBuf::from)
            .collect();
        let config_dirs: Vec<PathBuf> = resolve_list(env, "XDG_CONFIG_DIRS", DEFAULT_CONFIG_DIRS)
            .into_iter()
            .map(PathBuf::from)
            .collect();

        let searchable_data_dirs = prepend(&data_home, &data_dirs);
        let searchable_config_dirs = prepend(&config_home, &config_dirs);

        Ok(Self {
            data_home,
            config_home,
            cache_home,
            data_dirs,
            config_dirs,
            searchable_data_dirs,
            searchable_config_dirs,
        })
    }
}

fn prepend(home: &Path, dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut list = Vec::with_capacity(dirs.len() + 1);
    list.push(home.to_path_buf());
    list.extend(dirs.iter().cloned());
    list
}

/// Handle to the resolved base directories.
///
/// Construction resolves everything once from the environment and fails if
/// `$HOME` is unset or empty. Accessors borrow from the current cache
/// generation; call [`refresh`](Self::refresh) to re-resolve after the
/// environment changed.
#[derive(Debug)]
pub struct BaseDirectories<E: EnvProvider = ProcessEnv> {
    env: E,
    cache: Cache,
}

impl BaseDirectories<ProcessEnv> {
    /// Resolve against the process environment.
    pub fn new() -> Result<Self, BaseDirError> {
        Self::with_env(ProcessEnv)
    }
}

impl<E: EnvProvider> BaseDirectories<E> {
    /// Resolve against a caller-supplied environment.
    pub fn with_env(env: E) -> Result<Self, BaseDirError> {
        let cache = Cache::build(&env)?;
        Ok(Self { env, cache })
    }

    /// Rebuild the whole cache from the current environment.
    ///
    /// The new generation is built first and swapped in only on success, so
    /// after an error (`$HOME` no longer set, say) every accessor still
    /// returns the values from before the call.
    pub fn refresh(&mut self) -> Result<(), BaseDirError> {
        self.cache = Cache::build(&self.env)?;
        Ok(())
    }

    /// Base directory for user-specific data files,
    /// `${XDG_DATA_HOME:-$HOME/.local/share}`.
    pub fn data_home(&self) -> &Path {
        &self.cache.data_home
    }

    /// Base directory for user-specific configuration files,
    /// `${XDG_CONFIG_HOME:-$HOME/.config}`.
    pub fn config_home(&self) -> &Path {
        &self.cache.config_home
    }

    /// Base directory for user-specific non-essential data files,
    /// `${XDG_CACHE_HOME:-$HOME/.cache}`.
    pub fn cache_home(&self) -> &Path {
        &self.cache.cache_home
    }

    /// Preference-ordered data directories searched in addition to
    /// [`data_home`](Self::data_home),
    /// `${XDG_DATA_DIRS:-/usr/local/share:/usr/share}`.
    pub fn data_dirs(&self) -> &[PathBuf] {
        &self.cache.data_dirs
    }

    /// Preference-ordered config directories searched in addition to
    /// [`config_home`](Self::config_home), `${XDG_CONFIG_DIRS:-/etc/xdg}`.
    pub fn config_dirs(&self) -> &[PathBuf] {
        &self.cache.config_dirs
    }

    /// [`data_dirs`](Self::data_dirs) with [`data_home`](Self::data_home)
    /// prepended as the highest-precedence entry.
    pub fn searchable_data_dirs(&self) -> &[PathBuf] {
        &self.cache.searchable_data_dirs
    }

    /// [`config_dirs`](Self::config_dirs) with
    /// [`config_home`](Self::config_home) prepended as the
    /// highest-precedence entry.
    pub fn searchable_config_dirs(&self) -> &[PathBuf] {
        &self.cache.searchable_config_dirs
    }

    /// Every existing data file for `relative`, highest precedence first.
    pub fn find_data_files(&self, relative: &str) -> Vec<PathBuf> {
        search::find_all_existing(relative, self.searchable_data_dirs())
    }

    /// Every existing config file for `relative`, highest precedence first.
    pub fn find_config_files(&self, relative: &str) -> Vec<PathBuf> {
        search::find_all_existing(relative, self.searchable_config_dirs())
    }

    /// First data file for `relative` that opens with `options`.
    pub fn open_data_file(&self, relative: &str, options: &OpenOptions) -> Option<File> {
        search::find_first_existing(relative, self.searchable_data_dirs(), options)
    }

    /// First config file for `relative` that opens with `options`.
    pub fn open_config_file(&self, relative: &str, options: &OpenOptions) -> Option<File> {
        search::find_first_existing(relative, self.searchable_config_dirs(), options)
    }
}
