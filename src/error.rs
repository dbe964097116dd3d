use thiserror::Error;

/// Errors that can occur while rebuilding the directory cache.
///
/// A file that cannot be opened during a search is never an error; the
/// search operations skip it and continue.
#[derive(Debug, Error)]
pub enum BaseDirError {
    /// `$HOME` is unset or empty, so the default home directories cannot
    /// be derived.
    #[error("HOME is not set or is empty")]
    MissingHome,
}
