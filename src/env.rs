use std::env;

use crate::path_list;

/// Read-only view of the process environment.
///
/// Resolution code only reads the environment through this trait, so tests
/// can substitute a fixed environment without touching process state.
pub trait EnvProvider {
    /// Value of the variable, or `None` when it is unset or not valid
    /// unicode.
    fn var(&self, name: &str) -> Option<String>;
}

/// [`EnvProvider`] backed by `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

/// Value of `name` if set and non-empty, else a copy of `default`.
pub(crate) fn resolve_scalar(env: &impl EnvProvider, name: &str, default: &str) -> String {
    match env.var(name) {
        Some(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// Colon-separated value of `name` split into segments if set and non-empty,
/// else a copy of `defaults`.
pub(crate) fn resolve_list(env: &impl EnvProvider, name: &str, defaults: &[&str]) -> Vec<String> {
    match env.var(name) {
        Some(value) if !value.is_empty() => path_list::split(&value),
        _ => defaults.iter().map(|item| (*item).to_string()).collect(),
    }
}
