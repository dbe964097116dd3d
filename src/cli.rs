use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Inspect XDG base directory resolution",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every resolved home directory and search list.
    Dump(DumpArgs),

    /// Locate every existing file for a relative path across the search lists.
    Find(FindArgs),
}

#[derive(Debug, Args, Clone, Default)]
pub struct DumpArgs {
    /// Emit machine-readable JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct FindArgs {
    /// Relative path to probe under each search directory (e.g. /app/conf).
    #[arg(value_name = "RELATIVE_PATH")]
    pub relative_path: String,

    /// Search the data directories only.
    #[arg(long, conflicts_with = "config")]
    pub data: bool,

    /// Search the config directories only.
    #[arg(long, conflicts_with = "data")]
    pub config: bool,

    /// Emit machine-readable JSON instead of plain paths.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
