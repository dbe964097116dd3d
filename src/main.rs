mod cli;

use anyhow::Result;
use basedir::{BaseDirectories, path_list};
use clap::Parser;
use cli::{Cli, Command, DumpArgs, FindArgs};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let dirs = BaseDirectories::new()?;

    match cli.command {
        Some(Command::Dump(args)) => run_dump(&dirs, args)?,
        Some(Command::Find(args)) => run_find(&dirs, args)?,
        None => run_dump(&dirs, DumpArgs::default())?,
    }

    Ok(())
}

#[derive(Serialize)]
struct DumpPayload<'a> {
    data_home: &'a Path,
    config_home: &'a Path,
    cache_home: &'a Path,
    data_dirs: &'a [PathBuf],
    config_dirs: &'a [PathBuf],
    searchable_data_dirs: &'a [PathBuf],
    searchable_config_dirs: &'a [PathBuf],
}

fn run_dump(dirs: &BaseDirectories, args: DumpArgs) -> Result<()> {
    if args.json {
        let payload = DumpPayload {
            data_home: dirs.data_home(),
            config_home: dirs.config_home(),
            cache_home: dirs.cache_home(),
            data_dirs: dirs.data_dirs(),
            config_dirs: dirs.config_dirs(),
            searchable_data_dirs: dirs.searchable_data_dirs(),
            searchable_config_dirs: dirs.searchable_config_dirs(),
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Location", "Resolved"]);
    table.add_row(vec![
        Cell::new("data_home"),
        Cell::new(dirs.data_home().display()),
    ]);
    table.add_row(vec![
        Cell::new("config_home"),
        Cell::new(dirs.config_home().display()),
    ]);
    table.add_row(vec![
        Cell::new("cache_home"),
        Cell::new(dirs.cache_home().display()),
    ]);
    table.add_row(vec![
        Cell::new("data_dirs"),
        Cell::new(join_paths(dirs.data_dirs())),
    ]);
    table.add_row(vec![
        Cell::new("config_dirs"),
        Cell::new(join_paths(dirs.config_dirs())),
    ]);
    table.add_row(vec![
        Cell::new("searchable_data_dirs"),
        Cell::new(join_paths(dirs.searchable_data_dirs())),
    ]);
    table.add_row(vec![
        Cell::new("searchable_config_dirs"),
        Cell::new(join_paths(dirs.searchable_config_dirs())),
    ]);

    println!("{table}");
    Ok(())
}

fn run_find(dirs: &BaseDirectories, args: FindArgs) -> Result<()> {
    let search_data = args.data || !args.config;
    let search_config = args.config || !args.data;

    let data_hits = search_data.then(|| dirs.find_data_files(&args.relative_path));
    let config_hits = search_config.then(|| dirs.find_config_files(&args.relative_path));

    if args.json {
        let payload = FindPayload {
            relative_path: &args.relative_path,
            data: data_hits.as_deref(),
            config: config_hits.as_deref(),
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if let Some(hits) = data_hits.as_deref() {
        print_hits("data", hits);
    }
    if let Some(hits) = config_hits.as_deref() {
        print_hits("config", hits);
    }
    Ok(())
}

#[derive(Serialize)]
struct FindPayload<'a> {
    relative_path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a [PathBuf]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<&'a [PathBuf]>,
}

fn print_hits(label: &str, hits: &[PathBuf]) {
    println!("{}:", label.cyan());
    if hits.is_empty() {
        println!("  {}", "(none)".yellow());
        return;
    }
    for hit in hits {
        println!("  {}", hit.display());
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    path_list::join(paths.iter().map(|path| path.to_string_lossy()))
}
