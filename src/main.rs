mod controller;
mod error;
mod models;
mod run;
mod store;
mod ui;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const DATA_FILE: &str = "expenses.json";
const LOG_FILE: &str = "quickbudget.log";

fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().collect();
    let data_path = match take_file_flag(&mut args)? {
        Some(path) => path,
        None => get_data_path()?,
    };
    init_logging(&data_path);

    let store = store::BudgetStore::open(&data_path);

    match args.len() {
        1 => run::as_tui(store),
        _ => run::as_cli(&args, store),
    }
}

/// Remove `--file <path>` from the argument list, if present.
fn take_file_flag(args: &mut Vec<String>) -> Result<Option<PathBuf>> {
    let Some(pos) = args.iter().position(|a| a == "--file") else {
        return Ok(None);
    };
    if pos + 1 >= args.len() {
        anyhow::bail!("--file needs a path");
    }
    let path = args.remove(pos + 1);
    args.remove(pos);
    Ok(Some(PathBuf::from(path)))
}

fn get_data_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "quickbudget", "QuickBudget")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join(DATA_FILE))
}

/// Log to a file beside the data file; the terminal belongs to the UI.
/// Filter with `RUST_LOG`, e.g. `RUST_LOG=quickbudget=debug`.
fn init_logging(data_path: &Path) {
    let log_path = data_path.with_file_name(LOG_FILE);
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(_) => return,
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quickbudget=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
