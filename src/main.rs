mod models;
mod run;
mod store;
mod ui;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    // Off unless RUST_LOG is set; swallowed store failures land here
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let data_path = get_data_path()?;
    let mut store = store::ExpenseStore::open(&data_path);

    match args.len() {
        1 => run::as_tui(&mut store),
        2.. => run::as_cli(&args, &mut store),
        _ => {
            eprintln!("Usage: expensetui [command]");
            Ok(())
        }
    }
}

fn get_data_path() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "expensetui", "ExpenseTUI")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("settings.json"))
}
