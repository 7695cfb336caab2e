#[macro_use] extern crate prettytable;

use structopt::StructOpt;
use anyhow::anyhow;
use std::path::PathBuf;
use directories::ProjectDirs;
use chrono::Local;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod form;
mod interface;
mod model;
mod storage;
mod store;

use cli::{Command::*, CommandLineArgs};
use form::{Form, FormError};
use storage::SqliteStorage;
use store::TaskStore;

fn find_default_store_file() -> Option<PathBuf> {
    let base_dirs = ProjectDirs::from("com", "gozque", "todue")?;
    let root_dir = base_dirs.data_dir();
    if !root_dir.exists() {
        std::fs::create_dir_all(root_dir).ok()?;
    }
    let mut path = PathBuf::from(root_dir);
    path.push("store.sqlite");
    Some(path)
}

/// Logging is opt-in through RUST_LOG.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    // Get the command-line arguments.
    let CommandLineArgs {
        action,
        store_file,
        today,
    } = CommandLineArgs::from_args();

    // Unpack the store file.
    let store_file = store_file
        .or_else(find_default_store_file)
        .ok_or(anyhow!("Failed to find store file."))?;
    debug!(path = %store_file.display(), "opening store");

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let mut store = TaskStore::load(SqliteStorage::open(&store_file)?)?;

    // Perform the action.
    match action {
        Add {name, due, description} => {
            let mut form = Form::new(name, due.unwrap_or_default(), description.unwrap_or_default());
            match form.submit(&mut store) {
                Ok(task) => println!("{}", interface::task_line(&task)),
                Err(err) => match err.downcast_ref::<FormError>() {
                    Some(alert) => {
                        eprintln!("{}", alert);
                        std::process::exit(1);
                    }
                    None => return Err(err),
                },
            }
        },
        List {layout} => {
            print!("{}", interface::render(store.tasks(), today, layout));
        },
        Toggle {id} => {
            // An id matching no task, or more than one, leaves everything as is.
            if let Some(id) = store.resolve(&id) {
                if store.toggle(id)? {
                    if let Some(task) = store.tasks().iter().find(|task| task.id == id) {
                        println!("{}", interface::task_line(task));
                    }
                }
            } else {
                debug!(%id, "toggle matched no single task");
            }
        },
    }
    Ok(())
}
