// Articles directory: a searchable terminal view of articles stored in Firestore.
// Wires configuration, logging, the startup fetches, and the terminal together.

mod app;
mod articles;
mod cache;
mod clipboard;
mod config;
mod context;
mod error;
mod firestore;
mod logging;
mod state;
mod ui;

use std::fs;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::app::App;
use crate::articles::{FRESHNESS_WINDOW, startup};
use crate::cache::FileStore;
use crate::clipboard::Osc52Clipboard;
use crate::config::Config;
use crate::context::ClientContext;
use crate::error::Result;
use crate::firestore::FirestoreClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("articles-directory: {}", e);
            std::process::exit(2);
        }
    };

    fs::create_dir_all(&config.cache_dir)?;
    let _log_guard = logging::init_file_logging(&config.cache_dir);
    info!(project = %config.project_id, cache = %config.cache_dir.display(), "starting");

    let ctx = ClientContext::new(
        Arc::new(FirestoreClient::new(&config)?),
        Arc::new(FileStore::new(&config.cache_dir)),
    );

    let (tx, rx) = mpsc::unbounded_channel();
    startup::mount(&ctx, FRESHNESS_WINDOW, &tx);

    let mut app = App::new(Box::new(Osc52Clipboard::stdout()), rx);
    let mut terminal = ratatui::init();
    // The UI loop blocks on terminal input; keep it off the async workers.
    let result = tokio::task::block_in_place(|| app.run(&mut terminal));
    ratatui::restore();

    if let Err(e) = &result {
        error!(error = %e, "terminal error");
    }
    info!("exiting");
    result.map_err(Into::into)
}
