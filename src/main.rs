use crate::config::AppConfig;
use crate::model::ArtifactStore;
use crate::responses::error_to_response;
use crate::router::{handle, is_htmx, AppState};
use astra::Server;
use std::sync::Arc;
use tracing::{error, info};

mod config;
mod domain;
mod errors;
mod forms;
mod logging;
mod model;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Read configuration
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    logging::init_logging(&cfg.log_filter);

    // 2️⃣ Load the model + preprocessor once; nothing can be served without them
    let store = ArtifactStore::new(cfg.artifact_paths());
    if let Err(e) = store.get() {
        error!(error = %e, "artifact loading failed");
        std::process::exit(1);
    }

    let state = Arc::new(AppState {
        store,
        variant: cfg.variant,
        static_dir: cfg.static_dir.clone(),
    });

    // 3️⃣ Start the server
    info!(
        addr = %cfg.addr,
        variant = cfg.variant.slug(),
        workers = cfg.max_workers,
        "starting server"
    );

    let server = Server::bind(&cfg.addr).max_workers(cfg.max_workers);

    // 4️⃣ Serve requests, sharing the read-only state across workers
    let result = server.serve(move |req, _info| {
        let partial = is_htmx(&req);
        match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => error_to_response(err, partial),
        }
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
