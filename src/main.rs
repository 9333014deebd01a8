use astra::Server;
use halifax_housing_hub::config::AppConfig;
use halifax_housing_hub::db::{init_db, load_index, seed_if_present, Database};
use halifax_housing_hub::domain::SelectionEngine;
use halifax_housing_hub::router::{handle, AppState};
use halifax_housing_hub::templates;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = AppConfig::from_env();

    // 1. Create the database handle and apply the schema
    let db = Database::new(cfg.db_path.clone());
    if let Err(e) = init_db(&db, &cfg.schema_path) {
        error!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    // 2. Import the dataset and load it into memory
    let index = match seed_if_present(&db, &cfg.seed_path).and_then(|_| load_index(&db)) {
        Ok(index) => index,
        Err(e) => {
            error!("Loading listings failed: {e}");
            std::process::exit(1);
        }
    };
    let state = AppState::new(
        index,
        SelectionEngine::new(cfg.reference_builder.clone(), cfg.highlight_k),
    );

    // 3. Start the server
    info!(addr = %cfg.bind_addr, workers = cfg.max_workers, "starting server");
    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
