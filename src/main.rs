use std::sync::Arc;

use pollguard::config::{load_config, print_schema};
use pollguard::startup;
use pollguard::utils::logger::init_logging;

#[tokio::main]
async fn main() {
    // Print the config schema and exit when asked.
    if std::env::args().any(|arg| arg == "--schema") {
        print_schema();
        return;
    }

    let config = Arc::new(load_config());
    init_logging(&config.logging);

    if let Err(e) = startup::run(config).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
