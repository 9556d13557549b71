// --- Malla curricular interactiva - servidor de estados ---

use mallagrid::config::Config;
use mallagrid::logging::init_logging;
use mallagrid::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let cfg = Config::from_env().map_err(|e| std::io::Error::other(e.to_string()))?;
    init_logging(&cfg.log_filter);
    tracing::info!("=== Malla curricular (API) ===");
    tracing::info!("Iniciando servidor en http://{}", cfg.bind_addr);
    run_server(cfg).await
}
