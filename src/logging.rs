//! Logging con `tracing` y `tracing-subscriber`.
//!
//! `RUST_LOG` tiene prioridad; si no está definido se usa el filtro de la
//! configuración (por defecto `info`).

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Inicializa el subscriber global. Llamadas repetidas se ignoran.
pub fn init_logging(filtro_por_defecto: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filtro_por_defecto))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}
