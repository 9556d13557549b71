use std::env;
use std::time::Duration;

use crate::error::{MallaError, Result};
use crate::interaccion::DURACION_PRESION_LARGA;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_LOG: &str = "info";

/// Configuración del servicio. Se lee de variables de entorno (y de `.env` si existe).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    pub presion_larga: Duration,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: DEFAULT_BIND.to_string(),
            presion_larga: DURACION_PRESION_LARGA,
            log_filter: DEFAULT_LOG.to_string(),
        }
    }
}

impl Config {
    /// Honra MALLAGRID_BIND, MALLAGRID_PRESION_LARGA_MS y MALLAGRID_LOG.
    pub fn from_env() -> Result<Self> {
        let _ = dotenv::dotenv();
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Versión parametrizable para pruebas (sin tocar el entorno del proceso).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();
        if let Some(bind) = lookup("MALLAGRID_BIND").filter(|s| !s.trim().is_empty()) {
            cfg.bind_addr = bind.trim().to_string();
        }
        if let Some(ms) = lookup("MALLAGRID_PRESION_LARGA_MS") {
            let ms: u64 = ms
                .trim()
                .parse()
                .map_err(|e| MallaError::Config(format!("MALLAGRID_PRESION_LARGA_MS='{}': {}", ms, e)))?;
            cfg.presion_larga = Duration::from_millis(ms);
        }
        if let Some(log) = lookup("MALLAGRID_LOG").filter(|s| !s.trim().is_empty()) {
            cfg.log_filter = log;
        }
        Ok(cfg)
    }
}
