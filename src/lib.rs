// Biblioteca raíz del crate `mallagrid`.
// Motor de estados de la malla curricular y la API HTTP que lo expone.
pub mod algorithm;
pub mod api_json;
pub mod config;
pub mod error;
pub mod interaccion;
pub mod logging;
pub mod models;
pub mod server;
mod server_handlers;

pub use algorithm::{classify_course, classify_malla, classify_semester, Accion, Progreso};
pub use error::{MallaError, Result};
/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
