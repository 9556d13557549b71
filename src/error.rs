use thiserror::Error;

use crate::models::EstadoAsignatura;

/// Errores de las acciones del llamador. El motor de estados no falla nunca.
#[derive(Debug, Error)]
pub enum MallaError {
    #[error("la asignatura '{0}' no existe en la malla")]
    AsignaturaDesconocida(String),
    #[error("la asignatura '{codigo}' no admite esta acción en estado {estado}")]
    NoSeleccionable { codigo: String, estado: EstadoAsignatura },
    #[error("no existe el semestre {0}")]
    SemestreInexistente(usize),
    #[error("el semestre {0} tiene asignaturas bloqueadas")]
    SemestreBloqueado(usize),
    #[error("configuración inválida: {0}")]
    Config(String),
    #[error("json inválido: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MallaError>;
