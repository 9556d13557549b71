use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::algorithm::{validar_malla, Progreso};
use crate::api_json::{construir_estado, ejecutar_accion, AccionRequest, EstadoRequest, ValidarRequest};
use crate::error::MallaError;

/// POST /malla/estado
/// Clasifica cada asignatura y semestre de la malla recibida.
pub async fn estado_handler(body: web::Json<EstadoRequest>) -> impl Responder {
    let req = body.into_inner();
    let progreso = Progreso::new(req.aprobadas, req.en_curso);
    let estado = construir_estado(&req.malla, &progreso);
    debug!(
        carrera = %estado.carrera,
        semestres = estado.semestres.len(),
        disponibles = estado.resumen.disponibles,
        "malla clasificada"
    );
    HttpResponse::Ok().json(estado)
}

/// POST /malla/accion
/// Aplica una acción del usuario sobre los conjuntos enviados y devuelve los
/// conjuntos actualizados junto al nuevo estado.
pub async fn accion_handler(body: web::Json<AccionRequest>) -> impl Responder {
    let req = body.into_inner();
    let accion = format!("{:?}", req.accion);
    match ejecutar_accion(req) {
        Ok(resp) => {
            info!(%accion, aprobadas = resp.aprobadas.len(), en_curso = resp.en_curso.len(), "acción aplicada");
            HttpResponse::Ok().json(resp)
        }
        Err(e @ (MallaError::AsignaturaDesconocida(_) | MallaError::SemestreInexistente(_))) => {
            warn!(%accion, error = %e, "acción sobre elemento inexistente");
            HttpResponse::NotFound().json(json!({"error": e.to_string()}))
        }
        Err(e) => {
            warn!(%accion, error = %e, "acción rechazada");
            HttpResponse::Conflict().json(json!({"error": e.to_string()}))
        }
    }
}

/// POST /malla/validar
/// Devuelve el informe de integridad de la malla.
pub async fn validar_handler(body: web::Json<ValidarRequest>) -> impl Responder {
    let req = body.into_inner();
    let informe = validar_malla(&req.malla);
    HttpResponse::Ok().json(json!({"valida": informe.es_valida(), "informe": informe}))
}
