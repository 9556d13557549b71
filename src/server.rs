use actix_cors::Cors;
use actix_web::{error, web, App, HttpResponse, HttpServer};
use serde_json::json;
use tracing::info;

use crate::config::Config;

use crate::server_handlers::{accion_handler, estado_handler, help_handler, validar_handler};

/// Registra las rutas de la API. Compartido por `run_server` y las pruebas.
pub fn configurar_rutas(cfg: &mut web::ServiceConfig) {
    // Errores de deserialización como JSON `{"error": ...}` con 400
    let json_cfg = web::JsonConfig::default().error_handler(|err, _req| {
        let msg = format!("invalid JSON body: {}", err);
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(json!({"error": msg}))).into()
    });

    cfg.app_data(json_cfg)
        .route("/malla/estado", web::post().to(estado_handler))
        .route("/malla/accion", web::post().to(accion_handler))
        .route("/malla/validar", web::post().to(validar_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(cfg: Config) -> std::io::Result<()> {
    info!(bind = %cfg.bind_addr, presion_larga_ms = crate::interaccion::millis(cfg.presion_larga), "iniciando servidor");
    let bind_addr = cfg.bind_addr.clone();
    let data = web::Data::new(cfg);
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(data.clone())
            .configure(configurar_rutas)
    })
    .bind(bind_addr)?
    .run()
    .await
}
