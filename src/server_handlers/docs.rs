use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::api_json::{AccionEntrada, EstadoRequest};
use crate::config::Config;
use crate::interaccion::{millis, DURACION_PRESION_LARGA};
use crate::models::{Asignatura, Malla, Semestre};

/// GET /help
/// Incluye la duración de presión larga configurada para que el front-end
/// use el mismo umbral.
pub async fn help_handler(cfg: Option<web::Data<Config>>) -> impl Responder {
    let presion_larga_ms = cfg
        .map(|c| millis(c.presion_larga))
        .unwrap_or(millis(DURACION_PRESION_LARGA));

    let malla = Malla::from_semestres(
        "Ingeniería Civil Informática",
        vec![
            Semestre { semestre: 1, asignaturas: vec![Asignatura::new("CBM1000", "Álgebra y Geometría", 6, &[])] },
            Semestre { semestre: 2, asignaturas: vec![Asignatura::new("CBM1002", "Álgebra Lineal", 6, &["CBM1000"])] },
        ],
    );
    let example = EstadoRequest {
        malla,
        aprobadas: vec!["CBM1000".to_string()],
        en_curso: vec![],
    };

    let help = json!({
        "description": "API de estados de la malla curricular. Cada request trae la malla y los conjuntos 'aprobadas' y 'en_curso'; el servidor no guarda estado.",
        "routes": {
            "POST /malla/estado": "estado de cada asignatura (aprobada, en_curso, prerrequisito_en_curso, bloqueada, disponible) y de cada semestre (puede_tachar, completado)",
            "POST /malla/accion": "aplica 'accion' y devuelve los conjuntos actualizados; 409 si la acción no está permitida",
            "POST /malla/validar": "informe de integridad: duplicados, prerrequisitos colgantes, autorreferencias, ciclos",
            "GET /help": "esta ayuda"
        },
        "presion_larga_ms": presion_larga_ms,
        "post_example": example,
        "accion_examples": [
            AccionEntrada::ToggleAprobada { codigo: "CBM1002".to_string() },
            AccionEntrada::Gesto { gesto: crate::interaccion::Gesto::PresionLarga, codigo: "CBM1002".to_string() },
            AccionEntrada::TacharSemestre { posicion: 2 }
        ]
    });

    HttpResponse::Ok().json(help)
}
