use serde::{Deserialize, Serialize};

use crate::algorithm::{classify_malla, resumir, Accion, Progreso, ResumenMalla};
use crate::error::Result;
use crate::interaccion::{resolver_gesto, Gesto};
use crate::models::{EstadoAsignatura, Malla};

/// Cuerpo de `POST /malla/estado`.
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "malla": { "carrera": "ICI", "años": [ { "semestres": [ { "semestre": 1, "asignaturas": [
///       { "codigo": "CBM1000", "nombre": "Álgebra", "creditos": 6, "prerrequisitos": [], "area": "Ciencias Básicas" }
///   ] } ] } ] },
///   "aprobadas": ["CBM1000"],
///   "en_curso": []
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct EstadoRequest {
    pub malla: Malla,
    #[serde(default)]
    pub aprobadas: Vec<String>,
    #[serde(default)]
    pub en_curso: Vec<String>,
}

/// Acción tal como llega por la API: o bien ya resuelta, o bien un gesto crudo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "tipo", rename_all = "snake_case")]
pub enum AccionEntrada {
    Click { codigo: String },
    ToggleAprobada { codigo: String },
    ToggleEnCurso { codigo: String },
    TacharSemestre { posicion: usize },
    Gesto { gesto: Gesto, codigo: String },
}

impl AccionEntrada {
    pub fn resolver(self) -> Accion {
        match self {
            AccionEntrada::Click { codigo } => Accion::Click { codigo },
            AccionEntrada::ToggleAprobada { codigo } => Accion::ToggleAprobada { codigo },
            AccionEntrada::ToggleEnCurso { codigo } => Accion::ToggleEnCurso { codigo },
            AccionEntrada::TacharSemestre { posicion } => Accion::TacharSemestre { posicion },
            AccionEntrada::Gesto { gesto, codigo } => resolver_gesto(gesto, &codigo),
        }
    }
}

/// Cuerpo de `POST /malla/accion`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccionRequest {
    pub malla: Malla,
    #[serde(default)]
    pub aprobadas: Vec<String>,
    #[serde(default)]
    pub en_curso: Vec<String>,
    pub accion: AccionEntrada,
}

/// Cuerpo de `POST /malla/validar`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidarRequest {
    pub malla: Malla,
}

#[derive(Debug, Clone, Serialize)]
pub struct AsignaturaDto {
    pub codigo: String,
    pub nombre: String,
    pub creditos: u32,
    pub area: String,
    pub estado: EstadoAsignatura,
    pub seleccionable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SemestreDto {
    pub posicion: usize,
    pub semestre: u32,
    pub puede_tachar: bool,
    pub completado: bool,
    pub asignaturas: Vec<AsignaturaDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MallaEstadoDto {
    pub carrera: String,
    pub semestres: Vec<SemestreDto>,
    pub resumen: ResumenMalla,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccionResponse {
    /// Listas ordenadas para que la respuesta sea estable.
    pub aprobadas: Vec<String>,
    pub en_curso: Vec<String>,
    pub estado: MallaEstadoDto,
}

pub fn parse_json_input<T: serde::de::DeserializeOwned>(json_str: &str) -> Result<T> {
    Ok(serde_json::from_str::<T>(json_str)?)
}

/// Clasifica toda la malla y la aplana en DTOs listos para serializar.
pub fn construir_estado(malla: &Malla, progreso: &Progreso) -> MallaEstadoDto {
    let semestres = classify_malla(malla, &progreso.aprobadas, &progreso.en_curso)
        .into_iter()
        .map(|sc| SemestreDto {
            posicion: sc.posicion,
            semestre: sc.semestre,
            puede_tachar: sc.estado.puede_tachar,
            completado: sc.estado.completado,
            asignaturas: sc
                .asignaturas
                .into_iter()
                .map(|ac| AsignaturaDto {
                    codigo: ac.asignatura.codigo.clone(),
                    nombre: ac.asignatura.nombre.clone(),
                    creditos: ac.asignatura.creditos,
                    area: ac.asignatura.area.clone(),
                    estado: ac.estado,
                    seleccionable: ac.seleccionable,
                })
                .collect(),
        })
        .collect();

    MallaEstadoDto {
        carrera: malla.carrera.clone(),
        semestres,
        resumen: resumir(malla, &progreso.aprobadas, &progreso.en_curso),
    }
}

/// Aplica la acción sobre una copia del progreso recibido y devuelve el
/// nuevo estado. Si la acción se rechaza el progreso original no cambia.
pub fn ejecutar_accion(req: AccionRequest) -> Result<AccionResponse> {
    let mut progreso = Progreso::new(req.aprobadas, req.en_curso);
    let accion = req.accion.resolver();
    progreso.aplicar(&req.malla, &accion)?;

    let estado = construir_estado(&req.malla, &progreso);
    let mut aprobadas: Vec<String> = progreso.aprobadas.into_iter().collect();
    let mut en_curso: Vec<String> = progreso.en_curso.into_iter().collect();
    aprobadas.sort();
    en_curso.sort();
    Ok(AccionResponse { aprobadas, en_curso, estado })
}
