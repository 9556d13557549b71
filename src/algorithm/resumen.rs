// Resumen de créditos y conteo de estados para la cabecera de la malla

use std::collections::HashSet;

use serde::Serialize;

use crate::algorithm::estado::classify_course;
use crate::models::{EstadoAsignatura, Malla};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResumenMalla {
    pub creditos_totales: u32,
    pub creditos_aprobados: u32,
    pub creditos_en_curso: u32,
    pub aprobadas: usize,
    pub en_curso: usize,
    pub prerrequisito_en_curso: usize,
    pub bloqueadas: usize,
    pub disponibles: usize,
    /// Créditos aprobados sobre créditos totales (0.0 - 100.0).
    pub porcentaje_avance: f64,
}

pub fn resumir(malla: &Malla, aprobadas: &HashSet<String>, en_curso: &HashSet<String>) -> ResumenMalla {
    let mut r = ResumenMalla::default();
    for asignatura in malla.asignaturas() {
        r.creditos_totales += asignatura.creditos;
        match classify_course(asignatura, aprobadas, en_curso) {
            EstadoAsignatura::Aprobada => {
                r.aprobadas += 1;
                r.creditos_aprobados += asignatura.creditos;
            }
            EstadoAsignatura::EnCurso => {
                r.en_curso += 1;
                r.creditos_en_curso += asignatura.creditos;
            }
            EstadoAsignatura::PrerrequisitoEnCurso => r.prerrequisito_en_curso += 1,
            EstadoAsignatura::Bloqueada => r.bloqueadas += 1,
            EstadoAsignatura::Disponible => r.disponibles += 1,
        }
    }
    if r.creditos_totales > 0 {
        r.porcentaje_avance = f64::from(r.creditos_aprobados) * 100.0 / f64::from(r.creditos_totales);
    }
    r
}
