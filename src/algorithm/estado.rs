//! Motor de estados de la malla.
//!
//! Funciones puras: reciben la malla (o una asignatura / semestre) junto a los
//! conjuntos `aprobadas` y `en_curso` y devuelven el estado a mostrar. No
//! guardan nada entre llamadas ni modifican los conjuntos recibidos.
//!
//! La clasificación de una asignatura es de un solo salto: sólo consulta los
//! dos conjuntos, nunca el estado de otras asignaturas.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::{Asignatura, EstadoAsignatura, EstadoSemestre, Malla, Semestre};

/// Predicados derivados de una asignatura, en orden de evaluación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Predicados {
    pub aprobada: bool,
    pub en_curso: bool,
    /// Cada prerrequisito está aprobado o en curso (vacuo sin prerrequisitos).
    pub prereqs_satisfechos: bool,
    pub algun_prereq_en_curso: bool,
    pub bloqueo_por_prereq_en_curso: bool,
    /// Todos los prerrequisitos aprobados (o no tiene).
    pub desbloqueada: bool,
}

pub fn predicados(
    asignatura: &Asignatura,
    aprobadas: &HashSet<String>,
    en_curso: &HashSet<String>,
) -> Predicados {
    let aprobada = aprobadas.contains(&asignatura.codigo);
    let en_curso_propio = en_curso.contains(&asignatura.codigo);

    // Un prerrequisito colgante no está en ningún conjunto: queda insatisfecho.
    let prereqs_satisfechos = asignatura
        .prerrequisitos
        .iter()
        .all(|pr| aprobadas.contains(pr) || en_curso.contains(pr));
    let algun_prereq_en_curso = asignatura.prerrequisitos.iter().any(|pr| en_curso.contains(pr));

    let bloqueo_por_prereq_en_curso = prereqs_satisfechos && algun_prereq_en_curso;
    let desbloqueada = asignatura.prerrequisitos.is_empty()
        || (prereqs_satisfechos && !algun_prereq_en_curso);

    Predicados {
        aprobada,
        en_curso: en_curso_propio,
        prereqs_satisfechos,
        algun_prereq_en_curso,
        bloqueo_por_prereq_en_curso,
        desbloqueada,
    }
}

impl Predicados {
    /// Precedencia: aprobada > en curso > prerrequisito en curso > bloqueada > disponible.
    pub fn estado(&self) -> EstadoAsignatura {
        if self.aprobada {
            EstadoAsignatura::Aprobada
        } else if self.en_curso {
            EstadoAsignatura::EnCurso
        } else if self.bloqueo_por_prereq_en_curso {
            EstadoAsignatura::PrerrequisitoEnCurso
        } else if !self.desbloqueada {
            EstadoAsignatura::Bloqueada
        } else {
            EstadoAsignatura::Disponible
        }
    }

    /// Desbloqueo usado por el botón de semestre. Las aprobadas cuentan
    /// siempre como desbloqueadas.
    pub fn desbloqueada_para_semestre(&self) -> bool {
        self.aprobada || self.desbloqueada
    }
}

/// Clasifica una asignatura en uno de los cinco estados.
pub fn classify_course(
    asignatura: &Asignatura,
    aprobadas: &HashSet<String>,
    en_curso: &HashSet<String>,
) -> EstadoAsignatura {
    predicados(asignatura, aprobadas, en_curso).estado()
}

/// Calcula `(puede_tachar, completado)` para un semestre.
///
/// `puede_tachar` exige que todas las asignaturas estén desbloqueadas (las
/// que están en curso cuentan si sus prerrequisitos están aprobados).
/// `completado` exige al menos una desbloqueada y que todas las
/// desbloqueadas estén aprobadas.
pub fn classify_semester(
    semestre: &Semestre,
    aprobadas: &HashSet<String>,
    en_curso: &HashSet<String>,
) -> EstadoSemestre {
    let mut puede_tachar = true;
    let mut desbloqueadas = 0usize;
    let mut desbloqueadas_aprobadas = 0usize;

    for asignatura in &semestre.asignaturas {
        let p = predicados(asignatura, aprobadas, en_curso);
        if p.desbloqueada_para_semestre() {
            desbloqueadas += 1;
            if p.aprobada {
                desbloqueadas_aprobadas += 1;
            }
        } else {
            puede_tachar = false;
        }
    }

    EstadoSemestre {
        puede_tachar,
        completado: desbloqueadas > 0 && desbloqueadas == desbloqueadas_aprobadas,
    }
}

/// Códigos del semestre que el botón "Completar semestre" afecta.
pub fn codigos_desbloqueados(
    semestre: &Semestre,
    aprobadas: &HashSet<String>,
    en_curso: &HashSet<String>,
) -> Vec<String> {
    semestre
        .asignaturas
        .iter()
        .filter(|a| predicados(a, aprobadas, en_curso).desbloqueada_para_semestre())
        .map(|a| a.codigo.clone())
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct AsignaturaClasificada<'a> {
    pub asignatura: &'a Asignatura,
    pub estado: EstadoAsignatura,
    pub seleccionable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SemestreClasificado<'a> {
    pub posicion: usize,
    pub semestre: u32,
    pub estado: EstadoSemestre,
    pub asignaturas: Vec<AsignaturaClasificada<'a>>,
}

/// Pasada completa sobre la malla en orden continuo.
pub fn classify_malla<'a>(
    malla: &'a Malla,
    aprobadas: &HashSet<String>,
    en_curso: &HashSet<String>,
) -> Vec<SemestreClasificado<'a>> {
    malla
        .semestres_continuos()
        .into_iter()
        .map(|sc| {
            let asignaturas = sc
                .semestre
                .asignaturas
                .iter()
                .map(|asignatura| {
                    let estado = classify_course(asignatura, aprobadas, en_curso);
                    AsignaturaClasificada { asignatura, estado, seleccionable: estado.es_seleccionable() }
                })
                .collect();
            SemestreClasificado {
                posicion: sc.posicion,
                semestre: sc.semestre.semestre,
                estado: classify_semester(sc.semestre, aprobadas, en_curso),
                asignaturas,
            }
        })
        .collect()
}
