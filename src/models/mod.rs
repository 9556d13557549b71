// Estructuras de datos principales de la malla curricular

use serde::{Deserialize, Serialize};

/// Asignatura de la malla. Inmutable una vez cargada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asignatura {
    pub codigo: String,
    pub nombre: String,
    #[serde(default)]
    pub creditos: u32,
    /// Códigos de prerrequisitos. Pueden apuntar a asignaturas de semestres
    /// anteriores o del mismo semestre; referencias colgantes se toleran.
    #[serde(default)]
    pub prerrequisitos: Vec<String>,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub area: String,
}

impl Asignatura {
    /// Constructor corto usado principalmente en pruebas y ejemplos.
    pub fn new(codigo: &str, nombre: &str, creditos: u32, prerrequisitos: &[&str]) -> Self {
        Asignatura {
            codigo: codigo.to_string(),
            nombre: nombre.to_string(),
            creditos,
            prerrequisitos: prerrequisitos.iter().map(|p| p.to_string()).collect(),
            descripcion: String::new(),
            area: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semestre {
    /// Número de semestre tal como viene en la entrada (dentro del año).
    pub semestre: u32,
    #[serde(default)]
    pub asignaturas: Vec<Asignatura>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anio {
    #[serde(default)]
    pub semestres: Vec<Semestre>,
}

/// Malla curricular completa. La agrupación por años sólo define el orden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Malla {
    #[serde(default)]
    pub carrera: String,
    #[serde(rename = "años", alias = "anios", default)]
    pub anios: Vec<Anio>,
}

/// Semestre con su posición en la numeración continua (1, 2, 3, ...).
#[derive(Debug, Clone, Copy)]
pub struct SemestreContinuo<'a> {
    pub posicion: usize,
    pub semestre: &'a Semestre,
}

impl Malla {
    /// Construye una malla de un solo año con los semestres indicados.
    pub fn from_semestres(carrera: &str, semestres: Vec<Semestre>) -> Self {
        Malla {
            carrera: carrera.to_string(),
            anios: vec![Anio { semestres }],
        }
    }

    /// Aplana años/semestres en una lista y los numera de forma continua.
    pub fn semestres_continuos(&self) -> Vec<SemestreContinuo<'_>> {
        self.anios
            .iter()
            .flat_map(|a| a.semestres.iter())
            .enumerate()
            .map(|(idx, semestre)| SemestreContinuo { posicion: idx + 1, semestre })
            .collect()
    }

    pub fn semestre_en(&self, posicion: usize) -> Option<&Semestre> {
        if posicion == 0 {
            return None;
        }
        self.anios.iter().flat_map(|a| a.semestres.iter()).nth(posicion - 1)
    }

    pub fn asignaturas(&self) -> impl Iterator<Item = &Asignatura> {
        self.anios
            .iter()
            .flat_map(|a| a.semestres.iter())
            .flat_map(|s| s.asignaturas.iter())
    }

    /// Primera asignatura con el código dado (los duplicados son un error de datos).
    pub fn buscar(&self, codigo: &str) -> Option<&Asignatura> {
        self.asignaturas().find(|a| a.codigo == codigo)
    }
}

/// Estado visible de una asignatura. Exactamente uno por asignatura.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoAsignatura {
    Aprobada,
    EnCurso,
    /// Todos los prerrequisitos aprobados o en curso, y al menos uno en curso.
    PrerrequisitoEnCurso,
    Bloqueada,
    Disponible,
}

impl EstadoAsignatura {
    /// Cliqueable para el toggle principal de aprobación.
    pub fn es_seleccionable(self) -> bool {
        matches!(self, EstadoAsignatura::Aprobada | EstadoAsignatura::Disponible)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EstadoAsignatura::Aprobada => "aprobada",
            EstadoAsignatura::EnCurso => "en_curso",
            EstadoAsignatura::PrerrequisitoEnCurso => "prerrequisito_en_curso",
            EstadoAsignatura::Bloqueada => "bloqueada",
            EstadoAsignatura::Disponible => "disponible",
        }
    }
}

impl std::fmt::Display for EstadoAsignatura {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Par consumido por el botón "Completar semestre".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstadoSemestre {
    pub puede_tachar: bool,
    pub completado: bool,
}
