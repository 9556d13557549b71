//! Estado del llamador: conjuntos de asignaturas aprobadas y en curso.
//!
//! El motor sólo lee instantáneas de estos conjuntos; toda mutación ocurre
//! aquí, una acción del usuario a la vez.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithm::estado::{classify_course, classify_semester, codigos_desbloqueados};
use crate::error::{MallaError, Result};
use crate::models::{EstadoAsignatura, Malla};

/// Acción del usuario ya independiente del dispositivo de entrada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tipo", rename_all = "snake_case")]
pub enum Accion {
    /// Toque simple: desmarca una en curso; en otro caso es el toggle de aprobación.
    Click { codigo: String },
    ToggleAprobada { codigo: String },
    ToggleEnCurso { codigo: String },
    TacharSemestre { posicion: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progreso {
    #[serde(default)]
    pub aprobadas: HashSet<String>,
    #[serde(default)]
    pub en_curso: HashSet<String>,
}

impl Progreso {
    pub fn new<I, J, S>(aprobadas: I, en_curso: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Progreso {
            aprobadas: aprobadas.into_iter().map(Into::into).collect(),
            en_curso: en_curso.into_iter().map(Into::into).collect(),
        }
    }

    pub fn estado_de(&self, malla: &Malla, codigo: &str) -> Result<EstadoAsignatura> {
        let asignatura = malla
            .buscar(codigo)
            .ok_or_else(|| MallaError::AsignaturaDesconocida(codigo.to_string()))?;
        Ok(classify_course(asignatura, &self.aprobadas, &self.en_curso))
    }

    /// Click principal: aprueba una disponible o desaprueba una aprobada.
    pub fn toggle_aprobada(&mut self, malla: &Malla, codigo: &str) -> Result<()> {
        match self.estado_de(malla, codigo)? {
            EstadoAsignatura::Aprobada => {
                self.aprobadas.remove(codigo);
            }
            EstadoAsignatura::Disponible => {
                self.aprobadas.insert(codigo.to_string());
            }
            estado => {
                return Err(MallaError::NoSeleccionable { codigo: codigo.to_string(), estado });
            }
        }
        Ok(())
    }

    /// Marca o desmarca "en curso". Sólo desde disponible o en curso.
    pub fn toggle_en_curso(&mut self, malla: &Malla, codigo: &str) -> Result<()> {
        match self.estado_de(malla, codigo)? {
            EstadoAsignatura::EnCurso => {
                self.en_curso.remove(codigo);
            }
            EstadoAsignatura::Disponible => {
                self.en_curso.insert(codigo.to_string());
            }
            estado => {
                return Err(MallaError::NoSeleccionable { codigo: codigo.to_string(), estado });
            }
        }
        Ok(())
    }

    /// Toque simple sobre la asignatura. Depende del estado actual.
    pub fn click(&mut self, malla: &Malla, codigo: &str) -> Result<()> {
        match self.estado_de(malla, codigo)? {
            EstadoAsignatura::EnCurso => self.toggle_en_curso(malla, codigo),
            _ => self.toggle_aprobada(malla, codigo),
        }
    }

    /// "Completar semestre": aprueba todas las desbloqueadas o, si ya estaba
    /// completo, las revierte. Se aplica como un único lote.
    pub fn tachar_semestre(&mut self, malla: &Malla, posicion: usize) -> Result<()> {
        let semestre = malla
            .semestre_en(posicion)
            .ok_or(MallaError::SemestreInexistente(posicion))?;
        let estado = classify_semester(semestre, &self.aprobadas, &self.en_curso);
        if !estado.puede_tachar {
            return Err(MallaError::SemestreBloqueado(posicion));
        }

        let codigos = codigos_desbloqueados(semestre, &self.aprobadas, &self.en_curso);
        let mut aprobadas = self.aprobadas.clone();
        let mut en_curso = self.en_curso.clone();
        if estado.completado {
            for codigo in &codigos {
                aprobadas.remove(codigo);
            }
        } else {
            for codigo in codigos.iter() {
                en_curso.remove(codigo);
                aprobadas.insert(codigo.clone());
            }
        }
        debug!(posicion, afectadas = codigos.len(), revertido = estado.completado, "semestre tachado");

        self.aprobadas = aprobadas;
        self.en_curso = en_curso;
        Ok(())
    }

    pub fn aplicar(&mut self, malla: &Malla, accion: &Accion) -> Result<()> {
        match accion {
            Accion::Click { codigo } => self.click(malla, codigo),
            Accion::ToggleAprobada { codigo } => self.toggle_aprobada(malla, codigo),
            Accion::ToggleEnCurso { codigo } => self.toggle_en_curso(malla, codigo),
            Accion::TacharSemestre { posicion } => self.tachar_semestre(malla, *posicion),
        }
    }
}
