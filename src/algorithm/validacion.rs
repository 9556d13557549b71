use petgraph::algo::kosaraju_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

use crate::models::Malla;

/// Diagnóstico de integridad de una malla. El motor de estados tolera todos
/// estos problemas; el informe sirve para que el llamador corrija sus datos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InformeMalla {
    pub codigos_duplicados: Vec<String>,
    /// Pares (asignatura, prerrequisito) cuyo prerrequisito no existe.
    pub prerrequisitos_colgantes: Vec<(String, String)>,
    pub autorreferencias: Vec<String>,
    /// Pares (asignatura, prerrequisito) con el prerrequisito en un semestre posterior.
    pub prerrequisitos_posteriores: Vec<(String, String)>,
    /// Grupos de asignaturas que dependen circularmente entre sí.
    pub ciclos: Vec<Vec<String>>,
}

impl InformeMalla {
    pub fn es_valida(&self) -> bool {
        self.codigos_duplicados.is_empty()
            && self.prerrequisitos_colgantes.is_empty()
            && self.autorreferencias.is_empty()
            && self.prerrequisitos_posteriores.is_empty()
            && self.ciclos.is_empty()
    }
}

/// Revisa la malla y construye el grafo de prerrequisitos (arista
/// prerrequisito -> asignatura) para detectar ciclos.
pub fn validar_malla(malla: &Malla) -> InformeMalla {
    let mut informe = InformeMalla::default();
    let mut grafo: DiGraph<String, ()> = DiGraph::new();
    let mut nodos: HashMap<&str, NodeIndex> = HashMap::new();
    let mut posiciones: HashMap<&str, usize> = HashMap::new();

    for sc in malla.semestres_continuos() {
        for asignatura in &sc.semestre.asignaturas {
            if nodos.contains_key(asignatura.codigo.as_str()) {
                if !informe.codigos_duplicados.contains(&asignatura.codigo) {
                    informe.codigos_duplicados.push(asignatura.codigo.clone());
                }
                continue;
            }
            let idx = grafo.add_node(asignatura.codigo.clone());
            nodos.insert(asignatura.codigo.as_str(), idx);
            posiciones.insert(asignatura.codigo.as_str(), sc.posicion);
        }
    }

    for sc in malla.semestres_continuos() {
        for asignatura in &sc.semestre.asignaturas {
            for pr in &asignatura.prerrequisitos {
                if *pr == asignatura.codigo {
                    informe.autorreferencias.push(asignatura.codigo.clone());
                    continue;
                }
                let (Some(&from), Some(&to)) = (nodos.get(pr.as_str()), nodos.get(asignatura.codigo.as_str())) else {
                    informe.prerrequisitos_colgantes.push((asignatura.codigo.clone(), pr.clone()));
                    continue;
                };
                if posiciones.get(pr.as_str()).is_some_and(|&p| p > sc.posicion) {
                    informe.prerrequisitos_posteriores.push((asignatura.codigo.clone(), pr.clone()));
                }
                if grafo.find_edge(from, to).is_none() {
                    grafo.add_edge(from, to, ());
                }
            }
        }
    }

    for componente in kosaraju_scc(&grafo) {
        if componente.len() > 1 {
            let mut codigos: Vec<String> = componente.iter().map(|&i| grafo[i].clone()).collect();
            codigos.sort();
            informe.ciclos.push(codigos);
        }
    }
    informe.ciclos.sort();

    if !informe.es_valida() {
        warn!(
            carrera = %malla.carrera,
            duplicados = informe.codigos_duplicados.len(),
            colgantes = informe.prerrequisitos_colgantes.len(),
            ciclos = informe.ciclos.len(),
            "malla con problemas de integridad"
        );
    }
    informe
}
