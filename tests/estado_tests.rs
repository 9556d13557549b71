use mallagrid::algorithm::{classify_course, classify_malla, classify_semester};
use mallagrid::models::{Asignatura, EstadoAsignatura, Malla, Semestre};
use std::collections::HashSet;

fn set(codigos: &[&str]) -> HashSet<String> {
    codigos.iter().map(|c| c.to_string()).collect()
}

fn a() -> Asignatura {
    Asignatura::new("A", "Programación", 6, &[])
}

fn b() -> Asignatura {
    Asignatura::new("B", "Estructuras de Datos", 6, &["A"])
}

#[test]
fn nada_aprobado_a_disponible_b_bloqueada() {
    let (ap, ec) = (set(&[]), set(&[]));
    assert_eq!(classify_course(&a(), &ap, &ec), EstadoAsignatura::Disponible);
    assert_eq!(classify_course(&b(), &ap, &ec), EstadoAsignatura::Bloqueada);
}

#[test]
fn a_aprobada_desbloquea_b() {
    let (ap, ec) = (set(&["A"]), set(&[]));
    assert_eq!(classify_course(&a(), &ap, &ec), EstadoAsignatura::Aprobada);
    assert_eq!(classify_course(&b(), &ap, &ec), EstadoAsignatura::Disponible);
    assert!(classify_course(&b(), &ap, &ec).es_seleccionable());
}

#[test]
fn a_en_curso_deja_b_en_prerrequisito_en_curso() {
    let (ap, ec) = (set(&[]), set(&["A"]));
    assert_eq!(classify_course(&a(), &ap, &ec), EstadoAsignatura::EnCurso);
    let estado_b = classify_course(&b(), &ap, &ec);
    assert_eq!(estado_b, EstadoAsignatura::PrerrequisitoEnCurso);
    assert!(!estado_b.es_seleccionable());
}

#[test]
fn un_prereq_aprobado_y_otro_en_curso() {
    let c = Asignatura::new("C", "Bases de Datos", 6, &["A", "B"]);
    assert_eq!(classify_course(&c, &set(&["A"]), &set(&["B"])), EstadoAsignatura::PrerrequisitoEnCurso);
}

#[test]
fn un_prereq_pendiente_bloquea_aunque_otro_este_en_curso() {
    let c = Asignatura::new("C", "Bases de Datos", 6, &["A", "B"]);
    assert_eq!(classify_course(&c, &set(&[]), &set(&["B"])), EstadoAsignatura::Bloqueada);
}

#[test]
fn prerrequisito_colgante_queda_bloqueada() {
    let d = Asignatura::new("D", "Taller", 4, &["ZZZ"]);
    assert_eq!(classify_course(&d, &set(&["A", "B"]), &set(&[])), EstadoAsignatura::Bloqueada);
}

#[test]
fn semestre_con_aprobada_y_disponible_puede_tacharse_pero_no_esta_completo() {
    let sem = Semestre { semestre: 1, asignaturas: vec![a(), Asignatura::new("X", "Inglés I", 2, &[])] };
    let estado = classify_semester(&sem, &set(&["A"]), &set(&[]));
    assert!(estado.puede_tachar);
    assert!(!estado.completado);
}

#[test]
fn semestre_con_bloqueada_no_puede_tacharse() {
    let sem = Semestre { semestre: 2, asignaturas: vec![b(), Asignatura::new("Y", "Física", 6, &[])] };
    let estado = classify_semester(&sem, &set(&[]), &set(&[]));
    assert!(!estado.puede_tachar);
    assert!(!estado.completado);
}

#[test]
fn semestre_con_prereq_en_curso_no_puede_tacharse() {
    let sem = Semestre { semestre: 2, asignaturas: vec![b()] };
    let estado = classify_semester(&sem, &set(&[]), &set(&["A"]));
    assert!(!estado.puede_tachar);
}

#[test]
fn semestre_completo_cuando_todas_las_desbloqueadas_estan_aprobadas() {
    let sem = Semestre { semestre: 1, asignaturas: vec![a(), Asignatura::new("X", "Inglés I", 2, &[])] };
    let estado = classify_semester(&sem, &set(&["A", "X"]), &set(&[]));
    assert!(estado.puede_tachar);
    assert!(estado.completado);
}

#[test]
fn aprobada_fuera_de_orden_cuenta_como_desbloqueada() {
    // B aprobada sin haber aprobado A: el botón del semestre sigue habilitado
    let sem = Semestre { semestre: 2, asignaturas: vec![b()] };
    let estado = classify_semester(&sem, &set(&["B"]), &set(&[]));
    assert!(estado.puede_tachar);
    assert!(estado.completado);
}

#[test]
fn classify_malla_numera_y_clasifica_todo() {
    let malla = Malla::from_semestres(
        "ICI",
        vec![
            Semestre { semestre: 1, asignaturas: vec![a()] },
            Semestre { semestre: 2, asignaturas: vec![b()] },
        ],
    );
    let ap = set(&["A"]);
    let ec = set(&[]);
    let clasificada = classify_malla(&malla, &ap, &ec);
    assert_eq!(clasificada.len(), 2);
    assert_eq!(clasificada[0].posicion, 1);
    assert_eq!(clasificada[1].posicion, 2);
    assert!(clasificada[0].estado.completado);
    assert_eq!(clasificada[1].asignaturas[0].estado, EstadoAsignatura::Disponible);
    assert!(clasificada[1].asignaturas[0].seleccionable);
}
