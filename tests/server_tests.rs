use actix_web::{test, App};
use mallagrid::server::configurar_rutas;
use serde_json::{json, Value};

fn malla_json() -> Value {
    json!({
        "carrera": "Ingeniería Civil Informática",
        "años": [
            { "semestres": [
                { "semestre": 1, "asignaturas": [
                    { "codigo": "CIT1000", "nombre": "Programación", "creditos": 6, "prerrequisitos": [], "descripcion": "", "area": "Informática" }
                ] },
                { "semestre": 2, "asignaturas": [
                    { "codigo": "CIT1010", "nombre": "Programación Avanzada", "creditos": 6, "prerrequisitos": ["CIT1000"], "descripcion": "", "area": "Informática" }
                ] }
            ] }
        ]
    })
}

#[actix_web::test]
async fn estado_clasifica_la_malla() {
    let app = test::init_service(App::new().configure(configurar_rutas)).await;
    let req = test::TestRequest::post()
        .uri("/malla/estado")
        .set_json(json!({ "malla": malla_json(), "en_curso": ["CIT1000"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["semestres"][0]["posicion"], 1);
    assert_eq!(body["semestres"][0]["asignaturas"][0]["estado"], "en_curso");
    assert_eq!(body["semestres"][1]["asignaturas"][0]["estado"], "prerrequisito_en_curso");
    assert_eq!(body["semestres"][1]["asignaturas"][0]["seleccionable"], false);
    assert_eq!(body["semestres"][1]["puede_tachar"], false);
    assert_eq!(body["resumen"]["creditos_en_curso"], 6);
}

#[actix_web::test]
async fn accion_devuelve_conjuntos_actualizados() {
    let app = test::init_service(App::new().configure(configurar_rutas)).await;
    let req = test::TestRequest::post()
        .uri("/malla/accion")
        .set_json(json!({
            "malla": malla_json(),
            "aprobadas": [],
            "en_curso": [],
            "accion": { "tipo": "toggle_aprobada", "codigo": "CIT1000" }
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["aprobadas"], json!(["CIT1000"]));
    assert_eq!(body["estado"]["semestres"][1]["asignaturas"][0]["estado"], "disponible");
}

#[actix_web::test]
async fn gesto_presion_larga_marca_en_curso() {
    let app = test::init_service(App::new().configure(configurar_rutas)).await;
    let req = test::TestRequest::post()
        .uri("/malla/accion")
        .set_json(json!({
            "malla": malla_json(),
            "accion": { "tipo": "gesto", "gesto": "presion_larga", "codigo": "CIT1000" }
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["en_curso"], json!(["CIT1000"]));
}

#[actix_web::test]
async fn accion_no_permitida_es_conflicto() {
    let app = test::init_service(App::new().configure(configurar_rutas)).await;
    let req = test::TestRequest::post()
        .uri("/malla/accion")
        .set_json(json!({
            "malla": malla_json(),
            "accion": { "tipo": "toggle_aprobada", "codigo": "CIT1010" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 409);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap_or("").contains("CIT1010"));
}

#[actix_web::test]
async fn codigo_inexistente_es_404() {
    let app = test::init_service(App::new().configure(configurar_rutas)).await;
    let req = test::TestRequest::post()
        .uri("/malla/accion")
        .set_json(json!({
            "malla": malla_json(),
            "accion": { "tipo": "toggle_en_curso", "codigo": "NOPE" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn json_invalido_es_400() {
    let app = test::init_service(App::new().configure(configurar_rutas)).await;
    let req = test::TestRequest::post()
        .uri("/malla/estado")
        .set_json(json!({ "aprobadas": ["X"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap_or("").starts_with("invalid JSON body"));
}

#[actix_web::test]
async fn validar_reporta_colgantes() {
    let mut malla = malla_json();
    malla["años"][0]["semestres"][1]["asignaturas"][0]["prerrequisitos"] = json!(["CIT1000", "ZZZ"]);
    let app = test::init_service(App::new().configure(configurar_rutas)).await;
    let req = test::TestRequest::post()
        .uri("/malla/validar")
        .set_json(json!({ "malla": malla }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["valida"], false);
    assert_eq!(body["informe"]["prerrequisitos_colgantes"], json!([["CIT1010", "ZZZ"]]));
}

#[actix_web::test]
async fn help_sin_config_usa_duracion_por_defecto() {
    let app = test::init_service(App::new().configure(configurar_rutas)).await;
    let req = test::TestRequest::get().uri("/help").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["presion_larga_ms"], 1200);
    assert!(body["routes"]["POST /malla/estado"].is_string());
}

#[actix_web::test]
async fn gesto_click_sobre_en_curso_la_desmarca() {
    let app = test::init_service(App::new().configure(configurar_rutas)).await;
    let req = test::TestRequest::post()
        .uri("/malla/accion")
        .set_json(json!({
            "malla": malla_json(),
            "en_curso": ["CIT1000"],
            "accion": { "tipo": "gesto", "gesto": "click", "codigo": "CIT1000" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["en_curso"], json!([]));
    assert_eq!(body["aprobadas"], json!([]));
    assert_eq!(body["estado"]["semestres"][0]["asignaturas"][0]["estado"], "disponible");
}

#[actix_web::test]
async fn validar_malla_correcta() {
    let app = test::init_service(App::new().configure(configurar_rutas)).await;
    let req = test::TestRequest::post()
        .uri("/malla/validar")
        .set_json(json!({ "malla": malla_json() }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["valida"], true);
    assert_eq!(body["informe"]["ciclos"], json!([]));
    assert_eq!(body["informe"]["prerrequisitos_colgantes"], json!([]));
}
