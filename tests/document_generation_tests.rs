use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use lexgt::config::Config;
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn spawn_app(generator_base_url: &str) -> Router {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    config.generator.base_url = generator_base_url.to_string();
    config.generator.api_key = "test-key".to_string();

    let state = lexgt::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    lexgt::api::router(state)
}

async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::json!({"username": "admin", "password": "cambiame"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login should set a session cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

async fn generate_pdf(app: &Router, cookie: &str, payload: serde_json::Value) -> Vec<u8> {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/documents")
                .header("Content-Type", "application/json")
                .header(header::COOKIE, cookie)
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );

    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

fn extract_all_text(bytes: &[u8]) -> String {
    let doc = lopdf::Document::load_mem(bytes).expect("response should be a parseable PDF");
    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    doc.extract_text(&pages).expect("PDF text extraction")
}

#[tokio::test]
async fn generated_body_lands_in_the_pdf() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "generationConfig": {"temperature": 1.0, "maxOutputTokens": 8192}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{
                        "text": "## CONTRATO\n\n**PRIMERO.** Las partes convienen el arrendamiento."
                    }]
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = spawn_app(&server.uri()).await;
    let cookie = login(&app).await;

    let bytes = generate_pdf(
        &app,
        &cookie,
        serde_json::json!({
            "kind": "arrendamiento",
            "fields": {
                "party_one": "Carlos Ruiz",
                "party_two": "Ana Morales",
                "subject": "casa en zona 10",
                "amount": 3500.0,
            },
        }),
    )
    .await;

    assert!(bytes.starts_with(b"%PDF-"));

    let text = extract_all_text(&bytes);
    assert!(text.contains("Las partes convienen el arrendamiento"));
    // Markdown markers are stripped before layout.
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn endpoint_failure_downgrades_to_placeholder() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .expect(1)
        .mount(&server)
        .await;

    let app = spawn_app(&server.uri()).await;
    let cookie = login(&app).await;

    let bytes = generate_pdf(
        &app,
        &cookie,
        serde_json::json!({
            "kind": "demanda_laboral",
            "fields": {
                "party_one": "Pedro Gómez",
                "party_two": "Industrias Sur S.A.",
                "grounds": "despido injustificado",
                "relief": "pago de prestaciones",
            },
        }),
    )
    .await;

    assert!(bytes.starts_with(b"%PDF-"));
    let text = extract_all_text(&bytes);
    assert!(text.contains("Contenido no generado debido a un error."));
}

#[tokio::test]
async fn malformed_candidate_also_downgrades_to_placeholder() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": []
        })))
        .mount(&server)
        .await;

    let app = spawn_app(&server.uri()).await;
    let cookie = login(&app).await;

    let bytes = generate_pdf(
        &app,
        &cookie,
        serde_json::json!({
            "kind": "mandato",
            "fields": {"party_one": "Lucía Estrada"},
        }),
    )
    .await;

    let text = extract_all_text(&bytes);
    assert!(text.contains("Contenido no generado debido a un error."));
}
