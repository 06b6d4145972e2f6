use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    app_state::AppState,
    catalog::CATALOG,
    models::{ArticleRecord, Section},
    site_state::{Action, Effect},
    view::ViewModel,
};

// --- Payloads y Respuestas de la API ---

#[derive(Deserialize)]
pub struct NavigatePayload {
    section: String,
}

#[derive(Deserialize)]
pub struct SearchPayload {
    query: String,
}

#[derive(Deserialize)]
pub struct TogglePayload {
    open: bool,
}

#[derive(Deserialize)]
pub struct EmailPayload {
    email: String,
}

/// Vista resultante más los efectos que debe ejecutar el navegador.
#[derive(Serialize)]
pub struct DispatchResponse {
    view: ViewModel,
    effects: Vec<Effect>,
}

// --- Router ---

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/view", get(view_handler))
        .route("/api/catalog", get(catalog_handler))
        .route("/api/navigate", post(navigate_handler))
        .route("/api/search", post(search_handler))
        .route("/api/search-overlay", post(search_overlay_handler))
        .route("/api/mobile-menu", post(mobile_menu_handler))
        .route("/api/newsletter/email", post(newsletter_email_handler))
        .route("/api/newsletter/submit", post(newsletter_submit_handler))
        .route("/api/newsletter/reset", post(newsletter_reset_handler))
        .route("/api/shutdown", post(shutdown_handler))
        .with_state(app_state)
}

// --- Handlers ---

#[axum::debug_handler]
async fn view_handler(State(state): State<AppState>) -> Json<ViewModel> {
    Json(current_view(&state))
}

#[axum::debug_handler]
async fn catalog_handler() -> Json<&'static [ArticleRecord]> {
    Json(&CATALOG[..])
}

#[axum::debug_handler]
async fn navigate_handler(
    State(state): State<AppState>,
    Json(payload): Json<NavigatePayload>,
) -> Json<DispatchResponse> {
    let section = payload.section.parse::<Section>().unwrap_or_else(|e| {
        warn!("{e}; se muestra la portada");
        Section::Home
    });
    respond(&state, Action::Navigate(section))
}

#[axum::debug_handler]
async fn search_handler(
    State(state): State<AppState>,
    Json(payload): Json<SearchPayload>,
) -> Json<DispatchResponse> {
    respond(&state, Action::SubmitSearch(payload.query))
}

#[axum::debug_handler]
async fn search_overlay_handler(
    State(state): State<AppState>,
    Json(payload): Json<TogglePayload>,
) -> Json<DispatchResponse> {
    respond(&state, Action::ToggleSearchOverlay(payload.open))
}

#[axum::debug_handler]
async fn mobile_menu_handler(
    State(state): State<AppState>,
    Json(payload): Json<TogglePayload>,
) -> Json<DispatchResponse> {
    respond(&state, Action::ToggleMobileMenu(payload.open))
}

#[axum::debug_handler]
async fn newsletter_email_handler(
    State(state): State<AppState>,
    Json(payload): Json<EmailPayload>,
) -> Json<DispatchResponse> {
    respond(&state, Action::UpdateEmail(payload.email))
}

#[axum::debug_handler]
async fn newsletter_submit_handler(State(state): State<AppState>) -> Json<DispatchResponse> {
    respond(&state, Action::SubmitNewsletter)
}

#[axum::debug_handler]
async fn newsletter_reset_handler(State(state): State<AppState>) -> Json<DispatchResponse> {
    respond(&state, Action::ResetNewsletter)
}

#[axum::debug_handler]
async fn shutdown_handler(State(state): State<AppState>) -> impl IntoResponse {
    info!("Petición de apagado recibida.");
    state.request_shutdown();
    StatusCode::OK
}

// --- Utilidades ---

fn respond(state: &AppState, action: Action) -> Json<DispatchResponse> {
    let effects = state.dispatch(action);
    Json(DispatchResponse {
        view: current_view(state),
        effects,
    })
}

fn current_view(state: &AppState) -> ViewModel {
    ViewModel::from_state(&state.site(), Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use axum::{body, body::Body, http::Request};
    use serde_json::{json, Value};
    use std::time::Duration;
    use tokio::sync::oneshot;
    use tower::ServiceExt;

    fn test_app() -> (Router, AppState) {
        let config = AppConfig {
            newsletter_delay: Duration::from_millis(1500),
            ..AppConfig::default()
        };
        let (tx, _rx) = oneshot::channel();
        let state = AppState::new(config, tx);
        (create_router(state.clone()), state)
    }

    async fn post_json(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request");
        let response = app.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, serde_json::from_slice(&bytes).expect("json"))
    }

    async fn get_json(app: &Router, uri: &str) -> Value {
        let request = Request::get(uri).body(Body::empty()).expect("request");
        let response = app.clone().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn initial_view_is_home() {
        let (app, _) = test_app();
        let view = get_json(&app, "/api/view").await;
        assert_eq!(view["section"], "home");
        assert_eq!(view["newsletter"]["status"], "idle");
        assert!(view["results"].is_null());
    }

    #[tokio::test]
    async fn navigate_returns_scroll_effect() {
        let (app, _) = test_app();
        let (status, body) = post_json(&app, "/api/navigate", json!({ "section": "sueno" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["view"]["section"], "sueno");
        assert_eq!(body["effects"], json!([{ "type": "scroll_to_top" }]));
    }

    #[tokio::test]
    async fn unknown_section_falls_back_to_home() {
        let (app, state) = test_app();
        post_json(&app, "/api/navigate", json!({ "section": "cookies" })).await;
        let (_, body) = post_json(&app, "/api/navigate", json!({ "section": "blog" })).await;
        assert_eq!(body["view"]["section"], "home");
        assert_eq!(state.site().current_section, Section::Home);
    }

    #[tokio::test]
    async fn search_route_renders_results() {
        let (app, _) = test_app();
        post_json(&app, "/api/search-overlay", json!({ "open": true })).await;
        let (_, body) = post_json(&app, "/api/search", json!({ "query": "NAD+" })).await;
        let view = &body["view"];
        assert_eq!(view["section"], "resultados");
        assert_eq!(view["search_open"], false);
        assert_eq!(view["results"]["query"], "NAD+");
        assert_eq!(view["results"]["cards"].as_array().unwrap().len(), 1);
        assert_eq!(view["results"]["cards"][0]["target"], "suplementos");
    }

    #[tokio::test]
    async fn blank_search_keeps_current_section() {
        let (app, _) = test_app();
        post_json(&app, "/api/navigate", json!({ "section": "protocolos" })).await;
        let (_, body) = post_json(&app, "/api/search", json!({ "query": "   " })).await;
        assert_eq!(body["view"]["section"], "protocolos");
        assert_eq!(body["effects"], json!([]));
    }

    #[tokio::test]
    async fn invalid_newsletter_email_reports_error() {
        let (app, _) = test_app();
        post_json(&app, "/api/newsletter/email", json!({ "email": "not-an-email" })).await;
        let (_, body) = post_json(&app, "/api/newsletter/submit", json!({})).await;
        let form = &body["view"]["newsletter"];
        assert_eq!(form["status"], "error");
        assert_eq!(form["email"], "not-an-email");
        assert_eq!(form["error_message"], "Por favor, ingresa un email válido.");
    }

    #[tokio::test(start_paused = true)]
    async fn newsletter_flow_reaches_success() {
        let (app, _) = test_app();
        post_json(&app, "/api/newsletter/email", json!({ "email": "user@example.com" })).await;
        let (_, body) = post_json(&app, "/api/newsletter/submit", json!({})).await;
        assert_eq!(body["view"]["newsletter"]["status"], "loading");
        assert_eq!(body["view"]["newsletter"]["submit_disabled"], true);

        tokio::time::sleep(Duration::from_millis(1600)).await;
        let view = get_json(&app, "/api/view").await;
        assert_eq!(view["newsletter"]["status"], "success");
        assert_eq!(view["newsletter"]["email"], "");

        let (_, body) = post_json(&app, "/api/newsletter/reset", json!({})).await;
        assert_eq!(body["view"]["newsletter"]["status"], "idle");
    }

    #[tokio::test]
    async fn catalog_lists_all_articles() {
        let (app, _) = test_app();
        let catalog = get_json(&app, "/api/catalog").await;
        let records = catalog.as_array().unwrap();
        assert_eq!(records.len(), 8);
        assert_eq!(records[1]["id"], "suplementos");
        assert_eq!(records[1]["tags"][0], "nad+");
    }
}
