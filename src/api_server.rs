// Axum API server module
//
// Sessions live in a moka cache (time-to-idle expiry), one
// Arc<tokio::sync::Mutex<Session>> each. The knowledge base and the identity
// gateway are shared read-only.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::identity::{AuthError, IdentityGateway, LocalIdentityProvider, MemoryDocumentStore};
use crate::knowledge::{
    IrrigationMethodProfile, KnowledgeBase, KnowledgeError, ScaleMode, Season, SoilType,
};
use crate::session::{Notice, Session, SessionError};
use crate::view::models::CropDetailView;
use crate::view::{selection_summary, PageId, PageView};
use crate::wizard::{WizardError, WizardEvent};

pub type Gateway = IdentityGateway<LocalIdentityProvider, MemoryDocumentStore>;
pub type SharedSession = Arc<Mutex<Session>>;

const SESSION_ID_LEN: usize = 32;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub kb: Arc<KnowledgeBase>,
    pub gateway: Arc<Gateway>,
    pub sessions: Cache<String, SharedSession>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        tracing::info!("Loading knowledge base...");
        let kb = KnowledgeBase::load();

        let gateway = IdentityGateway::new(LocalIdentityProvider::new(), MemoryDocumentStore::new());
        Self::from_parts(kb, gateway, config)
    }

    pub fn from_parts(kb: KnowledgeBase, gateway: Gateway, config: &ServerConfig) -> Self {
        tracing::info!(
            "Initializing session cache (capacity {}, idle expiry {:?})",
            config.session_capacity,
            config.session_ttl
        );
        let sessions = Cache::builder()
            .max_capacity(config.session_capacity)
            .time_to_idle(config.session_ttl)
            .build();

        Self {
            kb: Arc::new(kb),
            gateway: Arc::new(gateway),
            sessions,
        }
    }
}

fn new_session_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LEN)
        .map(char::from)
        .collect()
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))

        // Session lifecycle and auth
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:id", get(get_session))
        .route("/api/sessions/:id/show-sign-in", post(show_sign_in))
        .route("/api/sessions/:id/show-sign-up", post(show_sign_up))
        .route("/api/sessions/:id/sign-in", post(sign_in))
        .route("/api/sessions/:id/guest", post(sign_in_as_guest))
        .route("/api/sessions/:id/sign-up", post(sign_up))

        // Wizard
        .route("/api/sessions/:id/events", post(apply_event))

        // Read-only knowledge lookups
        .route("/api/recommendations/:scale/:season/:soil", get(get_recommendation))
        .route("/api/crops/:scale/:name", get(get_crop))
        .route("/api/methods/:scale", get(get_methods))

        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Request / Response Bodies
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub page: PageId,
    pub view: PageView,
    pub notice: Option<Notice>,
}

#[derive(Debug, Serialize)]
pub struct SignUpResponse {
    #[serde(flatten)]
    pub session: SessionSnapshot,
    pub profile_persisted: bool,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub scale: ScaleMode,
    pub season: Season,
    pub soil: SoilType,
    pub summary: String,
    pub crops: &'static [&'static str],
    pub tips: &'static [&'static str],
}

fn snapshot(id: &str, session: &Session, kb: &KnowledgeBase) -> Result<SessionSnapshot, AppError> {
    let view = PageView::build(session, kb).map_err(|e| {
        tracing::error!("Cannot render session {}: {}", id, e);
        AppError::Internal(e.to_string())
    })?;
    Ok(SessionSnapshot {
        session_id: id.to_string(),
        page: session.page(),
        view,
        notice: session.notice().cloned(),
    })
}

async fn find_session(state: &AppState, id: &str) -> Result<SharedSession, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {} not found", id)))
}

/// Auth submissions do not queue behind each other
fn claim(session: &Mutex<Session>) -> Result<MutexGuard<'_, Session>, AppError> {
    session
        .try_lock()
        .map_err(|_| AppError::Conflict("A request for this session is already in progress".to_string()))
}

// ============================================================================
// Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionSnapshot>), AppError> {
    let id = new_session_id();
    let session = Session::new();
    let body = snapshot(&id, &session, &state.kb)?;

    state.sessions.insert(id.clone(), Arc::new(Mutex::new(session))).await;
    tracing::debug!("Created session {}", id);
    Ok((StatusCode::CREATED, Json(body)))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let shared = find_session(&state, &id).await?;
    let session = shared.lock().await;
    Ok(Json(snapshot(&id, &session, &state.kb)?))
}

async fn show_sign_in(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let shared = find_session(&state, &id).await?;
    let mut session = claim(&shared)?;
    session.show_sign_in()?;
    Ok(Json(snapshot(&id, &session, &state.kb)?))
}

async fn show_sign_up(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let shared = find_session(&state, &id).await?;
    let mut session = claim(&shared)?;
    session.show_sign_up()?;
    Ok(Json(snapshot(&id, &session, &state.kb)?))
}

async fn sign_in(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SignInRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let shared = find_session(&state, &id).await?;
    let mut session = claim(&shared)?;
    session.sign_in(&state.gateway, &body.email, &body.password).await?;
    tracing::info!("Session {} signed in", id);
    Ok(Json(snapshot(&id, &session, &state.kb)?))
}

async fn sign_in_as_guest(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let shared = find_session(&state, &id).await?;
    let mut session = claim(&shared)?;
    session.sign_in_as_guest(&state.gateway).await?;
    tracing::info!("Session {} signed in as guest", id);
    Ok(Json(snapshot(&id, &session, &state.kb)?))
}

async fn sign_up(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SignUpRequest>,
) -> Result<Json<SignUpResponse>, AppError> {
    let shared = find_session(&state, &id).await?;
    let mut session = claim(&shared)?;
    let outcome = session
        .sign_up(&state.gateway, &body.name, &body.email, &body.password)
        .await?;
    tracing::info!("Session {} registered a new account", id);
    Ok(Json(SignUpResponse {
        session: snapshot(&id, &session, &state.kb)?,
        profile_persisted: outcome.profile_persisted,
    }))
}

async fn apply_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(event): Json<WizardEvent>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let shared = find_session(&state, &id).await?;
    let mut session = shared.lock().await;
    let page = session.handle(&state.kb, &event)?;
    tracing::debug!("Session {}: {} -> {}", id, event.name(), page.element_id());
    Ok(Json(snapshot(&id, &session, &state.kb)?))
}

async fn get_recommendation(
    State(state): State<AppState>,
    Path((scale, season, soil)): Path<(String, String, String)>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let scale: ScaleMode = scale.parse().map_err(lookup_error)?;
    let season: Season = season.parse().map_err(lookup_error)?;
    let soil: SoilType = soil.parse().map_err(lookup_error)?;

    let rec = state
        .kb
        .resolve_recommendation(scale, season, soil)
        .map_err(lookup_error)?;
    Ok(Json(RecommendationResponse {
        scale,
        season,
        soil,
        summary: selection_summary(scale, season, soil),
        crops: rec.crops,
        tips: rec.tips,
    }))
}

async fn get_crop(
    State(state): State<AppState>,
    Path((scale, name)): Path<(String, String)>,
) -> Result<Json<CropDetailView>, AppError> {
    let scale: ScaleMode = scale.parse().map_err(lookup_error)?;
    let profile = state.kb.resolve_crop_detail(scale, &name).map_err(lookup_error)?;
    Ok(Json(profile.into()))
}

async fn get_methods(
    State(state): State<AppState>,
    Path(scale): Path<String>,
) -> Result<Json<&'static [IrrigationMethodProfile]>, AppError> {
    let scale: ScaleMode = scale.parse().map_err(lookup_error)?;
    Ok(Json(state.kb.methods(scale)))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    Unprocessable(String),
    Internal(String),
}

/// Read-only lookups: bad keys are the caller's fault, misses are 404s
fn lookup_error(err: KnowledgeError) -> AppError {
    match err {
        KnowledgeError::UnknownKey { .. } => AppError::BadRequest(err.to_string()),
        _ => AppError::NotFound(err.to_string()),
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        let message = err.to_string();
        match err {
            SessionError::NotSignedIn => AppError::Unauthorized(message),
            SessionError::AlreadySignedIn => AppError::Conflict(message),
            SessionError::Auth(AuthError::Validation(v)) => AppError::Unprocessable(v.to_string()),
            SessionError::Auth(e) => AppError::Unauthorized(e.user_message()),
            SessionError::Wizard(WizardError::Knowledge(k)) if k.is_integrity_defect() => {
                AppError::Internal(message)
            }
            SessionError::Wizard(WizardError::Knowledge(_)) => AppError::BadRequest(message),
            SessionError::Wizard(_) => AppError::Conflict(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
