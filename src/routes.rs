use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use include_dir::{include_dir, Dir};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    catalog::{self, StarterTemplate},
    error::ApiError,
    models::{GenerationRequest, GenerationResult, RenderTemplateRequest, TemplateQuery},
    pipeline::{Pipeline, PipelineError, TEMPLATE_PROVIDER},
};

static DEMO_SITES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/demo-sites");

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}

impl AppState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline: Arc::new(pipeline) }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate", post(generate))
        .route("/api/templates", get(list_templates))
        .route("/api/templates/:id/render", post(render_template))
        .route("/api/demo-site/", get(demo_site_without_id))
        .route("/api/demo-site/:id", get(demo_site))
        .route("/api/health", get(health))
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

pub async fn generate(
    State(state): State<AppState>,
    body: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResult>, ApiError> {
    // An unreadable body carries no prompt.
    let Json(req) = body.map_err(|e| {
        tracing::warn!("⚠️ Rejected generate body: {}", e.body_text());
        ApiError::from(PipelineError::MissingPrompt)
    })?;

    let result = state.pipeline.generate(&req).await?;
    tracing::info!("✅ Generated site via {} ({} chars)", result.provider, result.code.len());
    Ok(Json(result))
}

pub async fn list_templates(Query(query): Query<TemplateQuery>) -> Json<Vec<StarterTemplate>> {
    let found = catalog::filter(query.category.as_deref(), query.industry.as_deref(), query.q.as_deref());
    Json(found.into_iter().copied().collect())
}

pub async fn render_template(
    Path(id): Path<String>,
    body: Option<Json<RenderTemplateRequest>>,
) -> Result<Json<Value>, ApiError> {
    let template = catalog::find(&id).ok_or_else(|| ApiError::NotFound(format!("Template not found: {id}")))?;
    let project_name = body.and_then(|Json(b)| b.project_name);

    let code = catalog::render(template, project_name.as_deref())
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    tracing::info!("📄 Rendered template {}", template.id);
    Ok(Json(json!({
        "code": code,
        "provider": TEMPLATE_PROVIDER,
        "metadata": { "templateUsed": template.id },
    })))
}

pub async fn demo_site_without_id() -> Response {
    (StatusCode::BAD_REQUEST, "Demo site ID is required").into_response()
}

pub async fn demo_site(Path(id): Path<String>) -> Response {
    if id.trim().is_empty() {
        return demo_site_without_id().await;
    }
    // Ids name a bundled file; anything path-like is simply unknown.
    let valid = id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    let file = valid.then(|| DEMO_SITES.get_file(format!("{id}.html"))).flatten();

    match file.and_then(|f| f.contents_utf8()) {
        Some(html) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/html; charset=utf-8"),
                (header::CACHE_CONTROL, "public, max-age=3600"),
            ],
            html,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Demo site not found").into_response(),
    }
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "providers": state.pipeline.active_providers(),
    }))
}
