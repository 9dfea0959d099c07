//! Axum route handlers for the Persona API.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::persona::export::{export_filename, to_json, to_markdown, ExportFormat};
use crate::persona::filter::PersonaFilter;
use crate::persona::models::{Persona, PersonaFields};
use crate::persona::service::{EnrichOutcome, EnrichPersonaRequest, GeneratePersonaRequest};
use crate::persona::structure::structure;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StructureRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub format: ExportFormat,
}

/// GET /api/v1/personas
///
/// Lists stored personas, newest first. Optional `search`, `minAge`, `maxAge`.
pub async fn handle_list_personas(
    State(state): State<AppState>,
    Query(filter): Query<PersonaFilter>,
) -> Json<Vec<Persona>> {
    Json(state.personas.list(&filter).await)
}

/// POST /api/v1/personas
///
/// Asks the model for a persona description and stores the structured result.
pub async fn handle_generate_persona(
    State(state): State<AppState>,
    Json(request): Json<GeneratePersonaRequest>,
) -> Result<(StatusCode, Json<Persona>), AppError> {
    let persona = state.personas.generate(request).await?;
    Ok((StatusCode::CREATED, Json(persona)))
}

/// GET /api/v1/personas/:id
pub async fn handle_get_persona(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Persona>, AppError> {
    Ok(Json(state.personas.get(id).await?))
}

/// DELETE /api/v1/personas/:id
pub async fn handle_delete_persona(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.personas.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/personas/:id/enrich
///
/// Re-generates the persona from its stored text plus the requested change.
/// On failure the stored persona is left as it was.
pub async fn handle_enrich_persona(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<EnrichPersonaRequest>,
) -> Result<Json<EnrichOutcome>, AppError> {
    Ok(Json(state.personas.enrich(id, request).await?))
}

/// GET /api/v1/personas/:id/export?format=json|markdown|pdf
pub async fn handle_export_persona(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let persona = state.personas.get(id).await?;

    let body = match query.format {
        ExportFormat::Json => to_json(&persona).map_err(|e| AppError::Internal(e.into()))?,
        ExportFormat::Markdown => to_markdown(&persona),
        ExportFormat::Pdf => return Err(AppError::NotImplemented),
    };

    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_filename(&persona.name, query.format)
    );

    Ok((
        [
            (header::CONTENT_TYPE, query.format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

/// POST /api/v1/personas/structure
///
/// Runs extraction over arbitrary text without calling the model or storing
/// anything. Useful for previewing how a description will be parsed.
pub async fn handle_structure_preview(Json(request): Json<StructureRequest>) -> Json<PersonaFields> {
    Json(structure(&request.text))
}
