//! Bank slip handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    boleto::{Boleto, BoletoSummary},
    batch::validate_batch,
    symbol::{ItfEncoder, SurfaceRenderer},
};

use super::super::state::AppState;
use super::error_response;

const SURFACE: &str = "barcode";

/// Body of the batch validation endpoint.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub numbers: Vec<String>,
}

/// Outcome for one input of a batch.
#[derive(Debug, Serialize)]
pub struct ValidationResult {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boleto: Option<BoletoSummary>,
}

/// GET /api/boleto/:number - Decode a bank slip number.
pub async fn show(Path(number): Path<String>) -> Response {
    match Boleto::new(&number) {
        Ok(boleto) => Json(boleto.summary()).into_response(),
        Err(e) => error_response(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()),
    }
}

/// GET /api/boleto/:number/barcode.png - Render the barcode symbol.
pub async fn barcode_png(
    State(state): State<Arc<AppState>>,
    Path(number): Path<String>,
) -> Response {
    let boleto = match Boleto::new(&number) {
        Ok(boleto) => boleto,
        Err(e) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()),
    };

    let config = state.config.symbol;
    let png = tokio::task::spawn_blocking(move || {
        let mut renderer = SurfaceRenderer::new(config);
        renderer.add_captioned_surface(SURFACE, boleto.pretty_number());

        boleto
            .render_symbol(&ItfEncoder, &mut renderer, SURFACE)
            .and_then(|()| renderer.png(SURFACE))
    })
    .await;

    match png {
        Ok(Ok(bytes)) => ([(header::CONTENT_TYPE, "image/png")], bytes).into_response(),
        Ok(Err(e)) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &format!("Render task failed: {}", e),
        ),
    }
}

/// POST /api/boleto/validate - Validate many numbers at once.
pub async fn validate(Json(request): Json<ValidateRequest>) -> Response {
    let ValidateRequest { numbers } = request;

    // Batch validation fans out on rayon; keep it off the async workers.
    let results = tokio::task::spawn_blocking(move || {
        let results = validate_batch(&numbers);
        numbers
            .into_iter()
            .zip(results)
            .map(|(input, result)| match result {
                Ok(boleto) => ValidationResult {
                    input,
                    valid: true,
                    error: None,
                    boleto: Some(boleto.summary()),
                },
                Err(e) => ValidationResult {
                    input,
                    valid: false,
                    error: Some(e.to_string()),
                    boleto: None,
                },
            })
            .collect::<Vec<_>>()
    })
    .await;

    match results {
        Ok(results) => Json(results).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    }
}
