//! Bank table handlers.

use axum::Json;
use serde::Serialize;

use crate::bank;

/// One entry of the bank table.
#[derive(Debug, Serialize)]
pub struct BankInfo {
    pub code: &'static str,
    pub name: &'static str,
}

/// GET /api/banks - List the known banks.
pub async fn list() -> Json<Vec<BankInfo>> {
    Json(
        bank::BANKS
            .iter()
            .map(|&(code, name)| BankInfo { code, name })
            .collect(),
    )
}
