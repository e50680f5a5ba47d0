// src/presentation/http/controllers/mod.rs
pub mod answers;
pub mod comments;
pub mod questions;
pub mod tags;
pub mod users;
pub mod votes;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// `?userId=` selecting whose vote is reported alongside a tally.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ViewerParams {
    pub user_id: Option<i64>,
}

/// `?limit=` for the per-user listings.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitParams {
    #[serde(default = "default_related_limit")]
    pub limit: u32,
}

fn default_related_limit() -> u32 {
    crate::domain::pagination::DEFAULT_PAGE_LIMIT
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    pub id: i64,
}
