use crate::domain::pagination::{DEFAULT_PAGE_LIMIT, PageRequest};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

/// `limit`/`skip` query string shared by the listing endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Page size; 0 asks for the maximum page.
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            skip: 0,
        }
    }
}

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        PageRequest::new(params.limit, params.skip)
    }
}
