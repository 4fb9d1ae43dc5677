use serde::Deserialize;

/// Query parameters for paginated listings.
#[derive(Debug, Deserialize)]
pub struct PaginationParam {
    /// Maximum number of entries on the page.
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// 0-based page index.
    #[serde(default)]
    pub page: u64,
}

fn default_limit() -> u64 {
    5
}
