//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?limit=N` for list endpoints that support an element-count cap.
///
/// Absent or `0` means no limit; negative values are rejected by the
/// handler.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}
