//! Shared response types for API handlers.
//!
//! Resources are returned as bare JSON. Deletions answer with
//! [`SuccessResponse`] instead of an empty body.

use serde::Serialize;

/// `{ "success": true }` acknowledgement returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
