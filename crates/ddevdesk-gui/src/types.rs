//! Response envelope shared by every adapter.

use ddevdesk_core::OperationOutcome;
use serde::{Deserialize, Serialize};

use crate::error::GuiError;

/// Tagged success/failure result returned by every operation.
///
/// Serialized as `{"success": bool, "data"?: T, "error"?: string}` with
/// absent fields omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Success with no payload.
    pub const fn done() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl<T> From<Result<T, GuiError>> for ApiResponse<T> {
    fn from(result: Result<T, GuiError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

impl<T> From<OperationOutcome> for ApiResponse<T> {
    fn from(outcome: OperationOutcome) -> Self {
        match outcome {
            OperationOutcome::Succeeded => Self::done(),
            OperationOutcome::Failed { message } => Self::failure(message),
        }
    }
}
