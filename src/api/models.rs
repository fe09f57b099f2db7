use crate::storage::{ExpenseRecord, JsonFileStorage, StorageError};
use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{error, warn};

pub const INVALID_JSON: &str = "Invalid JSON format";
pub const INVALID_TITLE: &str = "title is required and must be a non-empty string";
pub const INVALID_AMOUNT: &str = "amount is required and must be a non-negative number";
pub const INVALID_DATE: &str = "date is required and must be a string";

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<JsonFileStorage>,
}

/// Raw body of `POST /api/records`, checked field by field before anything is stored
#[derive(Debug)]
pub struct AddRecordRequest {
    fields: Map<String, Value>,
}

/// Response after adding a record
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AddRecordRequest {
    /// Accepts only a non-empty JSON object, whatever the declared content type.
    pub fn from_body(body: &[u8]) -> Result<Self, String> {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) if !fields.is_empty() => Ok(Self { fields }),
            _ => Err(INVALID_JSON.to_string()),
        }
    }

    /// Validate the request. The first failing field wins.
    pub fn validate(mut self) -> Result<ExpenseRecord, String> {
        let title = match self.fields.remove("title") {
            Some(Value::String(title)) if !title.trim().is_empty() => title.trim().to_string(),
            _ => return Err(INVALID_TITLE.to_string()),
        };

        // Value::Bool never lands here, so `true` is not treated as 1
        let amount = match self.fields.remove("amount") {
            Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v >= 0.0) => n,
            _ => return Err(INVALID_AMOUNT.to_string()),
        };

        let date = match self.fields.remove("date") {
            Some(Value::String(date)) => date,
            _ => return Err(INVALID_DATE.to_string()),
        };

        Ok(ExpenseRecord {
            title,
            amount,
            date,
        })
    }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
    /// Extractor failures such as an oversized body, keeping their own status
    Rejected(StatusCode, String),
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => {
                warn!(reason = %msg, "Rejected request");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Rejected(status, msg) => {
                warn!(%status, reason = %msg, "Rejected request body");
                (status, msg)
            }
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(body: Value) -> Result<ExpenseRecord, String> {
        AddRecordRequest::from_body(body.to_string().as_bytes())?.validate()
    }

    #[test]
    fn rejects_non_object_bodies() {
        for body in ["", "not json", "[]", "42", "\"text\"", "null", "{}"] {
            let err = AddRecordRequest::from_body(body.as_bytes()).unwrap_err();
            assert_eq!(err, INVALID_JSON, "body: {body:?}");
        }
    }

    #[test]
    fn rejection_table() {
        let cases = [
            (json!({"title": "", "amount": 5, "date": "2024-01-01"}), INVALID_TITLE),
            (json!({"title": "   ", "amount": 5, "date": "2024-01-01"}), INVALID_TITLE),
            (json!({"title": 7, "amount": 5, "date": "2024-01-01"}), INVALID_TITLE),
            (json!({"amount": 5, "date": "2024-01-01"}), INVALID_TITLE),
            (json!({"title": "Coffee", "amount": -1, "date": "2024-01-01"}), INVALID_AMOUNT),
            (json!({"title": "Coffee", "amount": "5", "date": "2024-01-01"}), INVALID_AMOUNT),
            (json!({"title": "Coffee", "amount": true, "date": "2024-01-01"}), INVALID_AMOUNT),
            (json!({"title": "Coffee", "amount": null, "date": "2024-01-01"}), INVALID_AMOUNT),
            (json!({"title": "Coffee", "date": "2024-01-01"}), INVALID_AMOUNT),
            (json!({"title": "Coffee", "amount": 5, "date": 123}), INVALID_DATE),
            (json!({"title": "Coffee", "amount": 5}), INVALID_DATE),
        ];

        for (body, expected) in cases {
            assert_eq!(validate(body.clone()).unwrap_err(), expected, "body: {body}");
        }
    }

    #[test]
    fn first_failure_wins() {
        let err = validate(json!({"title": "", "amount": -1, "date": 1})).unwrap_err();
        assert_eq!(err, INVALID_TITLE);
    }

    #[test]
    fn accepts_zero_and_trims_title() {
        let record = validate(json!({"title": "  Bus fare ", "amount": 0, "date": ""})).unwrap();
        assert_eq!(record.title, "Bus fare");
        assert_eq!(record.amount.as_u64(), Some(0));
        assert_eq!(record.date, "");
    }

    #[test]
    fn keeps_float_amount_verbatim() {
        let record = validate(json!({"title": "Tea", "amount": 2.75, "date": "today"})).unwrap();
        assert_eq!(record.amount.as_f64(), Some(2.75));
    }
}
