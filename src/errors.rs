use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::domain::errors::DomainError;

/// One failing field in a rejected payload, as exposed in 400 bodies.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Product not found")]
    NotFound,

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound => AppError::NotFound,
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        let mut fields = Vec::new();
        for (field, errors) in e.field_errors() {
            for err in errors {
                fields.push(FieldError {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                });
            }
        }
        // HashMap iteration order is arbitrary; sort so responses are stable.
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::Validation(fields)
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => {
                log::warn!("{}", self);
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": "Not Found",
                    "message": self.to_string(),
                    "statusCode": 404
                }))
            }
            AppError::Validation(fields) => {
                log::warn!("rejected invalid payload: {} field error(s)", fields.len());
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "Bad Request",
                    "message": self.to_string(),
                    "statusCode": 400,
                    "errors": fields
                }))
            }
            // Detail goes to the log only; the body stays generic.
            AppError::Internal(_) => {
                log::error!("{}", self);
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Internal Server Error",
                    "message": "An unexpected error occurred",
                    "statusCode": 500
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 3))]
        code_only: String,
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(range(min = 0.0, message = "Price must be non-negative"))]
        price: f64,
    }

    #[test]
    fn not_found_returns_404() {
        let resp = AppError::NotFound.error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_returns_400() {
        let err = AppError::Validation(vec![FieldError {
            field: "name".to_string(),
            message: "Name is required".to_string(),
        }]);
        assert_eq!(
            err.error_response().status(),
            actix_web::http::StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("something went wrong".to_string());
        assert_eq!(
            err.error_response().status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_display() {
        assert_eq!(AppError::NotFound.to_string(), "Product not found");
    }

    #[test]
    fn internal_error_display() {
        assert_eq!(
            AppError::Internal("msg".to_string()).to_string(),
            "Internal error: msg"
        );
    }

    #[test]
    fn domain_not_found_maps_to_app_not_found() {
        let app_err: AppError = DomainError::NotFound.into();
        assert!(matches!(app_err, AppError::NotFound));
    }

    #[test]
    fn domain_internal_maps_to_app_internal() {
        let app_err: AppError = DomainError::Internal("oops".to_string()).into();
        assert!(matches!(app_err, AppError::Internal(_)));
    }

    #[test]
    fn validation_errors_flatten_to_sorted_field_list() {
        let probe = Probe {
            code_only: "ab".to_string(),
            name: "".to_string(),
            price: -0.01,
        };
        let errors = probe.validate().expect_err("probe should fail validation");

        let app_err: AppError = errors.into();
        let AppError::Validation(fields) = app_err else {
            panic!("expected Validation variant");
        };

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].field, "code_only");
        assert_eq!(fields[1].field, "name");
        assert_eq!(fields[1].message, "Name is required");
        assert_eq!(fields[2].field, "price");
        assert_eq!(fields[2].message, "Price must be non-negative");
    }

    #[test]
    fn message_falls_back_to_code_when_unset() {
        let probe = Probe {
            code_only: "x".to_string(),
            name: "ok".to_string(),
            price: 1.0,
        };
        let errors = probe.validate().expect_err("probe should fail validation");

        let app_err: AppError = errors.into();
        let AppError::Validation(fields) = app_err else {
            panic!("expected Validation variant");
        };

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, "code_only");
        assert_eq!(fields[0].message, "length");
    }
}
