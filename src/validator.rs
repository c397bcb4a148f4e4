use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::AppError;

fn format_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().filter_map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .or_else(|| Some(format!("{} is invalid", field)))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// JSON extractor that rejects malformed bodies before controller logic
/// runs, surfacing field-level messages in the uniform error envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let error_msg = rejection.body_text();

                if error_msg.contains("missing field") {
                    let field = error_msg
                        .split("missing field `")
                        .nth(1)
                        .and_then(|s| s.split('`').next())
                        .unwrap_or("unknown");
                    return AppError::validation(format!("{} is required", field));
                }

                if error_msg.contains("invalid type") {
                    return AppError::validation("Invalid field type in request");
                }

                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return AppError::validation(
                        "Missing 'Content-Type: application/json' header",
                    );
                }

                AppError::validation("Invalid request body")
            })?;

        value
            .validate()
            .map_err(|errors| AppError::validation(format_errors(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, serde::Deserialize, Validate)]
    struct Dto {
        #[validate(email(message = "A valid email is required"))]
        email: String,
        #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
        password: String,
    }

    #[test]
    fn collects_field_messages() {
        let dto = Dto {
            email: "nope".to_string(),
            password: "123".to_string(),
        };
        let errors = dto.validate().unwrap_err();
        let message = format_errors(&errors);
        assert!(message.contains("A valid email is required"));
        assert!(message.contains("Password must be at least 6 characters"));
    }
}
