//! JSON body extractor that runs schema validation.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use hirehub_core::error::AppError;

/// Maps a Rust field name to the name the field carries on the wire.
///
/// Validation details must name fields exactly as the client sent them,
/// so every validated request body declares its serde renames here.
pub trait WireNames {
    fn wire_name(field: &str) -> &str {
        field
    }
}

/// `Json<T>` that additionally runs `T::validate()`.
///
/// Both failure modes map to 400: a deserialization failure carries the
/// parse message, a validation failure carries an ordered `details` list
/// of field-level violations surfaced verbatim to the client. Input is
/// never mutated.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + WireNames,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        value.validate().map_err(|errors| {
            AppError::validation("Request validation failed")
                .with_details(serde_json::json!({ "details": field_violations::<T>(&errors) }))
        })?;

        Ok(Self(value))
    }
}

/// Flatten `ValidationErrors` into `{field, message}` entries, ordered by
/// wire field name for a deterministic response.
fn field_violations<T: WireNames>(errors: &ValidationErrors) -> Vec<serde_json::Value> {
    let mut violations: Vec<(String, String)> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| {
                let wire = T::wire_name(field.as_ref());
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {wire}"));
                (wire.to_string(), message)
            })
        })
        .collect();
    violations.sort();

    violations
        .into_iter()
        .map(|(field, message)| serde_json::json!({ "field": field, "message": message }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, serde::Deserialize, Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "Title is required"))]
        title: String,
        #[validate(length(min = 1, message = "Company is required"))]
        company: String,
        #[validate(length(min = 1, message = "Type is required"))]
        kind: String,
    }

    impl WireNames for Probe {
        fn wire_name(field: &str) -> &str {
            match field {
                "kind" => "type",
                other => other,
            }
        }
    }

    #[test]
    fn violations_use_wire_names_and_are_ordered() {
        let probe = Probe {
            title: String::new(),
            company: String::new(),
            kind: String::new(),
        };
        let errors = probe.validate().unwrap_err();
        let violations = field_violations::<Probe>(&errors);

        assert_eq!(violations.len(), 3);
        assert_eq!(violations[0]["field"], "company");
        assert_eq!(violations[0]["message"], "Company is required");
        assert_eq!(violations[1]["field"], "title");
        assert_eq!(violations[2]["field"], "type");
        assert_eq!(violations[2]["message"], "Type is required");
    }
}
