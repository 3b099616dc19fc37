use serde::Serialize;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Validation failed: {}", summarize_fields(.0))]
    InvalidFields(Vec<FieldError>),
}

fn summarize_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fields_message_lists_every_field() {
        let err = CoreError::InvalidFields(vec![
            FieldError {
                field: "title".into(),
                message: "must not be empty".into(),
            },
            FieldError {
                field: "episode".into(),
                message: "must be at least 1".into(),
            },
        ]);

        assert_eq!(
            err.to_string(),
            "Validation failed: title: must not be empty; episode: must be at least 1"
        );
    }
}
