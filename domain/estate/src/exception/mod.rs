use crate::model::vo::ValidationErrors;

pub type EstateResult<T> = Result<T, EstateException>;

#[derive(Debug, thiserror::Error)]
pub enum EstateException {
    #[error("Invalid payload: {0}")]
    Validation(ValidationErrors),

    #[error("There is no {entity} with id: {id}.")]
    NotFound { entity: &'static str, id: i32 },

    /// The store refused a write because a referenced row is gone.
    #[error("Referenced row does not exist: {reason}")]
    Reference { reason: String },

    #[error("Estate internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<ValidationErrors> for EstateException {
    fn from(errors: ValidationErrors) -> Self {
        EstateException::Validation(errors)
    }
}

impl From<anyhow::Error> for EstateException {
    fn from(e: anyhow::Error) -> Self {
        match e.downcast::<EstateException>() {
            Ok(e) => e,
            Err(e) => EstateException::InternalError { source: e },
        }
    }
}
