use fintrack_core::{validation::FieldError, Error};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// A form field failed local validation.
    Field(FieldError),
    /// The session component rejected the request.
    Session(Error),
}

impl AppError {
    /// DOM id of the field the error belongs to, if any.
    pub fn field_id(&self) -> Option<&'static str> {
        match self {
            AppError::Field(err) => Some(err.field.id()),
            AppError::Session(_) => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Field(err) => formatter.write_str(&err.message),
            AppError::Session(err) => formatter.write_str(&err.user_message()),
        }
    }
}

impl std::error::Error for AppError {}

impl From<FieldError> for AppError {
    fn from(err: FieldError) -> Self {
        AppError::Field(err)
    }
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        AppError::Session(err)
    }
}
