use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

/// Errors from the numeric foundation.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
