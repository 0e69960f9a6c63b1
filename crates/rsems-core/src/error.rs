use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("severity {0} is outside range [0, 3]")]
    InvalidSeverity(i64),
}
