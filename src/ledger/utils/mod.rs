/* Types */

// Amounts are kept in the smallest denomination of the currency (e.g. cents).
pub type Amount = i64;
pub type HandlerResult = Result<(), LedgerError>;

#[derive(thiserror::Error, Debug)]
pub enum LedgerError {
    #[error("Please enter an amount!")]
    EmptyAmount,
    #[error("'{0}' is not a valid number!")]
    InvalidAmount(String),
    #[error("{0}")]
    UserError(String),
    #[error("IO error: {0}")]
    Io(std::io::Error),
}

impl From<std::io::Error> for LedgerError {
    fn from(io_error: std::io::Error) -> LedgerError {
        LedgerError::Io(io_error)
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(json_error: serde_json::Error) -> LedgerError {
        LedgerError::UserError(json_error.to_string())
    }
}

pub mod amounts;
pub mod format;
