//! Result type aliases for the bank services.

use crate::BankError;

/// A specialized `Result` type for bank service operations.
pub type BankResult<T> = Result<T, BankError>;
