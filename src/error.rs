//! Domain-specific errors for the account lookup benchmark.
//!
//! "Account not found" is deliberately absent: lookups return `Option`,
//! and an absent account is a normal outcome, not a failure.

use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The account number does not start with a decimal digit, so the
    /// bucketed backend cannot place it in one of its ten partitions.
    InvalidAccountNumber,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidAccountNumber => {
                write!(f, "account number must start with a decimal digit")
            }
        }
    }
}

impl std::error::Error for Error {}
