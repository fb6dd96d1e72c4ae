use thiserror::Error;

/// Expected, per-field validation failures for balance form input.
///
/// The messages are surfaced to the end user verbatim, so their wording is
/// part of the contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BalanceInputError {
    #[error("Balance value is required")]
    Required,
    #[error("Invalid balance value: {0}")]
    Invalid(String),
}
