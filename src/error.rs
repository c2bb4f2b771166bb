//! Ranker error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RankError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RankError {
    /// Asked for the best purchase while nothing is stored.
    #[error("nothing to buy: add items before asking for the best purchase")]
    EmptyCollection,

    /// An item whose yield or cost cannot produce a finite efficiency.
    #[error("invalid item {name:?}: {reason}")]
    InvalidItem { name: String, reason: &'static str },
}
