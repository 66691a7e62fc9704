/// Errors from building a document out of invalid parts.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DocError {
    #[error("Nest offset must be non-negative, but was {0}.")]
    NegativeOffset(i64),
}
