#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid date {0:?}")]
    InvalidDate(String),

    #[error("Unknown feed filter {0:?}")]
    UnknownFilter(String),

    #[error("Comment is empty")]
    EmptyComment,
}
