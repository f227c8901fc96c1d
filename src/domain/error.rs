use crate::domain::message::MessageId;
use thiserror::Error;

/// Errors surfaced by message operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// The operation referenced an id that is not (or no longer) in the store.
    #[error("message {0} not found")]
    NotFound(MessageId),
}
