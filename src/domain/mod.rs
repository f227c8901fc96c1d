//! Domain types and the classification pipeline.

pub mod classification;
pub mod error;
pub mod message;

pub use error::MessageError;
pub use message::{Classification, Message, MessageId, Revision};
