pub mod messages;

pub use messages::{CommitOutcome, MessageStore};
