mod record;
pub mod store;

pub use store::{CommitOutcome, MessageStore};
