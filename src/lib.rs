pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::message_service::MessageService;
pub use domain::classification::{is_palindrome, Classifier, PalindromeClassifier};
pub use domain::{Classification, Message, MessageError, MessageId};
pub use storage::MessageStore;
