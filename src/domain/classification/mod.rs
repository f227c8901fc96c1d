//! Asynchronous text classification: the classifier itself and the delayed
//! job scheduler that writes verdicts back into the store.

pub mod classifier;
pub mod scheduler;

pub use classifier::{is_palindrome, Classifier, PalindromeClassifier};
pub use scheduler::ClassificationScheduler;
