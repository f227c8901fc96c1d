/// Trait that defines the contract for a text classifier.
///
/// Implementations must be pure: the same text always yields the same verdict,
/// and classifying has no side effects. The scheduler only calls `classify`
/// once the configured delay has elapsed.
pub trait Classifier: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Returns `true` when the text belongs to the positive class.
    fn classify(&self, text: &str) -> bool;
}

/// Returns `true` iff `text` reads the same backward as forward.
///
/// Comparison is over Unicode scalar values with no case or whitespace
/// folding. The empty string is a palindrome.
pub fn is_palindrome(text: &str) -> bool {
    text.chars().eq(text.chars().rev())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PalindromeClassifier;

impl Classifier for PalindromeClassifier {
    fn name(&self) -> &str {
        "palindrome"
    }

    fn classify(&self, text: &str) -> bool {
        is_palindrome(text)
    }
}
