//! Message records as seen by the rest of the service.

/// Store-assigned message identifier. Starts at 1 and is never reused.
pub type MessageId = u64;

/// Outcome of classifying a message's current text.
///
/// `Pending` covers the window between a text change and the moment the job
/// for that exact text commits its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Classification {
    #[default]
    Pending,
    Palindrome,
    NotPalindrome,
}

impl Classification {
    pub fn from_verdict(is_palindrome: bool) -> Self {
        if is_palindrome {
            Classification::Palindrome
        } else {
            Classification::NotPalindrome
        }
    }

    /// Tri-state view used on the wire: `None` while pending.
    pub fn as_verdict(self) -> Option<bool> {
        match self {
            Classification::Pending => None,
            Classification::Palindrome => Some(true),
            Classification::NotPalindrome => Some(false),
        }
    }

    pub fn is_pending(self) -> bool {
        matches!(self, Classification::Pending)
    }
}

impl From<bool> for Classification {
    fn from(is_palindrome: bool) -> Self {
        Classification::from_verdict(is_palindrome)
    }
}

/// Point-in-time snapshot of a stored message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub classification: Classification,
}

/// A specific text revision of a message: what a classification job is
/// launched for and what it must still match when it commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub id: MessageId,
    pub generation: u64,
    pub text: String,
}
