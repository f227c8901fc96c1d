//! A single stored message and the state that travels with it.

use crate::domain::{Classification, Message, MessageId, Revision};
use tokio::sync::watch;

pub(crate) struct MessageRecord {
    text: String,
    /// Bumped on every text change; jobs carry the value they were scheduled for.
    generation: u64,
    classification: Classification,
    /// Publishes every classification change to subscribers. Dropped with the record.
    changes: watch::Sender<Classification>,
}

impl MessageRecord {
    pub(crate) fn new(text: String) -> Self {
        let (changes, _) = watch::channel(Classification::Pending);
        Self {
            text,
            generation: 1,
            classification: Classification::Pending,
            changes,
        }
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn snapshot(&self, id: MessageId) -> Message {
        Message {
            id,
            text: self.text.clone(),
            classification: self.classification,
        }
    }

    pub(crate) fn revision(&self, id: MessageId) -> Revision {
        Revision {
            id,
            generation: self.generation,
            text: self.text.clone(),
        }
    }

    /// Replaces the text and drops back to `Pending` for the new generation.
    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
        self.generation += 1;
        self.publish(Classification::Pending);
    }

    pub(crate) fn resolve(&mut self, classification: Classification) {
        self.publish(classification);
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Classification> {
        self.changes.subscribe()
    }

    fn publish(&mut self, classification: Classification) {
        self.classification = classification;
        self.changes.send_replace(classification);
    }
}
