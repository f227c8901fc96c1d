//! The Message Service.
//!
//! This module is the single entry point the transport layer talks to.
//! It is responsible for:
//! 1.  Applying CRUD operations to the in-memory `MessageStore`.
//! 2.  Scheduling a classification job for every new text revision
//!     (creation or update) through the `ClassificationScheduler`.
//!
//! Requests never wait for classification: `create` and `update` return as
//! soon as the message is stored with a pending classification.

use crate::domain::classification::{ClassificationScheduler, Classifier, PalindromeClassifier};
use crate::domain::{Classification, Message, MessageError, MessageId};
use crate::storage::MessageStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

pub struct MessageService {
    store: Arc<MessageStore>,
    scheduler: ClassificationScheduler,
}

impl MessageService {
    /// Creates a service backed by an empty store and the palindrome classifier.
    pub fn new(classification_delay: Duration) -> Self {
        Self::with_classifier(Arc::new(PalindromeClassifier), classification_delay)
    }

    pub fn with_classifier(classifier: Arc<dyn Classifier>, classification_delay: Duration) -> Self {
        let store = Arc::new(MessageStore::new());
        let scheduler = ClassificationScheduler::new(store.clone(), classifier, classification_delay);
        Self { store, scheduler }
    }

    pub fn classification_delay(&self) -> Duration {
        self.scheduler.delay()
    }

    /// Number of classification jobs that have not finished yet.
    pub fn pending_jobs(&self) -> usize {
        self.scheduler.in_flight()
    }

    pub async fn message_count(&self) -> usize {
        self.store.len().await
    }

    pub async fn create(&self, text: String) -> MessageId {
        let revision = self.store.create(text).await;
        let id = revision.id;
        debug!(id, "message created");
        self.scheduler.schedule(revision);
        id
    }

    pub async fn get(&self, id: MessageId) -> Result<Message, MessageError> {
        self.store.get(id).await
    }

    pub async fn list(&self) -> Vec<Message> {
        self.store.list().await
    }

    pub async fn update(&self, id: MessageId, text: String) -> Result<(), MessageError> {
        let revision = self.store.update(id, text).await?;
        debug!(id, generation = revision.generation, "message updated");
        self.scheduler.schedule(revision);
        Ok(())
    }

    pub async fn delete(&self, id: MessageId) -> Result<(), MessageError> {
        self.store.delete(id).await?;
        debug!(id, "message deleted");
        Ok(())
    }

    pub async fn delete_all(&self) -> usize {
        let removed = self.store.delete_all().await;
        debug!(removed, "all messages deleted");
        removed
    }

    /// See [`MessageStore::subscribe`].
    pub async fn subscribe(
        &self,
        id: MessageId,
    ) -> Result<watch::Receiver<Classification>, MessageError> {
        self.store.subscribe(id).await
    }

    /// Stops outstanding classification jobs. Messages they were working on stay pending.
    pub fn shutdown(&self) {
        self.scheduler.shutdown();
    }
}
