//! In-memory message table.
//!
//! The table maps ids to individually locked records:
//! - inserts and removals take the table write lock;
//! - reads, text updates and classification commits take the table read lock
//!   plus the lock of the one record they touch, so work on different
//!   messages never serialises on a single mutex.
//!
//! A classification commit checks the record's generation and writes the
//! verdict inside the same record critical section as `update`, which is what
//! makes stale jobs harmless.

use crate::domain::{Classification, Message, MessageError, MessageId, Revision};
use crate::storage::messages::record::MessageRecord;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{watch, Mutex, RwLock};

/// What happened to a classification result handed back to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The verdict is now visible on the message.
    Applied,
    /// The text changed after the job was scheduled; the verdict was dropped.
    Stale { current_generation: u64 },
    /// The message no longer exists; the verdict was dropped.
    Missing,
}

/// The main in-memory store of messages.
pub struct MessageStore {
    records: RwLock<BTreeMap<MessageId, Arc<Mutex<MessageRecord>>>>,
    /// Last id handed out. Never reset, not even by `delete_all`.
    last_id: AtomicU64,
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            last_id: AtomicU64::new(0),
        }
    }

    /// Inserts a new message at generation 1 with a pending classification.
    ///
    /// The id is allocated under the table write lock, so messages become
    /// visible in id order.
    pub async fn create(&self, text: String) -> Revision {
        let record = MessageRecord::new(text);

        let mut records = self.records.write().await;
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let revision = record.revision(id);
        records.insert(id, Arc::new(Mutex::new(record)));

        revision
    }

    pub async fn get(&self, id: MessageId) -> Result<Message, MessageError> {
        let records = self.records.read().await;
        let record = records.get(&id).ok_or(MessageError::NotFound(id))?;
        let record = record.lock().await;
        Ok(record.snapshot(id))
    }

    /// All messages in ascending id order.
    ///
    /// The table read lock is held for the whole walk, so no message can be
    /// added or removed mid-listing, and each entry is copied under its own
    /// record lock.
    pub async fn list(&self) -> Vec<Message> {
        let records = self.records.read().await;
        let mut out = Vec::with_capacity(records.len());
        for (id, record) in records.iter() {
            out.push(record.lock().await.snapshot(*id));
        }
        out
    }

    /// Replaces the text, bumps the generation and resets the classification
    /// to `Pending`. Returns the revision a new job must be scheduled for.
    pub async fn update(&self, id: MessageId, text: String) -> Result<Revision, MessageError> {
        let records = self.records.read().await;
        let record = records.get(&id).ok_or(MessageError::NotFound(id))?;
        let mut record = record.lock().await;
        record.set_text(text);
        Ok(record.revision(id))
    }

    pub async fn delete(&self, id: MessageId) -> Result<(), MessageError> {
        self.records
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(MessageError::NotFound(id))
    }

    /// Removes every message. Returns how many were removed.
    pub async fn delete_all(&self) -> usize {
        let mut records = self.records.write().await;
        let removed = records.len();
        records.clear();
        removed
    }

    /// Writes a verdict for `id` only if the message still exists and is
    /// still at `generation`.
    pub async fn commit_classification(
        &self,
        id: MessageId,
        generation: u64,
        classification: Classification,
    ) -> CommitOutcome {
        let records = self.records.read().await;
        let Some(record) = records.get(&id) else {
            return CommitOutcome::Missing;
        };

        let mut record = record.lock().await;
        if record.generation() != generation {
            return CommitOutcome::Stale {
                current_generation: record.generation(),
            };
        }

        record.resolve(classification);
        CommitOutcome::Applied
    }

    /// Receiver that tracks the message's classification. It closes when the
    /// message is deleted.
    pub async fn subscribe(
        &self,
        id: MessageId,
    ) -> Result<watch::Receiver<Classification>, MessageError> {
        let records = self.records.read().await;
        let record = records.get(&id).ok_or(MessageError::NotFound(id))?;
        let record = record.lock().await;
        Ok(record.subscribe())
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
