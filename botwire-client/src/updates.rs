//! Long-polling update stream.
//!
//! [`Updates`] wraps `getUpdates`: it remembers the highest `update_id` it
//! has handed out and asks for `offset = last + 1` next time, which also
//! confirms everything already delivered. Each response batch is buffered
//! and drained one update at a time.
//!
//! Errors are surfaced to the caller as-is; the stream does not retry or
//! sleep on its own. Calling [`Updates::next`] again after an error resumes
//! from the same offset.

use std::collections::VecDeque;

use botwire_types::methods::GetUpdates;
use botwire_types::types::Update;

use crate::{Client, InvocationError};

/// Server-side long-polling timeout used unless overridden.
pub const DEFAULT_POLL_TIMEOUT: i32 = 30;

// ─── Updates ──────────────────────────────────────────────────────────────────

/// Async update stream created by [`Client::updates`].
///
/// # Example
/// ```rust,no_run
/// # async fn f(client: botwire_client::Client) -> Result<(), botwire_client::InvocationError> {
/// let mut updates = client.updates().allowed_updates(["message", "callback_query"]);
/// loop {
///     let update = updates.next().await?;
///     println!("update #{}", update.update_id);
/// }
/// # }
/// ```
pub struct Updates {
    client:          Client,
    offset:          Option<i64>,
    timeout:         i32,
    limit:           Option<i32>,
    allowed_updates: Option<Vec<String>>,
    buffer:          VecDeque<Update>,
}

impl Updates {
    fn new(client: Client) -> Self {
        Self {
            client,
            offset:          None,
            timeout:         DEFAULT_POLL_TIMEOUT,
            limit:           None,
            allowed_updates: None,
            buffer:          VecDeque::new(),
        }
    }

    /// Long-polling timeout in seconds. `0` means short polling.
    pub fn timeout(mut self, secs: i32) -> Self {
        self.timeout = secs;
        self
    }

    /// Maximum batch size, 1-100.
    pub fn limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Only receive these update types, e.g. `["message", "edited_message"]`.
    pub fn allowed_updates<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_updates = Some(kinds.into_iter().map(Into::into).collect());
        self
    }

    /// Start from `offset` instead of the first unconfirmed update.
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// The offset the next `getUpdates` call will send, if any.
    pub fn next_offset(&self) -> Option<i64> {
        self.offset
    }

    /// Wait for the next update.
    pub async fn next(&mut self) -> Result<Update, InvocationError> {
        loop {
            if let Some(update) = self.buffer.pop_front() {
                return Ok(update);
            }
            self.poll().await?;
        }
    }

    async fn poll(&mut self) -> Result<(), InvocationError> {
        let mut req = GetUpdates::new().timeout(self.timeout);
        req.offset = self.offset;
        req.limit = self.limit;
        req.allowed_updates = self.allowed_updates.clone();

        let batch = self.client.invoke(&req).await?;
        if let Some(last) = batch.iter().map(|u| u.update_id).max() {
            self.offset = Some(last + 1);
        }
        tracing::debug!("[botwire] getUpdates: {} new, next offset {:?}", batch.len(), self.offset);
        self.buffer.extend(batch);
        Ok(())
    }
}

// ─── Client extension ─────────────────────────────────────────────────────────

impl Client {
    /// Return a long-polling [`Updates`] stream.
    ///
    /// Only one consumer should poll a bot at a time; a webhook must not be
    /// set while polling.
    pub fn updates(&self) -> Updates {
        Updates::new(self.clone())
    }
}
