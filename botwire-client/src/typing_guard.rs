//! RAII chat action guard.
//!
//! The Bot API shows a chat action ("typing…", "sending photo…") for five
//! seconds or until the bot's next message arrives. [`TypingGuard`] keeps one
//! alive for as long as the guard lives by re-sending it every 4 seconds.
//!
//! # Example
//! ```rust,no_run
//! use botwire_client::Client;
//!
//! async fn handle(client: Client, chat_id: i64) {
//!     let _typing = client.typing(chat_id).await.unwrap();
//!
//!     do_expensive_work().await;
//!     // `_typing` is dropped here and the refresh stops.
//! }
//! # async fn do_expensive_work() {}
//! ```

use std::sync::Arc;
use std::time::Duration;

use botwire_types::types::{ChatAction, ChatId};
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::{Client, InvocationError};

const REFRESH_EVERY: Duration = Duration::from_secs(4);

// ─── TypingGuard ──────────────────────────────────────────────────────────────

/// Scoped chat action. Drop it to stop refreshing.
///
/// There is no "cancel" action in the Bot API; the indicator disappears on
/// its own within five seconds or when the bot sends a message.
pub struct TypingGuard {
    stop: Arc<Notify>,
    task: Option<JoinHandle<()>>,
}

impl TypingGuard {
    /// Send `action` to `chat_id` and keep repeating it until the guard is dropped.
    pub async fn start(
        client:  &Client,
        chat_id: impl Into<ChatId>,
        action:  ChatAction,
    ) -> Result<Self, InvocationError> {
        let chat_id = chat_id.into();
        client.send_chat_action(chat_id.clone(), action).await?;

        let stop   = Arc::new(Notify::new());
        let stop2  = stop.clone();
        let client = client.clone();

        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = tokio::time::sleep(REFRESH_EVERY) => {
                        if let Err(e) = client.send_chat_action(chat_id.clone(), action).await {
                            tracing::warn!("[botwire] chat action refresh for {chat_id} failed: {e}");
                            break;
                        }
                    }
                    _ = stop2.notified() => break,
                }
            }
        });

        Ok(Self { stop, task: Some(task) })
    }

    /// Stop refreshing now without waiting for the drop.
    pub fn cancel(&mut self) {
        self.stop.notify_one();
    }
}

impl Drop for TypingGuard {
    fn drop(&mut self) {
        self.stop.notify_one();
        if let Some(t) = self.task.take() {
            t.abort();
        }
    }
}

// ─── Client extension ─────────────────────────────────────────────────────────

impl Client {
    /// Show "typing…" in `chat_id` until the returned guard is dropped.
    pub async fn typing(&self, chat_id: impl Into<ChatId>) -> Result<TypingGuard, InvocationError> {
        TypingGuard::start(self, chat_id, ChatAction::Typing).await
    }

    pub async fn uploading_document(&self, chat_id: impl Into<ChatId>) -> Result<TypingGuard, InvocationError> {
        TypingGuard::start(self, chat_id, ChatAction::UploadDocument).await
    }

    pub async fn uploading_photo(&self, chat_id: impl Into<ChatId>) -> Result<TypingGuard, InvocationError> {
        TypingGuard::start(self, chat_id, ChatAction::UploadPhoto).await
    }
}
