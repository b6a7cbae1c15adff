//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;
use verse_client::VerseLookup;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task.
///
/// Each lookup runs to completion on its own task; nothing is cancelled.
/// Results are sent back as messages carrying the request id so the update
/// loop can drop stale ones.
pub fn handle_action<L>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, lookup: Arc<L>)
where
    L: VerseLookup + Send + Sync + 'static,
{
    match action {
        UpdateAction::LookupVerse { request_id, query } => {
            tokio::spawn(async move {
                let message = match lookup.fetch_verse(&query).await {
                    Ok(record) => Message::LookupCompleted {
                        request_id,
                        query,
                        record: Box::new(record),
                    },
                    Err(error) => Message::LookupFailed { request_id, error },
                };

                if msg_tx.send(message).await.is_err() {
                    debug!(request_id, "Event loop gone, dropping lookup result");
                }
            });
        }
    }
}
