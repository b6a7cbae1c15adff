//! Message processing
//!
//! Runs a message through the TEA update function, follows up on chained
//! messages, and dispatches any resulting action.

use std::sync::Arc;

use tokio::sync::mpsc;
use verse_client::VerseLookup;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<L>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    lookup: &Arc<L>,
) where
    L: VerseLookup + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), lookup.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
