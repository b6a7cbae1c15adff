//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use verse_app::config::Settings;
use verse_app::process::process_message;
use verse_app::{signals, AppState, Message, SearchField};
use verse_client::VerseLookup;
use verse_core::prelude::*;
use verse_core::VerseQuery;

use super::{event, render};

/// Run the TUI until the user quits.
///
/// `initial_query` prefills the form and submits it right away.
pub async fn run<L>(settings: Settings, lookup: L, initial_query: Option<VerseQuery>) -> Result<()>
where
    L: VerseLookup + Send + Sync + 'static,
{
    install_panic_hook();

    let mut term = ratatui::try_init()
        .map_err(|e| Error::TerminalInit(e.to_string()))?;

    let mut state = AppState::with_settings(settings);
    let lookup = Arc::new(lookup);

    // Unified message channel: lookup completions and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    let signal_task = signals::spawn_signal_handler(msg_tx.clone());

    if let Some(query) = initial_query {
        info!(query = %query.label(), "Submitting initial query");
        prefill_and_submit(&mut state, query, &msg_tx, &lookup);
    }

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, lookup);

    signal_task.abort();
    ratatui::restore();
    result
}

fn prefill_and_submit<L>(
    state: &mut AppState,
    query: VerseQuery,
    msg_tx: &mpsc::Sender<Message>,
    lookup: &Arc<L>,
) where
    L: VerseLookup + Send + Sync + 'static,
{
    let messages = [
        Message::FieldInput {
            field: SearchField::Chapter,
            text: query.chapter,
        },
        Message::FieldInput {
            field: SearchField::Verse,
            text: query.verse,
        },
        Message::SubmitSearch,
    ];
    for message in messages {
        process_message(state, message, msg_tx, lookup);
    }
}

/// Main event loop
fn run_loop<L>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    lookup: Arc<L>,
) -> Result<()>
where
    L: VerseLookup + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Lookup completions and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &lookup);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &lookup);
        }
    }

    debug!("Event loop finished");
    Ok(())
}

/// Restore the terminal before the default panic output
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
