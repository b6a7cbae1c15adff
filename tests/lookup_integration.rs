//! Integration tests: real HTTP client against an in-process stub service,
//! driven through the TEA message loop and headless mode

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use verse_app::process::process_message;
use verse_app::{AppState, Message, SearchField};
use verse_client::test_utils::{RunningStub, StubServer};
use verse_client::VerseClient;
use verse_core::VerseQuery;
use verse_explorer::headless::lookup_json;
use verse_explorer::Args;

const VERSE_2_47: &str = r#"{
  "id": 1,
  "chapter": 2,
  "verse": 47,
  "slok": "karmaṇy evādhikāras te\nmā phaleṣu kadācana",
  "transliteration": "karmany evadhikaras te\nma phalesu kadacana",
  "commentaries": [
    { "commentator": "Shankara", "english_translation": "T1" }
  ]
}"#;

async fn start_stub() -> RunningStub {
    StubServer::new()
        .with_route("/api/chapter/2/verse/47", 200, VERSE_2_47)
        .with_route("/api/chapter/1/verse/99", 200, "null")
        .with_route("/api/chapter/3/verse/1", 200, "{not json")
        .with_route("/api/chapter/4/verse/1", 500, "")
        .start()
        .await
        .unwrap()
}

/// Event loop stand-in: feeds messages through `process_message` and waits
/// for each lookup to report back
struct Harness {
    state: AppState,
    tx: mpsc::Sender<Message>,
    rx: mpsc::Receiver<Message>,
    client: Arc<VerseClient>,
}

impl Harness {
    fn new(stub: &RunningStub) -> Self {
        let (tx, rx) = mpsc::channel(16);
        Self {
            state: AppState::new(),
            tx,
            rx,
            client: Arc::new(VerseClient::new(&stub.base_url()).unwrap()),
        }
    }

    fn send(&mut self, message: Message) {
        process_message(&mut self.state, message, &self.tx, &self.client);
    }

    async fn search(&mut self, chapter: &str, verse: &str) {
        self.send(Message::FieldInput {
            field: SearchField::Chapter,
            text: chapter.into(),
        });
        self.send(Message::FieldInput {
            field: SearchField::Verse,
            text: verse.into(),
        });
        self.send(Message::SubmitSearch);
        assert!(self.state.search.loading);

        let completion = tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
            .await
            .expect("lookup did not complete")
            .expect("channel closed");
        self.send(completion);
        assert!(!self.state.search.loading);
    }
}

#[tokio::test]
async fn test_search_displays_record_from_service() {
    let stub = start_stub().await;
    let mut harness = Harness::new(&stub);

    harness.search("2", "47").await;

    let verse = harness.state.verse.as_ref().expect("verse shown");
    assert_eq!(verse.heading(), "Chapter 2, Verse 47");
    assert_eq!(verse.slok, "karmaṇy evādhikāras te\nmā phaleṣu kadācana");
    assert_eq!(verse.transliteration, "karmany evadhikaras te\nma phalesu kadacana");
    assert!(harness.state.search.error.is_none());
    assert_eq!(
        harness.state.search.recent.get(0),
        Some(&VerseQuery::new("2", "47"))
    );
    assert_eq!(stub.requests(), vec!["/api/chapter/2/verse/47"]);

    // Expanding the only commentator exposes just the English translation
    harness.send(Message::ToggleCommentator {
        name: "Shankara".into(),
    });
    let sections = harness.state.verse.as_ref().unwrap().commentaries[0].sections();
    assert!(harness.state.viewer.is_expanded("Shankara"));
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].translation, Some("T1"));
}

#[tokio::test]
async fn test_missing_verse_keeps_previous_record() {
    let stub = start_stub().await;
    let mut harness = Harness::new(&stub);

    harness.search("2", "47").await;
    harness.search("7", "7").await;

    assert_eq!(harness.state.search.error.as_deref(), Some("Verse not found"));
    assert_eq!(harness.state.verse.as_ref().map(|v| v.verse), Some(47));
    assert_eq!(harness.state.search.recent.len(), 1);
}

#[tokio::test]
async fn test_null_body_and_server_error_are_not_found() {
    let stub = start_stub().await;
    let mut harness = Harness::new(&stub);

    harness.search("1", "99").await;
    assert_eq!(harness.state.search.error.as_deref(), Some("Verse not found"));

    harness.search("4", "1").await;
    assert_eq!(harness.state.search.error.as_deref(), Some("Verse not found"));
    assert!(harness.state.verse.is_none());
}

#[tokio::test]
async fn test_malformed_body_reports_decode_failure() {
    let stub = start_stub().await;
    let mut harness = Harness::new(&stub);

    harness.search("3", "1").await;

    let error = harness.state.search.error.clone().expect("error shown");
    assert!(!error.is_empty());
    assert_ne!(error, "Verse not found");
}

#[tokio::test]
async fn test_headless_uses_configured_base_url() {
    let stub = start_stub().await;
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!("[api]\nbase_url = \"{}\"\n", stub.base_url()),
    )
    .unwrap();

    let args = Args {
        config: Some(config_path),
        chapter: Some("2".into()),
        verse: Some("47".into()),
        headless: true,
        ..Args::default()
    };
    let settings = args.resolve_settings().unwrap();
    let client = VerseClient::new(&settings.api.base_url).unwrap();

    let json = lookup_json(&client, &args.initial_query().unwrap())
        .await
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["chapter"], 2);
    assert_eq!(value["commentaries"][0]["commentator"], "Shankara");
}

#[tokio::test]
async fn test_headless_reports_not_found() {
    let stub = start_stub().await;
    let client = VerseClient::new(&stub.base_url()).unwrap();

    let err = lookup_json(&client, &VerseQuery::new("9", "9"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Verse not found");
}
