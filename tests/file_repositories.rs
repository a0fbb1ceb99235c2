//! Integration tests for the engine over a data directory on disk.
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::path::Path;
use std::sync::Arc;

use stageflow::config::Config;
use stageflow::services::{
    BroadcastNotifier, FileContentRepository, FileScenarioRepository, SharedSettings,
};
use stageflow::types::{Direction, DisplayConstraints, ScenarioId};
use stageflow::{DisplayItem, PresentationEngine, ScreenState, ScreenStore};
use tempfile::TempDir;

fn write(path: &Path, body: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, body).unwrap();
}

fn data_dir() -> (TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default().with_data_dir(dir.path());

    write(
        &config.texts_dir().join("songs/amazing-grace__42.json"),
        r#"{
            "title": "Amazing Grace",
            "content": "Amazing grace how sweet the sound\nThat saved a wretch like me\n\nI once was lost but now am found"
        }"#,
    );
    write(
        &config.scenarios_dir().join("sunday__sun1.json"),
        r#"{
            "id": "sun1",
            "title": "Sunday Morning",
            "steps": [
                {"heading": "Welcome"},
                {"text": "songs/amazing-grace__42"},
                {"video": "media/announcements.mp4"}
            ]
        }"#,
    );

    (dir, config)
}

fn engine(config: &Config, notifier: Arc<BroadcastNotifier>) -> PresentationEngine {
    PresentationEngine::new(
        Arc::new(ScreenStore::new()),
        Arc::new(FileContentRepository::new(config.texts_dir())),
        Arc::new(FileScenarioRepository::new(config.scenarios_dir())),
        Arc::new(SharedSettings::new(DisplayConstraints::new(20, 2))),
        notifier,
    )
}

#[tokio::test]
async fn plays_scenario_from_disk() {
    let (_dir, config) = data_dir();
    let notifier = Arc::new(BroadcastNotifier::new());
    let mut updates = notifier.subscribe();
    let engine = engine(&config, Arc::clone(&notifier));

    let state = engine.set_scenario(&ScenarioId::new("sun1"), None).await.unwrap();
    assert_eq!(state.current_item(), Some(&DisplayItem::heading("Welcome")));

    let state = engine.navigate_step(Direction::Next).await;
    let text = state.current_text().unwrap();
    assert_eq!(text.content_id.as_str(), "42");
    assert_eq!(text.total_slides, 2);
    assert_eq!(text.total_pages, 2);
    assert_eq!(text.content, "Amazing grace how\nsweet the sound");

    let state = engine.navigate_slide(Direction::Next).await;
    assert_eq!(state.current_text().unwrap().content, "That saved a wretch\nlike me");

    let state = engine.navigate_step(Direction::Next).await;
    assert_eq!(
        state.current_item(),
        Some(&DisplayItem::Video { path: "media/announcements.mp4".to_string() })
    );

    let mut received = 0;
    while updates.try_recv().is_ok() {
        received += 1;
    }
    assert_eq!(received, 4);
}

#[tokio::test]
async fn set_text_by_slugged_reference() {
    let (_dir, config) = data_dir();
    let engine = engine(&config, Arc::new(BroadcastNotifier::new()));

    let state = engine.set_text("songs/amazing-grace__42", Some(1)).await.unwrap();
    let text = state.current_text().unwrap();
    assert_eq!(text.slide_index, 1);
    assert_eq!(text.content, "I once was lost but\nnow am found");
    assert!(matches!(state, ScreenState::Single(ref single) if !single.visible));
}

#[tokio::test]
async fn external_edit_is_seen_on_next_navigation() {
    let (_dir, config) = data_dir();
    let engine = engine(&config, Arc::new(BroadcastNotifier::new()));
    engine.set_text("42", Some(0)).await.unwrap();

    write(
        &config.texts_dir().join("songs/amazing-grace__42.json"),
        r#"{"title": "Amazing Grace", "content": "short\n\nnew second slide"}"#,
    );

    let state = engine.navigate_slide(Direction::Next).await;
    let text = state.current_text().unwrap();
    assert_eq!((text.slide_index, text.page_index), (1, 0));
    assert_eq!(text.content, "new second slide");
}

#[tokio::test]
async fn missing_data_dir_is_not_found() {
    let config = Config::default().with_data_dir("/tmp/nonexistent_stageflow_data");
    let engine = engine(&config, Arc::new(BroadcastNotifier::new()));
    assert!(engine.set_text("42", None).await.unwrap_err().is_not_found());
    assert!(engine
        .set_scenario(&ScenarioId::new("sun1"), None)
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn scenario_navigates_when_declared_id_differs_from_file_name() {
    let (_dir, config) = data_dir();
    write(
        &config.scenarios_dir().join("evening__eve1.json"),
        r#"{
            "id": "evening-service",
            "title": "Evening",
            "steps": [{"heading": "A"}, {"heading": "B"}]
        }"#,
    );
    let engine = engine(&config, Arc::new(BroadcastNotifier::new()));

    let state = engine.set_scenario(&ScenarioId::new("eve1"), None).await.unwrap();
    let ScreenState::Scenario(screen) = state else { panic!("expected scenario mode") };
    assert_eq!(screen.scenario_id.as_str(), "eve1");

    let state = engine.navigate_step(Direction::Next).await;
    let ScreenState::Scenario(screen) = state else { panic!("expected scenario mode") };
    assert_eq!(screen.step_index, 1);
    assert_eq!(screen.current_item, DisplayItem::heading("B"));
}
