//! "Get App" modal: validation, simulated send, and overlay behavior.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use study_monk::app::{App, AppMessage};
use study_monk::assets::AssetCatalog;
use study_monk::config::AppConfig;
use study_monk::models::LeadStep;
use study_monk::view_state::ViewKind;

fn fast_app() -> App {
    let config = AppConfig::new().with_lead_delay(Duration::ZERO);
    App::with_config_and_assets(config, AssetCatalog::default())
}

fn ctrl(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    text.chars().for_each(|c| press(app, KeyCode::Char(c)));
}

#[tokio::test]
async fn test_valid_email_reaches_download_step() {
    let mut app = fast_app();
    ctrl(&mut app, 'g');
    assert!(app.controller.is_modal_open());

    type_text(&mut app, "crammer@uni.edu");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.controller.lead().step, LeadStep::Sending);

    let rx = app.message_rx.as_mut().unwrap();
    let msg = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("send timer did not fire")
        .expect("channel closed");
    assert!(matches!(msg, AppMessage::LeadCaptured));
    app.handle_message(msg);

    assert_eq!(app.controller.lead().step, LeadStep::Download);
    assert_eq!(app.controller.lead().email, "crammer@uni.edu");
}

#[test]
fn test_invalid_email_shows_error_and_stays() {
    let mut app = fast_app();
    ctrl(&mut app, 'g');
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.controller.lead().error.as_deref(),
        Some("Please fill out this field.")
    );

    type_text(&mut app, "not-an-email");
    assert!(app.controller.lead().error.is_none());
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.controller.lead().step, LeadStep::Capture);
    assert!(app.controller.lead().error.is_some());
}

#[test]
fn test_modal_does_not_change_view() {
    let mut app = fast_app();
    ctrl(&mut app, 'r');
    assert_eq!(app.controller.kind(), ViewKind::BlogList);

    ctrl(&mut app, 'g');
    ctrl(&mut app, 'g');
    assert!(app.controller.is_modal_open());
    assert_eq!(app.controller.kind(), ViewKind::BlogList);

    press(&mut app, KeyCode::Esc);
    assert!(!app.controller.is_modal_open());
    assert_eq!(app.controller.kind(), ViewKind::BlogList);
}

#[test]
fn test_keys_go_to_modal_not_view() {
    let mut app = fast_app();
    ctrl(&mut app, 'g');
    // 'q' would quit from most views
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit);
    assert_eq!(app.controller.lead().email, "q");
}

#[test]
fn test_paste_fills_email_field() {
    let mut app = fast_app();
    ctrl(&mut app, 'g');
    app.handle_paste("me@school.edu\n");
    assert_eq!(app.controller.lead().email, "me@school.edu");
}
