mod controller_flow;

use city_zoom::{AppCommand, AppController, AppIntent, AppState};

#[test]
fn test_page_loaded_logs_load_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PageLoaded {
                url: "https://example.org/".to_string(),
            },
        )
        .expect("PageLoaded sollte ohne Fehler durchlaufen");

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match &last.command {
        AppCommand::LoadPage { url } => assert_eq!(url, "https://example.org/"),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_invalid_page_url_propagates_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::PageLoaded {
            url: "keine url".to_string(),
        },
    );

    assert!(result.is_err());
    assert!(state.page.is_none());
}

#[test]
fn test_handle_intent_drains_effects() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let effects = controller
        .handle_intent(
            &mut state,
            AppIntent::PageLoaded {
                url: "https://example.org/".to_string(),
            },
        )
        .expect("PageLoaded sollte ohne Fehler durchlaufen");

    assert!(!effects.is_empty());
    assert!(state.effects.is_empty());
}

#[test]
fn test_pointer_events_without_session_do_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let effects = controller
        .handle_intent(&mut state, AppIntent::EscapePressed)
        .expect("EscapePressed sollte ohne Fehler durchlaufen");

    assert!(effects.is_empty());
    assert!(state.command_log.is_empty());
}
