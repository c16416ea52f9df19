//! Behavior every backend variant shares.

use std::time::Duration;

use loom_tui::prelude::*;
use pretty_assertions::assert_eq;

fn quick() -> BackendConfig {
    BackendConfig::default().with_poll_timeout(Duration::from_millis(5))
}

fn session(width: u16, height: u16) -> SessionInfo {
    SessionInfo::new("alice", "en_US", width, height)
}

fn remote(width: u16, height: u16) -> (RemoteBackend<Vec<u8>>, flume::Sender<Event>) {
    let (tx, rx) = flume::unbounded();
    let backend = RemoteBackend::new(Vec::new(), rx, session(width, height), quick()).unwrap();
    (backend, tx)
}

fn assert_unusable_after_shutdown(backend: &mut dyn Backend) {
    backend.shutdown().unwrap();
    assert!(backend.is_shut_down());

    assert!(matches!(backend.flush_screen(), Err(Error::Shutdown)));
    let mut events = Vec::new();
    assert!(matches!(backend.get_events(&mut events), Err(Error::Shutdown)));
    assert!(events.is_empty());

    backend.shutdown().unwrap();
}

#[test]
fn shutdown_is_final_for_every_backend() {
    let mut embedded = EmbeddedBackend::new(session(10, 2), quick());
    assert_unusable_after_shutdown(&mut embedded);

    let (mut remote, _tx) = remote(10, 2);
    assert_unusable_after_shutdown(&mut remote);
}

#[test]
fn clean_flush_writes_nothing() {
    let (mut backend, _tx) = remote(8, 2);
    backend.screen_mut().put_string_at(0, 0, "hi", Style::default());
    backend.flush_screen().unwrap();

    let written = backend.writer().len();
    backend.flush_screen().unwrap();
    assert_eq!(backend.writer().len(), written);
}

#[test]
fn resize_updates_screen_and_session() {
    let mut embedded = EmbeddedBackend::new(session(10, 2), quick());
    embedded.injector().resize(30, 6).unwrap();
    let mut events = Vec::new();
    embedded.get_events(&mut events).unwrap();

    assert_eq!(events, vec![Event::Resize(30, 6)]);
    assert_eq!(embedded.screen().size(), (30, 6));
    assert_eq!(embedded.session_info().window_width(), 30);
    assert_eq!(embedded.session_info().window_height(), 6);

    let (mut remote, tx) = remote(10, 2);
    tx.send(Event::Resize(12, 4)).unwrap();
    let mut events = Vec::new();
    remote.get_events(&mut events).unwrap();

    assert_eq!(remote.screen().size(), (12, 4));
    assert_eq!(remote.session_info().window_width(), 12);
    assert_eq!(remote.session_info().window_height(), 4);
}

#[test]
fn remote_disconnect_follows_pending_events() {
    let (mut backend, tx) = remote(10, 2);
    tx.send(KeyEvent::char('a').into()).unwrap();
    tx.send(KeyEvent::char('b').into()).unwrap();
    drop(tx);

    let mut events = Vec::new();
    backend.get_events(&mut events).unwrap();
    assert_eq!(events.len(), 2);

    events.clear();
    assert!(matches!(backend.get_events(&mut events), Err(Error::Disconnected(_))));
    assert!(matches!(backend.flush_screen(), Err(Error::Failed(_))));
    backend.shutdown().unwrap();
}

#[test]
fn embedded_display_mirrors_screen() {
    let mut backend = EmbeddedBackend::new(session(12, 2), quick());
    backend.screen_mut().put_string_at(1, 1, "ready", Style::default());
    backend.flush_screen().unwrap();

    assert_eq!(backend.display_row(1).as_deref(), Some(" ready      "));
    assert_eq!(backend.frames(), 1);

    backend.flush_screen().unwrap();
    assert_eq!(backend.frames(), 1);
}

#[test]
fn application_drives_a_menu_item() {
    let backend = EmbeddedBackend::new(session(20, 3), quick());
    let injector = backend.injector();
    injector.send(MouseEvent::up(MouseButton::Left, 4, 1)).unwrap();

    let theme = Theme::default();
    let mut exit = MenuItem::new(MenuItemConfig::for_id(MenuId::EXIT), 2, 1, "E&xit")
        .with_key(KeyEvent::alt('x'));
    let mut selections: Vec<MenuEvent> = Vec::new();

    let mut app = Application::new(backend);
    app.run_with_events(|screen, events| {
        for event in events {
            if let Event::Mouse(mouse) = event {
                route_mouse_up(&mut exit, mouse, Point::ZERO, &mut selections);
            }
        }
        render_widget(&exit, screen, &DrawContext::new(&theme));
        selections.is_empty()
    })
    .unwrap();

    assert_eq!(selections, vec![MenuEvent::new(MenuId::EXIT)]);
    let backend = app.into_backend();
    assert!(backend.is_shut_down());
    assert!(backend.display_row(1).unwrap().contains("Exit"));
    assert!(injector.send(KeyEvent::char('q')).is_err());
}
