//! Integration tests: undo/redo through a drawing session (art-editor).
//!
//! Drives the Session with pointer events and checks that history moves the
//! live scene and the committed surface back and forth together.

use art_core::{CanvasConfig, Point, Scene};
use art_editor::{History, Session, ToolKind};
use art_render::{Surface, render};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn small_session() -> Session {
    init_logging();
    Session::new(CanvasConfig {
        width: 64,
        height: 64,
        ..CanvasConfig::default()
    })
}

fn drag(session: &mut Session, tool: ToolKind, from: (f64, f64), to: (f64, f64)) {
    session.set_tool(tool);
    session.pointer_down(Point::new(from.0, from.1));
    session.pointer_move(Point::new(to.0, to.1));
    session.pointer_release(Point::new(to.0, to.1));
}

fn replayed(session: &Session) -> Surface {
    let mut surface = Surface::from_config(session.config());
    render(&mut surface, session.scene());
    surface
}

// ─── Basic undo/redo ────────────────────────────────────────────────────

#[test]
fn undo_restores_previous_scene() {
    let mut session = small_session();
    drag(&mut session, ToolKind::Rectangle, (5.0, 5.0), (20.0, 20.0));
    let after_first = session.scene().clone();
    drag(&mut session, ToolKind::Circle, (30.0, 30.0), (50.0, 30.0));
    assert_eq!(session.scene().len(), 2);

    assert!(session.undo());
    assert_eq!(session.scene(), &after_first);
    assert!(session.surface() == &replayed(&session));

    assert!(session.redo());
    assert_eq!(session.scene().len(), 2);
    assert!(session.surface() == &replayed(&session));
}

#[test]
fn undo_past_oldest_is_noop() {
    let mut session = small_session();
    drag(&mut session, ToolKind::Line, (0.0, 0.0), (10.0, 10.0));
    assert!(session.undo());
    assert!(session.scene().is_empty());
    assert!(!session.can_undo());
    assert!(!session.undo());
    assert!(session.scene().is_empty());
}

#[test]
fn new_drawing_truncates_redo_branch() {
    let mut session = small_session();
    drag(&mut session, ToolKind::Line, (0.0, 0.0), (10.0, 10.0));
    drag(&mut session, ToolKind::Star, (20.0, 20.0), (40.0, 40.0));
    session.undo();
    assert!(session.can_redo());

    drag(&mut session, ToolKind::Ellipse, (10.0, 40.0), (30.0, 60.0));
    assert!(!session.can_redo());
    assert!(!session.redo());
    let names: Vec<&str> = session.scene().iter().map(|s| s.kind.name()).collect();
    assert_eq!(names, vec!["line", "ellipse"]);
}

#[test]
fn clear_is_undoable() {
    let mut session = small_session();
    drag(&mut session, ToolKind::Triangle, (5.0, 5.0), (25.0, 25.0));
    let before = session.scene().clone();
    session.clear();
    assert!(session.scene().is_empty());
    assert!(session.undo());
    assert_eq!(session.scene(), &before);
}

#[test]
fn ids_are_not_reused_after_undo() {
    let mut session = small_session();
    drag(&mut session, ToolKind::Line, (0.0, 0.0), (10.0, 10.0));
    let first = session.scene().last().unwrap().id;
    session.undo();
    drag(&mut session, ToolKind::Line, (0.0, 0.0), (10.0, 10.0));
    let second = session.scene().last().unwrap().id;
    assert!(second > first);
}

// ─── History engine properties ──────────────────────────────────────────

#[test]
fn n_records_then_m_undos_lands_on_step_n_minus_m() {
    let scenes: Vec<Scene> = (0..6)
        .map(|n| {
            let mut session = small_session();
            for i in 0..n {
                let offset = f64::from(i) * 5.0;
                drag(&mut session, ToolKind::Line, (offset, 0.0), (offset, 10.0));
            }
            session.scene().clone()
        })
        .collect();

    let mut history = History::new(50);
    for scene in &scenes[1..] {
        history.record(scene);
    }
    // N = 5 records on top of the initial snapshot
    for m in 1..=5 {
        let restored = history.undo().unwrap();
        assert_eq!(history.cursor(), 5 - m);
        assert_eq!(restored, scenes[5 - m]);
    }
    assert!(history.undo().is_none());
    assert_eq!(history.cursor(), 0);
}

#[test]
fn history_cap_comes_from_config() {
    init_logging();
    let mut session = Session::new(CanvasConfig {
        width: 32,
        height: 32,
        history_limit: 3,
        ..CanvasConfig::default()
    });
    for i in 0..5 {
        let x = f64::from(i) * 4.0;
        drag(&mut session, ToolKind::Line, (x, 0.0), (x, 30.0));
    }
    assert_eq!(session.history().len(), 3);
    assert!(session.undo());
    assert!(session.undo());
    assert!(!session.undo());
    assert_eq!(session.scene().len(), 3);
}
