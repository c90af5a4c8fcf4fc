//! Integration tests: scene replay and flood fill on a surface (art-render).
//!
//! Replay must be a pure function of the scene: repeated renders agree byte
//! for byte, and incremental painting lands on the same pixels as a replay.

use art_core::*;
use art_render::{Surface, fill_changes, fill_surface, paint_shape, render};
use pretty_assertions::assert_eq;

const WHITE_PX: [u8; 4] = [255, 255, 255, 255];

fn drawing() -> Scene {
    let mut ids = IdAllocator::new();
    let mut scene = Scene::new();
    let mut add = |kind: ShapeKind, color: &str, width: f64| {
        scene.push(Shape::new(ids.next_id(), kind, Color::from_hex(color), width));
    };
    add(
        ShapeKind::rectangle_between(Point::new(10.0, 10.0), Point::new(50.0, 40.0)),
        "#000",
        2.0,
    );
    add(
        ShapeKind::circle_between(Point::new(60.0, 60.0), Point::new(90.0, 60.0)),
        "#ff0000",
        3.0,
    );
    add(
        ShapeKind::star_between(Point::new(20.0, 50.0), Point::new(60.0, 90.0)),
        "#0a0",
        1.0,
    );
    add(
        ShapeKind::Path {
            points: vec![Point::new(0.0, 0.0), Point::new(99.0, 99.0)],
            composite: CompositeMode::Normal,
            opacity: 0.8,
        },
        "#00f",
        4.0,
    );
    add(ShapeKind::Fill { x: 30, y: 25 }, "#ff0", 1.0);
    scene
}

// ─── Replay ─────────────────────────────────────────────────────────────

#[test]
fn render_is_idempotent() {
    let scene = drawing();
    let mut surface = Surface::new(100, 100, Color::WHITE);

    render(&mut surface, &scene);
    let first = surface.as_raw().to_vec();
    render(&mut surface, &scene);

    assert_eq!(surface.as_raw(), first.as_slice());
}

#[test]
fn incremental_paint_matches_replay() {
    let scene = drawing();

    let mut incremental = Surface::new(100, 100, Color::WHITE);
    for shape in &scene {
        paint_shape(&mut incremental, shape);
    }

    let mut replayed = Surface::new(100, 100, Color::WHITE);
    render(&mut replayed, &scene);

    assert!(incremental == replayed);
}

#[test]
fn empty_scene_renders_background() {
    let mut surface = Surface::new(16, 16, Color::rgb(9, 9, 9));
    render(&mut surface, &drawing());
    render(&mut surface, &Scene::new());
    assert_eq!(surface, Surface::new(16, 16, Color::rgb(9, 9, 9)));
}

#[test]
fn replay_uses_each_shapes_own_color() {
    let scene = drawing();
    let mut surface = Surface::new(100, 100, Color::WHITE);
    render(&mut surface, &scene);
    // the fill seed sits inside the rectangle, so the border stays black
    assert_eq!(surface.pixel(10, 25), Some(Color::BLACK));
    assert_eq!(surface.pixel(30, 25), Some(Color::from_hex("#ff0")));
}

// ─── Flood fill on a surface ────────────────────────────────────────────

#[test]
fn fill_covers_exactly_the_enclosed_region() {
    let mut surface = Surface::new(40, 40, Color::WHITE);
    let frame = Shape::new(
        ShapeId::new(0),
        ShapeKind::rectangle_between(Point::new(10.0, 10.0), Point::new(30.0, 30.0)),
        Color::BLACK,
        2.0,
    );
    paint_shape(&mut surface, &frame);

    let white_before = surface
        .as_raw()
        .chunks_exact(4)
        .filter(|px| *px == WHITE_PX)
        .count();

    let red = Color::rgb(255, 0, 0);
    let inside = fill_surface(&mut surface, (20, 20), red);
    let outside = surface
        .as_raw()
        .chunks_exact(4)
        .filter(|px| *px == WHITE_PX)
        .count();

    assert!(inside > 0);
    assert_eq!(inside + outside, white_before);
    assert_eq!(surface.pixel(0, 0), Some(Color::WHITE));
    assert!(!fill_changes(&surface, (20, 20), red));
    assert_eq!(fill_surface(&mut surface, (20, 20), red), 0);
}
