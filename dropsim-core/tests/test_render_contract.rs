//! Tests for the body/renderer contract: the pixel-space transform and the
//! circle draw routine

use dropsim_core::tests::test_helpers::{approx_eq_f32, DrawCall, RecordingSurface};
use dropsim_core::{Body, Circle, Color, Renderable};

#[test]
fn test_drawing_coords_flip_y() {
    let surface = RecordingSurface::new(1000.0, 600.0);
    let body = Body::fixed(120.0, 450.0);

    let (px, py) = body.drawing_coords(&surface);

    assert_eq!(px, 120.0);
    assert_eq!(py, 600.0 - 450.0);
}

#[test]
fn test_drawing_coords_origin_maps_to_bottom_left() {
    let surface = RecordingSurface::new(800.0, 600.0);
    let body = Body::fixed(0.0, 0.0);

    assert_eq!(body.drawing_coords(&surface), (0.0, 600.0));
}

#[test]
fn test_circle_draws_rim_fill_and_orientation_line() {
    let mut surface = RecordingSurface::new(600.0, 600.0);
    let circle = Circle::new(Body::fixed(300.0, 100.0), Color::GREEN, Color::YELLOW);

    circle.draw(&mut surface);

    let center = (300.0, 500.0);
    match &surface.calls[0] {
        DrawCall::Circle {
            center: c,
            radius,
            color,
        } => {
            assert_eq!(*c, center);
            assert_eq!(*radius, Circle::DEFAULT_RADIUS);
            assert_eq!(*color, Color::GREEN);
        }
        other => panic!("expected rim circle first, got {:?}", other),
    }
    match &surface.calls[1] {
        DrawCall::Circle { radius, color, .. } => {
            assert_eq!(*radius, Circle::DEFAULT_RADIUS - Circle::DEFAULT_STROKE);
            assert_eq!(*color, Color::YELLOW);
        }
        other => panic!("expected fill circle second, got {:?}", other),
    }
    assert!(matches!(surface.calls[2], DrawCall::Line { .. }));
}

#[test]
fn test_orientation_line_follows_angle() {
    let mut surface = RecordingSurface::new(600.0, 600.0);
    // angle 0 points straight up in simulation space, which is +y in pixel
    // space after the flip... the line geometry is computed in pixel space
    let circle = Circle::new(Body::fixed(300.0, 300.0), Color::RED, Color::WHITE);

    circle.draw(&mut surface);

    let (from, to) = match &surface.calls[2] {
        DrawCall::Line { from, to, .. } => (*from, *to),
        other => panic!("expected orientation line, got {:?}", other),
    };
    assert_eq!(from, (300.0, 300.0));
    // sin(0) = 0, cos(0) = 1: endpoint offset by the radius along pixel y,
    // inset by the stroke width on both components
    assert!(approx_eq_f32(to.0, 300.0 - Circle::DEFAULT_STROKE, 1e-5));
    assert!(approx_eq_f32(
        to.1,
        300.0 + Circle::DEFAULT_RADIUS - Circle::DEFAULT_STROKE,
        1e-5
    ));
}

#[test]
fn test_surface_size_queried_not_assumed() {
    // the same body lands on different pixels on different surfaces
    let short = RecordingSurface::new(600.0, 400.0);
    let tall = RecordingSurface::new(600.0, 800.0);
    let body = Body::fixed(10.0, 100.0);

    assert_eq!(body.drawing_coords(&short).1, 300.0);
    assert_eq!(body.drawing_coords(&tall).1, 700.0);
}
