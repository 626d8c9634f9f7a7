//! Integration tests for the dot row lifecycle
//!
//! These tests drive a row the way a host would:
//! - lifecycle events flip each dot's entered flag
//! - the frame loop advances the clock and renders
//! - the rendered layer tree reflects each style's poses and stagger

use dotkit_core::{Color, Event, Point};
use dotkit_widgets::{AnimationStyle, DotConfig, DotRow, Widget};

const FRAME: f32 = 1.0 / 60.0;

fn config(count: usize, style: AnimationStyle) -> DotConfig {
    DotConfig::new(count, style)
        .size(10.0)
        .spacing(2.0)
        .duration(0.9)
        .color(Color::BLACK)
}

fn run_frames(row: &mut DotRow, frames: usize) {
    for _ in 0..frames {
        row.update(FRAME);
    }
}

/// Mounting the row appears every dot and renders one circle per dot
#[test]
fn test_mount_event_starts_every_dot() {
    let mut row = DotRow::new(config(3, AnimationStyle::Pulse));
    let id = row.id();
    row.handle_event(&Event::mount(id.raw()));

    for index in 0..3 {
        assert_eq!(row.is_entered(index), Some(true));
    }

    run_frames(&mut row, 10);
    let painted = row.render().paint_list();
    assert_eq!(painted.len(), 3);
    // Pulse only scales, so every dot stays on its laid-out center
    for (index, circle) in painted.iter().enumerate() {
        let expected = row.dot_center(index);
        assert!((circle.center.x - expected.x).abs() < 1e-4);
        assert!((circle.center.y - expected.y).abs() < 1e-4);
    }
}

/// Dots appear independently; an unrelated target changes nothing
#[test]
fn test_dots_appear_independently() {
    let mut row = DotRow::new(config(3, AnimationStyle::Flashing));

    row.handle_event(&Event::appear(row.dot_id(2).unwrap().raw()));
    row.handle_event(&Event::appear(u64::MAX));

    assert_eq!(row.is_entered(0), Some(false));
    assert_eq!(row.is_entered(1), Some(false));
    assert_eq!(row.is_entered(2), Some(true));

    // Dot 2 waits out its 0.6s delay, then brightens; the others stay dim
    run_frames(&mut row, 30);
    assert_eq!(row.pose(2).map(|p| p.opacity), Some(0.3));
    run_frames(&mut row, 36);
    let opacity = row.pose(2).map(|p| p.opacity).unwrap();
    assert!(opacity > 0.3, "opacity was {opacity}");
    assert_eq!(row.pose(0).map(|p| p.opacity), Some(0.3));
}

/// A repeated appear event does not restart a running animation
#[test]
fn test_repeated_appear_is_ignored() {
    let mut row = DotRow::new(config(2, AnimationStyle::Stretching));
    let dot = row.dot_id(0).unwrap().raw();

    row.handle_event(&Event::appear(dot));
    run_frames(&mut row, 20);
    let before = row.render();

    row.handle_event(&Event::appear(dot));
    row.handle_event(&Event::mount(dot));
    assert_eq!(row.render(), before);
}

/// The stagger comes from the resolved delays: with everyone entering at
/// once, earlier dots move first (and later dots first for collision)
#[test]
fn test_stagger_follows_delay_order() {
    let mut pulse = DotRow::new(config(3, AnimationStyle::Pulse));
    pulse.appear_all();
    run_frames(&mut pulse, 12); // 0.2s: only dot 0 has started

    let scales: Vec<f32> = (0..3).map(|i| pulse.pose(i).unwrap().scale).collect();
    assert!(scales[0] > 0.5);
    assert_eq!(scales[1], 0.5);
    assert_eq!(scales[2], 0.5);

    let mut collision = DotRow::new(config(3, AnimationStyle::Collision));
    collision.appear_all();
    run_frames(&mut collision, 12);

    let offsets: Vec<f32> = (0..3).map(|i| collision.pose(i).unwrap().translate_x).collect();
    assert_eq!(offsets[0], 0.0);
    assert_eq!(offsets[1], 0.0);
    assert!(offsets[2] < 0.0, "last dot should move toward the middle");
}

/// Autoreversing styles return to rest; typing restarts from rest
#[test]
fn test_loop_shapes() {
    // Pulse dot 0: active at 0.9s, back at rest at 1.8s
    let mut pulse = DotRow::new(config(3, AnimationStyle::Pulse));
    pulse.appear(0);
    run_frames(&mut pulse, 54);
    let scale = pulse.pose(0).unwrap().scale;
    assert!((scale - 1.0).abs() < 1e-2, "scale was {scale}");
    run_frames(&mut pulse, 54);
    let scale = pulse.pose(0).unwrap().scale;
    assert!((scale - 0.5).abs() < 1e-2, "scale was {scale}");

    // Typing dot 0: nearly full just before 0.9s, invisible again just after
    let mut typing = DotRow::new(config(3, AnimationStyle::Typing));
    typing.appear(0);
    run_frames(&mut typing, 53);
    assert!(typing.pose(0).unwrap().opacity > 0.95);
    run_frames(&mut typing, 2);
    assert!(typing.pose(0).unwrap().opacity < 0.05);
}

/// Falling dots drop toward +10, settle without passing it, then snap back
/// to their -10 rest offset at the start of every spring cycle
#[test]
fn test_falling_restarts_each_cycle() {
    let mut row = DotRow::new(config(1, AnimationStyle::Falling));
    row.appear_all();

    let mut restarts = 0;
    let mut prev = row.pose(0).unwrap().translate_y;
    assert_eq!(prev, -10.0);

    for _ in 0..240 {
        row.update(FRAME);
        let offset = row.pose(0).unwrap().translate_y;
        assert!(offset <= 10.0 + 1e-4, "went past the active offset: {offset}");

        if offset < prev - 15.0 {
            restarts += 1;
            assert!(prev > 9.5, "cycle ended early at {prev}");
            assert!(offset < -9.5, "cycle restarted at {offset}");
        } else {
            assert!(offset + 1e-4 >= prev, "moved backward: {prev} -> {offset}");
        }
        prev = offset;
    }
    // Falling settles in roughly 1.3s, so four seconds hold several cycles
    assert!(restarts >= 2, "only {restarts} restarts");
}

/// Elastic dots bounce past their active pose
#[test]
fn test_elastic_overshoots_active_pose() {
    let mut row = DotRow::new(config(1, AnimationStyle::Elastic));
    row.appear_all();

    let mut lowest = f32::MAX;
    for _ in 0..60 {
        row.update(FRAME);
        let circle = row.render().paint_list()[0];
        lowest = lowest.min(circle.center.y);
    }
    // Rest center y is 5; the active pose puts it at -5
    assert!(lowest < -5.0, "lowest center was {lowest}");
}

/// Collision offsets land exactly where the resolver says at the peak
#[test]
fn test_collision_peak_positions() {
    let mut row = DotRow::new(config(4, AnimationStyle::Collision));
    row.appear_all();

    // Dot 3 has no delay and peaks after one duration (0.9s)
    run_frames(&mut row, 54);
    let circle = row.render().paint_list()[3];
    let expected = Point::new(row.dot_center(3).x - 12.0, 5.0);
    assert!((circle.center.x - expected.x).abs() < 0.1);
    assert!((circle.center.y - expected.y).abs() < 1e-4);
}

/// Unmounting through an event tears the row down
#[test]
fn test_unmount_event() {
    let mut row = DotRow::new(config(3, AnimationStyle::Falling));
    let id = row.id().raw();
    row.handle_event(&Event::mount(id));
    run_frames(&mut row, 5);

    row.handle_event(&Event::unmount(id));
    assert!(!row.is_mounted());
    assert!(row.render().paint_list().is_empty());
    assert!((0..3).all(|index| row.pose(index).is_none()));
}

/// A row mounted for days keeps animating on every frame
#[test]
fn test_long_running_row_keeps_animating() {
    let mut row = DotRow::new(config(3, AnimationStyle::Pulse));
    row.appear_all();

    // Past 2^19 s a 1/60 s step no longer registers in f32
    row.update(524_288.0);
    let start = row.elapsed();

    let mut scales = Vec::new();
    for _ in 0..60 {
        row.update(FRAME);
        scales.push(row.pose(1).unwrap().scale);
    }

    assert!((row.elapsed() - start - 1.0).abs() < 1e-4);
    let moving = scales.windows(2).filter(|w| w[0] != w[1]).count();
    assert!(moving > 50, "only {moving} of 59 frames moved");
}

/// Zero dots: nothing to render and nothing to resolve
#[test]
fn test_zero_dots() {
    let mut row = DotRow::new(config(0, AnimationStyle::Typing));
    row.handle_event(&Event::mount(row.id().raw()));
    run_frames(&mut row, 5);

    assert!(row.render().paint_list().is_empty());
    assert!(row.pose(0).is_none());
}

/// Rows built from TOML behave like rows built in code
#[test]
fn test_row_from_toml_config() {
    let config = DotConfig::from_toml_str(
        r##"
        count = 5
        style = "typing"
        size = 6.0
        spacing = 3.0
        duration = 1.0
        color = "#FF0000"
        "##,
    )
    .expect("valid config");

    let row = DotRow::try_new(config).expect("valid row");
    assert_eq!(row.len(), 5);
    assert_eq!(row.size().width, 5.0 * 6.0 + 4.0 * 3.0);

    // Typing rests invisible and unscaled
    for circle in row.render().paint_list() {
        assert_eq!(circle.color.a, 0.0);
        assert_eq!(circle.radius, 0.0);
        assert_eq!(circle.color.r, 1.0);
    }
}
