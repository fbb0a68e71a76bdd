use gallag::geometry::*;
use proptest::prelude::*;

fn field() -> Playfield {
    Playfield::new(800, 600)
}

// ── is_in_bounds ──────────────────────────────────────────────────────────────

#[test]
fn bounds_are_inclusive() {
    let f = field();
    assert!(f.is_in_bounds(Position::new(0, 0)));
    assert!(f.is_in_bounds(Position::new(800, 600)));
    assert!(f.is_in_bounds(Position::new(400, 300)));
}

#[test]
fn just_outside_is_out_of_bounds() {
    let f = field();
    assert!(!f.is_in_bounds(Position::new(-1, 10)));
    assert!(!f.is_in_bounds(Position::new(10, -1)));
    assert!(!f.is_in_bounds(Position::new(801, 10)));
    assert!(!f.is_in_bounds(Position::new(10, 601)));
}

// ── clamp_move ────────────────────────────────────────────────────────────────

#[test]
fn clamp_move_applies_delta() {
    let mut p = Position::new(100, 100);
    field().clamp_move(&mut p, Position::new(-2, 5));
    assert_eq!(p, Position::new(98, 105));
}

#[test]
fn clamp_move_clamps_each_axis_independently() {
    let mut p = Position::new(5, 595);
    field().clamp_move(&mut p, Position::new(-10, 10));
    assert_eq!(p, Position::new(0, 600));

    let mut p = Position::new(795, 3);
    field().clamp_move(&mut p, Position::new(10, -10));
    assert_eq!(p, Position::new(800, 0));
}

#[test]
fn clamp_move_zero_delta_is_idempotent() {
    let mut p = Position::new(400, 300);
    field().clamp_move(&mut p, Position::default());
    field().clamp_move(&mut p, Position::default());
    assert_eq!(p, Position::new(400, 300));
}

#[test]
fn clamped_pulls_new_positions_inside() {
    assert_eq!(field().clamped(Position::new(-5, 900)), Position::new(0, 600));
}

// ── squares & overlap ─────────────────────────────────────────────────────────

#[test]
fn square_is_centred() {
    let r = Rect::square_around(Position::new(100, 50), 30.0);
    assert_eq!(r, Rect { x: 85.0, y: 35.0, width: 30.0, height: 30.0 });
}

#[test]
fn overlapping_squares() {
    let a = Rect::square_around(Position::new(100, 100), 30.0);
    let b = Rect::square_around(Position::new(110, 95), 10.0);
    assert!(a.overlaps(&b));
}

#[test]
fn touching_edges_count_as_overlap() {
    // a spans x 85..115, b spans x 115..125
    let a = Rect::square_around(Position::new(100, 100), 30.0);
    let b = Rect::square_around(Position::new(120, 100), 10.0);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn separated_squares_do_not_overlap() {
    let a = Rect::square_around(Position::new(100, 100), 30.0);
    assert!(!a.overlaps(&Rect::square_around(Position::new(121, 100), 10.0)));
    assert!(!a.overlaps(&Rect::square_around(Position::new(79, 100), 10.0)));
    assert!(!a.overlaps(&Rect::square_around(Position::new(100, 121), 10.0)));
    assert!(!a.overlaps(&Rect::square_around(Position::new(100, 79), 10.0)));
}

// ── properties ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn clamp_move_stays_in_playfield(
        x in -2000i32..2000,
        y in -2000i32..2000,
        dx in -5000i32..5000,
        dy in -5000i32..5000,
    ) {
        let f = field();
        let mut p = Position::new(x, y);
        f.clamp_move(&mut p, Position::new(dx, dy));
        prop_assert!(f.is_in_bounds(p));
    }

    #[test]
    fn overlap_is_symmetric(
        ax in -100i32..900, ay in -100i32..700, asize in 0.0f32..60.0,
        bx in -100i32..900, by in -100i32..700, bsize in 0.0f32..60.0,
    ) {
        let a = Rect::square_around(Position::new(ax, ay), asize);
        let b = Rect::square_around(Position::new(bx, by), bsize);
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }
}
