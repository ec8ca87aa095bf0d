//! Glyph library: staff, noteheads, stems, ledger lines, clef, rests,
//! accidentals and bar lines, composed from straight strokes and arcs.
//!
//! Glyphs draw relative to the cursor and leave it wherever their last
//! stroke ended, so the order of calls matters. Each glyph positions the
//! pen itself (pen up, absolute move, heading reset) before its first
//! stroke, which keeps one glyph's leftovers out of the next.

use tracing::warn;

use super::arc::{ArcRequest, Turn};
use super::constants::*;
use super::cursor::Cursor;
use crate::model::Accidental;

/// Draw a stroke of `length` along the current heading and return to the
/// start with the pen up.
pub fn drawline(c: &mut Cursor, length: f64) {
    c.down();
    c.forward(length);
    c.up();
    c.backward(length);
}

fn stroke(c: &mut Cursor, x: f64, y: f64, heading: f64, length: f64, width: f64) {
    c.up();
    c.goto(x, y);
    c.set_heading(heading);
    c.set_width(width);
    c.down();
    c.forward(length);
    c.up();
}

// ═══════════════════════════════════════════════════════════════════════
// Staff and bars
// ═══════════════════════════════════════════════════════════════════════

/// Draw `lines` parallel lines of `length`, stacked `gap` apart to the left
/// of the current heading. The pen ends one gap past the last line.
pub fn staff(c: &mut Cursor, lines: usize, length: f64, gap: f64) {
    for _ in 0..lines {
        drawline(c, length);
        c.left(90.0);
        c.forward(gap);
        c.right(90.0);
    }
}

/// Vertical bar of `height` rising from (`x`, `bottom`).
pub fn measure_bar(c: &mut Cursor, x: f64, bottom: f64, height: f64, width: f64) {
    c.up();
    c.goto(x, bottom);
    c.set_heading(90.0);
    c.set_width(width);
    drawline(c, height);
}

// ═══════════════════════════════════════════════════════════════════════
// Notes
// ═══════════════════════════════════════════════════════════════════════

/// Horizontally flattened oval from two quarter arcs of radius `r` and two
/// of `r / 2`, starting at its bottom edge and running counter-clockwise.
pub fn oval(c: &mut Cursor, r: f64) {
    for _ in 0..2 {
        ArcRequest::new(r, 0.25, Turn::Left)
            .widths(NOTEHEAD_THIN, NOTEHEAD_THICK)
            .resolution(NOTEHEAD_STEPS)
            .draw(c);
        ArcRequest::new(r / 2.0, 0.25, Turn::Left)
            .widths(NOTEHEAD_THICK, NOTEHEAD_THIN)
            .resolution(NOTEHEAD_STEPS)
            .draw(c);
    }
}

/// Notehead centered on (`x`, `y`).
pub fn notehead(c: &mut Cursor, x: f64, y: f64, filled: bool) {
    c.up();
    c.set_heading(0.0);
    c.goto(x, y - NOTEHEAD_DROP);
    c.down();
    if filled {
        c.begin_fill();
    }
    oval(c, NOTEHEAD_RADIUS);
    c.end_fill();
    c.up();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemDirection {
    Up,
    Down,
}

/// Direction and length of a note's stem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stem {
    pub direction: StemDirection,
    pub length: f64,
}

impl Stem {
    /// Pick the stem for a note at `y` on a staff spanning `bottom..=top`.
    ///
    /// Below the staff the stem goes up and grows by the note's distance
    /// under the bottom line. From the bottom line to the middle line it is
    /// a plain upward stem. Above the middle line it goes down, growing by
    /// the distance over the top line, so it always reaches the staff.
    pub fn for_note(y: f64, bottom: f64, top: f64, gap: f64) -> Self {
        let base = STEM_SPACES * gap;
        let center = (bottom + top) / 2.0;
        if y < bottom {
            Stem {
                direction: StemDirection::Up,
                length: base + (bottom - y),
            }
        } else if y > center {
            Stem {
                direction: StemDirection::Down,
                length: base + (y - top).max(0.0),
            }
        } else {
            Stem {
                direction: StemDirection::Up,
                length: base,
            }
        }
    }
}

/// Stem for the notehead at (`x`, `y`). Up-stems hang off the right of the
/// oval, down-stems off the left. Leaves the heading along the stem.
pub fn stem(c: &mut Cursor, x: f64, y: f64, stem: Stem, width: f64) {
    c.up();
    match stem.direction {
        StemDirection::Up => {
            c.goto(x + STEM_UP_X, y);
            c.set_heading(90.0);
        }
        StemDirection::Down => {
            c.goto(x + STEM_DOWN_X, y);
            c.set_heading(270.0);
        }
    }
    c.set_width(width);
    c.down();
    c.forward(stem.length);
    c.up();
}

/// Heights of the ledger lines a note at `y` needs, for a staff spanning
/// `-half_height..=half_height` with lines `gap` apart.
pub fn ledger_positions(y: i32, half_height: i32, gap: i32) -> Vec<i32> {
    if gap <= 0 {
        return Vec::new();
    }
    // Widened so extreme staff sizes can't overflow; every line lies
    // between the staff edge and `y`, so it fits back into i32.
    let (y, half, gap) = (i64::from(y), i64::from(half_height), i64::from(gap));
    if y < -half {
        let count = (-half - y) / gap;
        (1..=count).map(|k| (-half - k * gap) as i32).collect()
    } else if y > half {
        let count = (y - half) / gap;
        (1..=count).map(|k| (half + k * gap) as i32).collect()
    } else {
        Vec::new()
    }
}

/// Short horizontal lines through or beside a notehead off the staff.
pub fn ledger_lines(c: &mut Cursor, x: f64, y: i32, half_height: i32, gap: i32, width: f64) {
    for ly in ledger_positions(y, half_height, gap) {
        stroke(c, x + LEDGER_LEFT, ly as f64, 0.0, LEDGER_LENGTH, width);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Clef
// ═══════════════════════════════════════════════════════════════════════

/// Treble clef whose tail dot sits near (`x`, `y`).
///
/// The outline is a hand-tuned run of arcs with absolute heading resets and
/// only looks right for a tilt of 10 degrees.
pub fn treble_clef(c: &mut Cursor, x: f64, y: f64, tilt: f64, bottom_line: f64, steps: u32) {
    if (tilt - CLEF_TUNED_TILT).abs() > f64::EPSILON {
        warn!(tilt, "treble clef outline is only tuned for a 10 degree tilt");
    }
    let arc = |radius: f64, fraction: f64, turn: Turn, from: f64, to: f64| {
        ArcRequest::new(radius, fraction, turn)
            .widths(from, to)
            .resolution(steps)
    };

    c.up();
    c.set_heading(0.0);
    c.goto(x + 3.0, y);
    c.dot(CLEF_DOT);
    c.goto(x, y);
    c.right(90.0 - tilt);
    c.down();
    arc(10.0, 0.5, Turn::Left, 2.0, 1.0).draw(c);
    // Spine. The tilt goes into cos() as radians; the curls below are
    // tuned against the resulting length.
    c.backward((y - bottom_line + CLEF_REACH) / tilt.cos());
    arc(25.0, 0.15, Turn::Right, 1.0, 6.0).draw(c);
    c.right(90.0);
    arc(25.0, 0.25, Turn::Right, 3.0, 8.0).draw(c);
    c.set_heading(226.0);
    c.set_width(8.0);
    c.forward(18.0);
    arc(30.0, 0.22, Turn::Left, 8.0, 3.0).draw(c);
    arc(30.0, 0.14, Turn::Left, 3.0, 2.0).draw(c);
    c.set_heading(tilt + 10.0);
    arc(20.0, 0.42, Turn::Left, 2.0, 8.0).draw(c);
    c.set_heading(180.0 + tilt);
    arc(15.0, 0.4, Turn::Left, 8.0, 1.0).draw(c);
    c.up();
}

// ═══════════════════════════════════════════════════════════════════════
// Rests
// ═══════════════════════════════════════════════════════════════════════

/// Eighth rest: a dot, a hook curving right from it, and a stroke falling
/// back to the lower left.
pub fn eighth_rest(c: &mut Cursor, x: f64, y: f64, steps: u32) {
    c.up();
    c.goto(x, y + EIGHTH_REST_DOT_RISE);
    c.dot(EIGHTH_REST_DOT);
    c.set_heading(300.0);
    c.down();
    ArcRequest::new(8.0, 0.2, Turn::Left)
        .widths(1.0, 2.0)
        .resolution(steps)
        .draw(c);
    c.set_heading(250.0);
    c.set_width(2.0);
    c.forward(EIGHTH_REST_STEM);
    c.up();
}

/// Two eighth rests, the second one step down and to the left.
pub fn sixteenth_rest(c: &mut Cursor, x: f64, y: f64, steps: u32) {
    eighth_rest(c, x, y, steps);
    eighth_rest(c, x + SIXTEENTH_REST_DX, y + SIXTEENTH_REST_DY, steps);
}

/// Quarter rest: a zig-zag of straight strokes closed by a curled tail.
pub fn quarter_rest(c: &mut Cursor, x: f64, y: f64, steps: u32) {
    c.up();
    c.goto(x - 2.0, y + 20.0);
    c.set_heading(300.0);
    c.set_width(2.0);
    c.down();
    c.forward(12.0);
    c.set_heading(225.0);
    c.set_width(6.0);
    c.forward(10.0);
    c.set_heading(300.0);
    c.set_width(2.0);
    c.forward(12.0);
    c.set_heading(225.0);
    c.set_width(3.0);
    c.forward(8.0);
    ArcRequest::new(6.0, 0.35, Turn::Left)
        .widths(3.0, 1.0)
        .resolution(steps)
        .draw(c);
    c.up();
}

/// Filled block centered on `x` with its top edge at `top`, as used for
/// whole (hanging) and half (sitting) rests.
pub fn block_rest(c: &mut Cursor, x: f64, top: f64, height: f64) {
    c.up();
    c.set_heading(0.0);
    c.goto(x - BLOCK_REST_WIDTH / 2.0, top);
    c.set_width(1.0);
    c.begin_fill();
    c.down();
    for side in [BLOCK_REST_WIDTH, height, BLOCK_REST_WIDTH, height] {
        c.forward(side);
        c.right(90.0);
    }
    c.end_fill();
    c.up();
}

// ═══════════════════════════════════════════════════════════════════════
// Accidentals
// ═══════════════════════════════════════════════════════════════════════

pub fn sharp(c: &mut Cursor, x: f64, y: f64) {
    stroke(c, x - 3.0, y - 12.0, 90.0, 24.0, ACCIDENTAL_STEM_WIDTH);
    stroke(c, x + 3.0, y - 14.0, 90.0, 24.0, ACCIDENTAL_STEM_WIDTH);
    stroke(c, x - 7.0, y - 6.0, 15.0, 14.5, ACCIDENTAL_BAR_WIDTH);
    stroke(c, x - 7.0, y + 3.0, 15.0, 14.5, ACCIDENTAL_BAR_WIDTH);
}

pub fn flat(c: &mut Cursor, x: f64, y: f64, steps: u32) {
    stroke(c, x - 3.0, y - 6.0, 90.0, 28.0, ACCIDENTAL_STEM_WIDTH);
    c.goto(x - 3.0, y - 6.0);
    c.set_heading(0.0);
    c.down();
    ArcRequest::new(5.0, 0.5, Turn::Left)
        .widths(2.0, 1.0)
        .resolution(steps)
        .draw(c);
    c.up();
}

pub fn natural(c: &mut Cursor, x: f64, y: f64) {
    stroke(c, x - 3.0, y - 4.0, 90.0, 20.0, ACCIDENTAL_STEM_WIDTH);
    stroke(c, x + 3.0, y - 16.0, 90.0, 20.0, ACCIDENTAL_STEM_WIDTH);
    stroke(c, x - 3.0, y - 5.0, 15.0, 6.2, ACCIDENTAL_BAR_WIDTH);
    stroke(c, x - 3.0, y + 3.0, 15.0, 6.2, ACCIDENTAL_BAR_WIDTH);
}

pub fn double_sharp(c: &mut Cursor, x: f64, y: f64) {
    stroke(c, x - 4.0, y - 4.0, 45.0, 11.3, 2.5);
    stroke(c, x - 4.0, y + 4.0, 315.0, 11.3, 2.5);
}

pub fn double_flat(c: &mut Cursor, x: f64, y: f64, steps: u32) {
    flat(c, x - 4.0, y, steps);
    flat(c, x + 4.0, y, steps);
}

/// Accidental for a note at (`x`, `y`), drawn to the left of the notehead.
pub fn accidental(c: &mut Cursor, x: f64, y: f64, accidental: Accidental, steps: u32) {
    let ax = x - ACCIDENTAL_OFFSET;
    match accidental {
        Accidental::Sharp => sharp(c, ax, y),
        Accidental::DoubleSharp => double_sharp(c, ax, y),
        Accidental::Flat => flat(c, ax, y, steps),
        Accidental::DoubleFlat => double_flat(c, ax, y, steps),
        Accidental::Natural => natural(c, ax, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::cursor::{heading_delta, trace, DrawCommand, Point, Pose};

    fn lines(commands: &[DrawCommand]) -> Vec<(Point, Point)> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    fn fills(commands: &[DrawCommand]) -> usize {
        commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill { .. }))
            .count()
    }

    #[test]
    fn staff_draws_evenly_spaced_lines() {
        let t = trace(Pose::at(0.0, -40.0), |c| staff(c, 5, 600.0, 20.0));
        let strokes = lines(&t.commands);
        assert_eq!(strokes.len(), 5);
        for (i, (from, to)) in strokes.iter().enumerate() {
            let y = -40.0 + i as f64 * 20.0;
            assert!((from.y - y).abs() < 1e-9 && (to.y - y).abs() < 1e-9);
            assert!((to.x - from.x - 600.0).abs() < 1e-9);
        }
        assert!(!t.pose.pen_down);
        assert!((t.pose.position.y - 60.0).abs() < 1e-9);
    }

    #[test]
    fn measure_bar_is_vertical() {
        let t = trace(Pose::default(), |c| measure_bar(c, 130.0, -40.0, 80.0, 2.0));
        assert_eq!(
            t.commands,
            vec![DrawCommand::Line {
                from: Point::new(130.0, -40.0),
                to: Point::new(130.0, 40.0),
                width: 2.0,
            }]
        );
    }

    #[test]
    fn filled_notehead_closes_a_fill_region() {
        let filled = trace(Pose::default(), |c| notehead(c, 50.0, 0.0, true));
        let hollow = trace(Pose::default(), |c| notehead(c, 50.0, 0.0, false));
        assert_eq!(fills(&filled.commands), 1);
        assert_eq!(fills(&hollow.commands), 0);
        // 4 arcs of floor(25 * 0.25) = 6 chords each
        assert_eq!(lines(&hollow.commands).len(), 24);
    }

    #[test]
    fn oval_stays_around_the_note() {
        let t = trace(Pose::default(), |c| notehead(c, 0.0, 0.0, false));
        for (from, _) in lines(&t.commands) {
            assert!(from.x > -6.0 && from.x < 12.0, "x out of range: {}", from.x);
            assert!(from.y > -9.0 && from.y < 8.0, "y out of range: {}", from.y);
        }
    }

    #[test]
    fn stem_regions() {
        let (bottom, top, gap) = (-40.0, 40.0, 20.0);

        let below = Stem::for_note(-80.0, bottom, top, gap);
        assert_eq!(below.direction, StemDirection::Up);
        assert_eq!(below.length, 70.0 + 40.0);

        let low_in_staff = Stem::for_note(-20.0, bottom, top, gap);
        assert_eq!(low_in_staff.direction, StemDirection::Up);
        assert_eq!(low_in_staff.length, 70.0);

        let middle = Stem::for_note(0.0, bottom, top, gap);
        assert_eq!(middle.direction, StemDirection::Up);

        let high_in_staff = Stem::for_note(30.0, bottom, top, gap);
        assert_eq!(high_in_staff.direction, StemDirection::Down);
        assert_eq!(high_in_staff.length, 70.0);

        let above = Stem::for_note(70.0, bottom, top, gap);
        assert_eq!(above.direction, StemDirection::Down);
        assert_eq!(above.length, 70.0 + 30.0);
    }

    #[test]
    fn stem_leaves_heading_along_the_stem() {
        let up = trace(Pose::default(), |c| {
            stem(c, 0.0, 0.0, Stem::for_note(0.0, -40.0, 40.0, 20.0), 2.0)
        });
        assert!(heading_delta(up.pose.heading, 90.0) < 1e-9);
        assert!((up.pose.position.y - 70.0).abs() < 1e-9);

        let down = trace(Pose::default(), |c| {
            stem(c, 0.0, 20.0, Stem::for_note(20.0, -40.0, 40.0, 20.0), 2.0)
        });
        assert!(heading_delta(down.pose.heading, 270.0) < 1e-9);
        assert!((down.pose.position.y - (20.0 - 70.0)).abs() < 1e-9);
    }

    #[test]
    fn ledger_counts() {
        assert!(ledger_positions(0, 40, 20).is_empty());
        assert!(ledger_positions(-40, 40, 20).is_empty());
        assert!(ledger_positions(40, 40, 20).is_empty());
        // B below the staff sits just under the first ledger line.
        assert_eq!(ledger_positions(-50, 40, 20), Vec::<i32>::new());
        assert_eq!(ledger_positions(-60, 40, 20), vec![-60]);
        assert_eq!(ledger_positions(-70, 40, 20), vec![-60]);
        assert_eq!(ledger_positions(-80, 40, 20), vec![-60, -80]);
        assert_eq!(ledger_positions(60, 40, 20), vec![60]);
        assert_eq!(ledger_positions(100, 40, 20), vec![60, 80, 100]);
        assert!(ledger_positions(-200, 40, 0).is_empty());
        // Extreme values stay in range instead of overflowing.
        assert_eq!(ledger_positions(i32::MIN, 0, i32::MAX).len(), 1);
        assert_eq!(ledger_positions(i32::MAX, i32::MAX, 2), Vec::<i32>::new());
    }

    #[test]
    fn ledger_lines_are_horizontal() {
        let t = trace(Pose::default(), |c| ledger_lines(c, 100.0, -80, 40, 20, 2.0));
        let strokes = lines(&t.commands);
        assert_eq!(strokes.len(), 2);
        for (from, to) in strokes {
            assert!((from.y - to.y).abs() < 1e-9);
            assert!((from.x - 90.0).abs() < 1e-9);
            assert!((to.x - 115.0).abs() < 1e-9);
        }
    }

    #[test]
    fn clef_draws_dot_and_outline() {
        let t = trace(Pose::default(), |c| treble_clef(c, 25.0, -60.0, 10.0, -40.0, 100));
        assert!(matches!(
            t.commands[0],
            DrawCommand::Dot { diameter, .. } if diameter == CLEF_DOT
        ));
        // 50 + 15 + 25 + 22 + 14 + 42 + 40 arc chords, plus spine and 18-unit stroke
        assert_eq!(lines(&t.commands).len(), 208 + 2);
        assert!(!t.pose.pen_down);
        assert!(heading_delta(t.pose.heading, 190.0 + 144.0) < 1e-6);
    }

    #[test]
    fn eighth_rest_has_dot_hook_and_stem() {
        let t = trace(Pose::default(), |c| eighth_rest(c, 0.0, 0.0, 100));
        let dots = t
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Dot { .. }))
            .count();
        assert_eq!(dots, 1);
        assert_eq!(lines(&t.commands).len(), 20 + 1);
    }

    #[test]
    fn sixteenth_rest_is_two_eighths() {
        let one = trace(Pose::default(), |c| eighth_rest(c, 0.0, 0.0, 100));
        let two = trace(Pose::default(), |c| sixteenth_rest(c, 0.0, 0.0, 100));
        assert_eq!(two.commands.len(), 2 * one.commands.len());
        match (&two.commands[0], &two.commands[one.commands.len()]) {
            (DrawCommand::Dot { at: a, .. }, DrawCommand::Dot { at: b, .. }) => {
                assert!((b.x - a.x - SIXTEENTH_REST_DX).abs() < 1e-9);
                assert!((b.y - a.y - SIXTEENTH_REST_DY).abs() < 1e-9);
            }
            other => panic!("expected two dots, got {other:?}"),
        }
    }

    #[test]
    fn quarter_rest_zig_zags() {
        let t = trace(Pose::default(), |c| quarter_rest(c, 0.0, 0.0, 100));
        // 4 straight strokes + floor(100 * 0.35) tail chords
        assert_eq!(lines(&t.commands).len(), 4 + 35);
    }

    #[test]
    fn block_rest_is_a_filled_rectangle() {
        let t = trace(Pose::default(), |c| block_rest(c, 0.0, 20.0, 10.0));
        assert_eq!(fills(&t.commands), 1);
        assert_eq!(lines(&t.commands).len(), 4);
    }

    #[test]
    fn accidentals_draw_left_of_the_note() {
        for acc in [
            Accidental::Sharp,
            Accidental::DoubleSharp,
            Accidental::Flat,
            Accidental::DoubleFlat,
            Accidental::Natural,
        ] {
            let t = trace(Pose::default(), |c| accidental(c, 100.0, 0.0, acc, 100));
            let strokes = lines(&t.commands);
            assert!(!strokes.is_empty(), "{acc:?} drew nothing");
            for (from, to) in strokes {
                assert!(from.x < 100.0 && to.x < 100.0, "{acc:?} overlaps the notehead");
            }
        }
    }
}
