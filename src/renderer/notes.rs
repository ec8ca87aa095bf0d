//! Note, rest, and bar line rendering for score events.

use tracing::trace;

use crate::config::StaveConfig;
use crate::model::*;
use super::constants::*;
use super::cursor::Cursor;
use super::glyphs;
use super::glyphs::Stem;

impl Event {
    /// Draw this event with `cursor`. Events draw from absolute positions,
    /// but they still change the cursor's pose, so a score must be drawn
    /// in order.
    pub fn draw(&self, cursor: &mut Cursor, config: &StaveConfig) {
        match *self {
            Event::Note {
                x,
                y,
                duration,
                accidental,
            } => render_note(cursor, config, x, y, duration, accidental),
            Event::Rest { x, duration } => render_rest(cursor, config, x, duration),
            Event::Measure { x } => glyphs::measure_bar(
                cursor,
                x,
                config.bottom_line(),
                config.staff_height(),
                config.pen_width,
            ),
        }
    }
}

impl Score {
    /// Draw every event in parse order.
    pub fn draw(&self, cursor: &mut Cursor, config: &StaveConfig) {
        for event in self {
            trace!(?event, "draw");
            event.draw(cursor, config);
        }
    }
}

// ── Notes ───────────────────────────────────────────────────────────

fn render_note(
    cursor: &mut Cursor,
    config: &StaveConfig,
    x: f64,
    y: i32,
    duration: Duration,
    accidental: Option<Accidental>,
) {
    let spaces = i32::try_from(config.staff_lines.saturating_sub(1)).unwrap_or(i32::MAX);
    let half_height = spaces.saturating_mul(config.y_spacing);
    glyphs::ledger_lines(
        cursor,
        x,
        y,
        half_height,
        config.y_spacing.saturating_mul(2),
        config.pen_width,
    );

    let note_y = y as f64;
    glyphs::notehead(cursor, x, note_y, duration.is_filled());

    if let Some(acc) = accidental {
        glyphs::accidental(cursor, x, note_y, acc, config.arc_steps);
    }

    if duration.has_stem() {
        let stem = Stem::for_note(
            note_y,
            config.bottom_line(),
            config.top_line(),
            config.line_gap(),
        );
        glyphs::stem(cursor, x, note_y, stem, config.pen_width);
    }
}

// ── Rests ───────────────────────────────────────────────────────────

fn render_rest(cursor: &mut Cursor, config: &StaveConfig, x: f64, duration: Duration) {
    let gap = config.line_gap();
    match duration {
        Duration::Quarter => glyphs::quarter_rest(cursor, x, REST_Y, config.arc_steps),
        Duration::Eighth => glyphs::eighth_rest(cursor, x, REST_Y, config.arc_steps),
        Duration::Sixteenth => glyphs::sixteenth_rest(cursor, x, REST_Y, config.arc_steps),
        // Whole rests hang from the second line from the top,
        // half rests sit on the middle line.
        Duration::Whole => glyphs::block_rest(cursor, x, config.top_line() - gap, gap / 2.0),
        Duration::Half => glyphs::block_rest(cursor, x, REST_Y + gap / 2.0, gap / 2.0),
    }
}
