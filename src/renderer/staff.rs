//! Stave preamble: staff lines, the opening bar line, and the clef.

use crate::config::StaveConfig;
use super::cursor::Cursor;
use super::glyphs;

pub(super) fn render_staff_lines(c: &mut Cursor, config: &StaveConfig) {
    c.up();
    c.set_heading(0.0);
    c.goto(0.0, config.bottom_line());
    c.set_width(1.0);
    glyphs::staff(c, config.staff_lines, config.staff_length, config.line_gap());
}

pub(super) fn render_opening_bar(c: &mut Cursor, config: &StaveConfig) {
    glyphs::measure_bar(
        c,
        0.0,
        config.bottom_line(),
        config.staff_height(),
        config.pen_width,
    );
}

/// Treble clef anchored one line gap under the bottom line.
pub(super) fn render_clef(c: &mut Cursor, config: &StaveConfig) {
    let bottom = config.bottom_line();
    glyphs::treble_clef(
        c,
        config.clef_x,
        bottom - config.line_gap(),
        config.clef_tilt,
        bottom,
        config.arc_steps,
    );
}

pub(super) fn render_preamble(c: &mut Cursor, config: &StaveConfig) {
    render_staff_lines(c, config);
    render_opening_bar(c, config);
    render_clef(c, config);
}
