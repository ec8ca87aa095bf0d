//! Score renderer: converts a parsed Score into drawing commands and SVG.
//!
//! Everything is drawn by a recording [`Cursor`] in turtle coordinates
//! (y up, middle staff line at y = 0). The recorded commands can be fed
//! to any [`Surface`]; [`render_score_to_svg`] uses the built-in SVG one.

pub mod arc;
pub mod cursor;
pub mod glyphs;

mod constants;
mod notes;
mod staff;
mod svg_builder;

use tracing::debug;

use crate::config::StaveConfig;
use crate::model::Score;
use cursor::{trace, Bounds, DrawCommand, Pose, Surface, Trace};
use svg_builder::{empty_svg, SvgBuilder};

pub use arc::{arc, ArcRequest, Turn};
pub use cursor::Cursor;

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Draw only the score's events, starting from the home pose.
pub fn render_score(score: &Score, config: &StaveConfig) -> Trace {
    trace(Pose::default(), |c| score.draw(c, config))
}

/// Draw a complete stave: staff lines, opening bar, clef, then the events.
pub fn render_stave(score: &Score, config: &StaveConfig) -> Trace {
    let out = trace(Pose::default(), |c| {
        staff::render_preamble(c, config);
        score.draw(c, config);
    });
    debug!(
        events = score.len(),
        commands = out.commands.len(),
        "rendered stave"
    );
    out
}

/// Draw several staves, each `stave_spacing` below the previous one.
pub fn render_staves(scores: &[Score], config: &StaveConfig) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    for (i, score) in scores.iter().enumerate() {
        let dy = -(i as f64) * config.stave_spacing;
        commands.extend(
            render_stave(score, config)
                .commands
                .iter()
                .map(|cmd| cmd.translated(0.0, dy)),
        );
    }
    commands
}

/// Render one stave into a complete SVG string.
pub fn render_score_to_svg(score: &Score, config: &StaveConfig) -> String {
    commands_to_svg(&render_stave(score, config).commands, config.margin)
}

/// Render several staves, stacked top to bottom, into one SVG string.
pub fn render_scores_to_svg(scores: &[Score], config: &StaveConfig) -> String {
    commands_to_svg(&render_staves(scores, config), config.margin)
}

fn commands_to_svg(commands: &[DrawCommand], margin: f64) -> String {
    let mut bounds = Bounds::new();
    bounds.draw_all(commands);
    if bounds.is_empty() {
        return empty_svg("Nothing to draw");
    }

    let mut svg = SvgBuilder::framing(&bounds, margin);
    svg.background();
    svg.draw_all(commands);
    svg.build()
}
