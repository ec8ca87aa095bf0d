//! Arc primitive: a circular arc drawn as a polygon with a width ramp.
//!
//! Every curved glyph is built from this. An arc of `fraction` of a full
//! circle at resolution `n` is `floor(n · fraction)` chords of length
//! `2r · sin(π/n)`, with a `360/n` degree turn after each chord. The turns
//! are left on the cursor: callers either reset the heading afterwards or
//! start the next stroke from wherever the arc left off.

use super::cursor::{trace, Cursor, Pose, Trace};

/// Resolution used when an arc doesn't pick its own.
pub const DEFAULT_ARC_STEPS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

/// Parameters for one arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcRequest {
    pub radius: f64,
    /// Portion of a full circle, 0.0 to 1.0
    pub fraction: f64,
    pub turn: Turn,
    pub start_width: f64,
    pub end_width: f64,
    /// Number of chords in a full circle
    pub resolution: u32,
}

impl ArcRequest {
    pub fn new(radius: f64, fraction: f64, turn: Turn) -> Self {
        Self {
            radius,
            fraction,
            turn,
            start_width: 1.0,
            end_width: 1.0,
            resolution: DEFAULT_ARC_STEPS,
        }
    }

    pub fn widths(mut self, start: f64, end: f64) -> Self {
        self.start_width = start;
        self.end_width = end;
        self
    }

    pub fn resolution(mut self, n: u32) -> Self {
        self.resolution = n;
        self
    }

    /// Number of chords actually drawn.
    pub fn steps(&self) -> u32 {
        if self.resolution == 0 {
            return 0;
        }
        let fraction = self.fraction.clamp(0.0, 1.0);
        (self.resolution as f64 * fraction).floor() as u32
    }

    pub fn chord_length(&self) -> f64 {
        2.0 * self.radius * (std::f64::consts::PI / self.resolution as f64).sin()
    }

    /// Turn after each chord, in degrees.
    pub fn step_angle(&self) -> f64 {
        360.0 / self.resolution as f64
    }

    /// Signed heading change over the whole arc (positive = left).
    pub fn sweep(&self) -> f64 {
        let total = self.steps() as f64 * self.step_angle();
        match self.turn {
            Turn::Left => total,
            Turn::Right => -total,
        }
    }

    /// Pen width for chord `i`. The ramp includes both ends, so the first
    /// chord is drawn at `start_width` and the last at `end_width`. This is
    /// `i / (steps - 1)` rather than `i / steps`, which would never reach
    /// `end_width`.
    pub fn width_at(&self, i: u32) -> f64 {
        let steps = self.steps();
        let t = if steps <= 1 {
            1.0
        } else {
            i.min(steps - 1) as f64 / (steps - 1) as f64
        };
        self.start_width + t * (self.end_width - self.start_width)
    }

    /// Draw the arc from the cursor's current pose. Zero steps draws nothing
    /// and leaves the cursor untouched.
    pub fn draw(&self, cursor: &mut Cursor) {
        let steps = self.steps();
        if steps == 0 {
            return;
        }
        let chord = self.chord_length();
        let angle = self.step_angle();
        for i in 0..steps {
            cursor.set_width(self.width_at(i));
            cursor.forward(chord);
            match self.turn {
                Turn::Left => cursor.left(angle),
                Turn::Right => cursor.right(angle),
            }
        }
    }
}

/// Draw `request` starting at `pose`.
pub fn arc(pose: Pose, request: &ArcRequest) -> Trace {
    trace(pose, |c| request.draw(c))
}
