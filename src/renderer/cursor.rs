//! Drawing context: a pen with an explicit pose that records what it draws.
//!
//! Coordinates are y-up. Headings are in degrees, 0 pointing right and
//! positive turning counter-clockwise. Glyphs move a [`Cursor`] around;
//! the cursor turns every pen-down move into a [`DrawCommand`] instead of
//! touching any display, so a glyph can be checked by looking at the pose
//! it leaves behind and the commands it produced.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Position, heading and pen state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Point,
    /// Degrees in [0, 360)
    pub heading: f64,
    pub pen_down: bool,
    pub width: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Point::default(),
            heading: 0.0,
            pen_down: true,
            width: 1.0,
        }
    }
}

impl Pose {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            ..Self::default()
        }
    }

    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = normalize(heading);
        self
    }
}

/// A primitive handed to a [`Surface`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum DrawCommand {
    /// Straight stroke at the pen width in effect when it was drawn
    Line { from: Point, to: Point, width: f64 },
    /// Filled dot centered on `at`
    Dot { at: Point, diameter: f64 },
    /// Filled polygon through the points visited between begin/end fill
    Fill { points: Vec<Point> },
}

impl DrawCommand {
    /// The same command shifted by (dx, dy).
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let shift = |p: &Point| Point::new(p.x + dx, p.y + dy);
        match self {
            DrawCommand::Line { from, to, width } => DrawCommand::Line {
                from: shift(from),
                to: shift(to),
                width: *width,
            },
            DrawCommand::Dot { at, diameter } => DrawCommand::Dot {
                at: shift(at),
                diameter: *diameter,
            },
            DrawCommand::Fill { points } => DrawCommand::Fill {
                points: points.iter().map(shift).collect(),
            },
        }
    }
}

/// Anything that can present drawing commands.
pub trait Surface {
    fn draw(&mut self, command: &DrawCommand);

    fn draw_all(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            self.draw(command);
        }
    }
}

/// Axis-aligned extent of a set of commands, including stroke widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
    empty: bool,
}

impl Bounds {
    pub fn new() -> Self {
        Self {
            min: Point::default(),
            max: Point::default(),
            empty: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    fn include(&mut self, p: Point, pad: f64) {
        if self.empty {
            self.min = Point::new(p.x - pad, p.y - pad);
            self.max = Point::new(p.x + pad, p.y + pad);
            self.empty = false;
            return;
        }
        self.min.x = self.min.x.min(p.x - pad);
        self.min.y = self.min.y.min(p.y - pad);
        self.max.x = self.max.x.max(p.x + pad);
        self.max.y = self.max.y.max(p.y + pad);
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for Bounds {
    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Line { from, to, width } => {
                self.include(*from, width / 2.0);
                self.include(*to, width / 2.0);
            }
            DrawCommand::Dot { at, diameter } => self.include(*at, diameter / 2.0),
            DrawCommand::Fill { points } => {
                for p in points {
                    self.include(*p, 0.0);
                }
            }
        }
    }
}

/// Result of drawing from a pose: where the pen ended up and what it drew.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub pose: Pose,
    pub commands: Vec<DrawCommand>,
}

/// Run `f` on a fresh cursor at `pose` and collect the result.
pub fn trace(pose: Pose, f: impl FnOnce(&mut Cursor)) -> Trace {
    let mut cursor = Cursor::at(pose);
    f(&mut cursor);
    cursor.finish()
}

/// A recording pen.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    pose: Pose,
    commands: Vec<DrawCommand>,
    fill: Option<Vec<Point>>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(pose: Pose) -> Self {
        Self {
            pose,
            commands: Vec::new(),
            fill: None,
        }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn position(&self) -> Point {
        self.pose.position
    }

    pub fn heading(&self) -> f64 {
        self.pose.heading
    }

    pub fn width(&self) -> f64 {
        self.pose.width
    }

    pub fn is_down(&self) -> bool {
        self.pose.pen_down
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn finish(self) -> Trace {
        Trace {
            pose: self.pose,
            commands: self.commands,
        }
    }

    // ── Pen state ───────────────────────────────────────────────────

    pub fn up(&mut self) {
        self.pose.pen_down = false;
    }

    pub fn down(&mut self) {
        self.pose.pen_down = true;
    }

    pub fn set_width(&mut self, width: f64) {
        self.pose.width = width;
    }

    // ── Heading ─────────────────────────────────────────────────────

    pub fn set_heading(&mut self, degrees: f64) {
        self.pose.heading = normalize(degrees);
    }

    pub fn left(&mut self, degrees: f64) {
        self.set_heading(self.pose.heading + degrees);
    }

    pub fn right(&mut self, degrees: f64) {
        self.set_heading(self.pose.heading - degrees);
    }

    // ── Movement ────────────────────────────────────────────────────

    pub fn forward(&mut self, distance: f64) {
        let rad = self.pose.heading.to_radians();
        let p = self.pose.position;
        self.move_to(Point::new(
            p.x + distance * rad.cos(),
            p.y + distance * rad.sin(),
        ));
    }

    pub fn backward(&mut self, distance: f64) {
        self.forward(-distance);
    }

    /// Move to an absolute position, drawing if the pen is down.
    pub fn goto(&mut self, x: f64, y: f64) {
        self.move_to(Point::new(x, y));
    }

    fn move_to(&mut self, to: Point) {
        let from = self.pose.position;
        if self.pose.pen_down && from != to {
            self.commands.push(DrawCommand::Line {
                from,
                to,
                width: self.pose.width,
            });
        }
        if let Some(points) = self.fill.as_mut() {
            points.push(to);
        }
        self.pose.position = to;
    }

    // ── Filled shapes ───────────────────────────────────────────────

    /// Dot at the current position, drawn whether or not the pen is down.
    pub fn dot(&mut self, diameter: f64) {
        self.commands.push(DrawCommand::Dot {
            at: self.pose.position,
            diameter,
        });
    }

    pub fn begin_fill(&mut self) {
        self.fill = Some(vec![self.pose.position]);
    }

    /// Close the fill region. Does nothing if no fill is open or the
    /// region has fewer than three points.
    pub fn end_fill(&mut self) {
        if let Some(points) = self.fill.take() {
            if points.len() >= 3 {
                self.commands.push(DrawCommand::Fill { points });
            }
        }
    }
}

fn normalize(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Smallest absolute difference between two headings, in degrees.
pub fn heading_delta(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}
