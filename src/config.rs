//! Stave layout configuration.
//!
//! Every field has a default, so a config file only needs to name the
//! values it changes:
//!
//! ```json
//! { "x_spacing": 40.0, "staff_length": 800.0 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StaveError;

/// Layout parameters shared by the parser and the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaveConfig {
    /// x of the first event on a line
    pub x_start: f64,
    /// Horizontal advance after every event (notes, rests and bars alike)
    pub x_spacing: f64,
    /// Vertical distance between adjacent pitch positions
    pub y_spacing: i32,
    /// Number of staff lines
    pub staff_lines: usize,
    /// Length of each staff line
    pub staff_length: f64,
    /// x of the clef anchor
    pub clef_x: f64,
    /// Clef tilt in degrees. The clef outline is only tuned for 10.
    pub clef_tilt: f64,
    /// Pen width for bars, stems and ledger lines
    pub pen_width: f64,
    /// Default polygon resolution for arcs that don't pick their own
    pub arc_steps: u32,
    /// Blank border around the SVG drawing
    pub margin: f64,
    /// Vertical distance between staves when rendering several lines
    pub stave_spacing: f64,
}

impl Default for StaveConfig {
    fn default() -> Self {
        Self {
            x_start: 70.0,
            x_spacing: 30.0,
            y_spacing: 10,
            staff_lines: 5,
            staff_length: 630.0,
            clef_x: 25.0,
            clef_tilt: 10.0,
            pen_width: 2.0,
            arc_steps: 100,
            margin: 20.0,
            stave_spacing: 220.0,
        }
    }
}

impl StaveConfig {
    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, StaveError> {
        serde_json::from_str(json).map_err(StaveError::Config)
    }

    /// Load a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StaveError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StaveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Distance between two staff lines (two pitch positions).
    pub fn line_gap(&self) -> f64 {
        2.0 * self.y_spacing as f64
    }

    /// Total height from the bottom line to the top line.
    pub fn staff_height(&self) -> f64 {
        self.staff_lines.saturating_sub(1) as f64 * self.line_gap()
    }

    /// y of the lowest staff line. The middle line is y = 0.
    pub fn bottom_line(&self) -> f64 {
        -self.staff_height() / 2.0
    }

    /// y of the highest staff line.
    pub fn top_line(&self) -> f64 {
        self.staff_height() / 2.0
    }
}
