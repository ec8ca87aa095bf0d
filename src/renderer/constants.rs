//! Shared constants for the glyph library (in world units, y-up).
//!
//! Glyph shapes are tuned for the default staff (line gap 20).

// ── Noteheads ───────────────────────────────────────────────────────
pub(super) const NOTEHEAD_RADIUS: f64 = 10.0;
pub(super) const NOTEHEAD_STEPS: u32 = 25; // polygon resolution for oval arcs
pub(super) const NOTEHEAD_DROP: f64 = 8.0; // oval starts this far below the note's y
pub(super) const NOTEHEAD_THIN: f64 = 1.0;
pub(super) const NOTEHEAD_THICK: f64 = 4.0;

// ── Stems ───────────────────────────────────────────────────────────
pub(super) const STEM_SPACES: f64 = 3.5; // default stem length in line gaps
pub(super) const STEM_UP_X: f64 = 11.0; // right edge of the oval
pub(super) const STEM_DOWN_X: f64 = -4.5; // left edge of the oval

// ── Ledger lines ────────────────────────────────────────────────────
pub(super) const LEDGER_LEFT: f64 = -10.0;
pub(super) const LEDGER_LENGTH: f64 = 25.0;

// ── Clef ────────────────────────────────────────────────────────────
pub(super) const CLEF_DOT: f64 = 12.0;
pub(super) const CLEF_REACH: f64 = 100.0; // spine length above the anchor's staff-relative height
pub(super) const CLEF_TUNED_TILT: f64 = 10.0;

// ── Rests ───────────────────────────────────────────────────────────
pub(super) const REST_Y: f64 = 0.0; // rests sit on the middle line
pub(super) const EIGHTH_REST_DOT: f64 = 8.0;
pub(super) const EIGHTH_REST_DOT_RISE: f64 = 6.0;
pub(super) const EIGHTH_REST_STEM: f64 = 28.0;
pub(super) const SIXTEENTH_REST_DX: f64 = -3.6;
pub(super) const SIXTEENTH_REST_DY: f64 = -10.0;
pub(super) const BLOCK_REST_WIDTH: f64 = 14.0;

// ── Accidentals ─────────────────────────────────────────────────────
pub(super) const ACCIDENTAL_OFFSET: f64 = 16.0; // glyph center left of the note x
pub(super) const ACCIDENTAL_STEM_WIDTH: f64 = 1.5;
pub(super) const ACCIDENTAL_BAR_WIDTH: f64 = 3.0;

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const INK_COLOR: &str = "#1a1a1a";
pub(super) const BACKGROUND_COLOR: &str = "white";
