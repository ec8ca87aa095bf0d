//! Pitch model: maps a note letter plus octave marks to a staff offset.
//!
//! Offsets are measured in staff units from the middle line (treble `B`),
//! one `y_spacing` per diatonic step, so `E` sits on the bottom line and
//! `f` on the top line.

/// The 28 supported pitch tokens, lowest first.
pub const PITCH_TOKENS: [&str; 28] = [
    "C,", "D,", "E,", "F,", "G,", "A,", "B,",
    "C", "D", "E", "F", "G", "A", "B",
    "c", "d", "e", "f", "g", "a", "b",
    "c'", "d'", "e'", "f'", "g'", "a'", "b'",
];

/// Pitch step used when no spacing is given.
pub const DEFAULT_Y_SPACING: i32 = 10;

/// Offset returned for tokens outside the table: the middle line.
pub const DEFAULT_OFFSET: i32 = 0;

const MIDDLE_LINE_INDEX: i32 = 13; // "B"

/// Lookup table from pitch token to vertical offset. Offsets saturate at
/// the `i32` range for oversized pitch steps.
#[derive(Debug, Clone)]
pub struct PitchTable {
    offsets: [(&'static str, i32); 28],
}

impl PitchTable {
    pub fn new(y_spacing: i32) -> Self {
        let mut offsets = [("", 0); 28];
        for (i, token) in PITCH_TOKENS.iter().enumerate() {
            offsets[i] = (*token, (i as i32 - MIDDLE_LINE_INDEX).saturating_mul(y_spacing));
        }
        Self { offsets }
    }

    /// Vertical offset of `token`, or [`DEFAULT_OFFSET`] when the token
    /// isn't one of the 28 known pitches. Unknown tokens are not an error.
    pub fn offset(&self, token: &str) -> i32 {
        self.offsets
            .iter()
            .find(|(t, _)| *t == token)
            .map_or(DEFAULT_OFFSET, |&(_, y)| y)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.offsets.iter().copied()
    }
}

impl Default for PitchTable {
    fn default() -> Self {
        Self::new(DEFAULT_Y_SPACING)
    }
}

/// Offset of `token` with the default pitch step.
pub fn pitch_offset(token: &str) -> i32 {
    PitchTable::default().offset(token)
}
