//! Data model for a parsed notation line.
//!
//! A line becomes an ordered [`Score`] of [`Event`]s. Each event carries
//! the coordinates it was given by the parser and never changes after
//! that; rendering walks the events once, in order.

use serde::{Deserialize, Serialize};

/// Duration class of a note or rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Duration {
    Whole,
    Half,
    #[default]
    Quarter,
    Eighth,
    Sixteenth,
}

impl Duration {
    /// Whether a notehead of this duration is filled.
    pub fn is_filled(self) -> bool {
        !matches!(self, Duration::Whole | Duration::Half)
    }

    /// Whether a note of this duration carries a stem. Only quarters and
    /// halves do; there are no flag glyphs for shorter notes.
    pub fn has_stem(self) -> bool {
        matches!(self, Duration::Quarter | Duration::Half)
    }
}

/// Accidental written before a note letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accidental {
    Sharp,
    DoubleSharp,
    Flat,
    DoubleFlat,
    Natural,
}

impl Accidental {
    /// Read ABC accidental marks (`^`, `^^`, `_`, `__`, `=`).
    /// Any other combination is treated as no accidental.
    pub fn from_marks(marks: &str) -> Option<Self> {
        match marks {
            "^" => Some(Accidental::Sharp),
            "^^" => Some(Accidental::DoubleSharp),
            "_" => Some(Accidental::Flat),
            "__" => Some(Accidental::DoubleFlat),
            "=" => Some(Accidental::Natural),
            _ => None,
        }
    }
}

/// One musical event on the staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Event {
    /// A pitched note. `y` is the staff offset from the pitch table.
    Note {
        x: f64,
        y: i32,
        duration: Duration,
        accidental: Option<Accidental>,
    },
    /// A rest. Its height is fixed by the staff, not by pitch.
    Rest { x: f64, duration: Duration },
    /// A bar line closing a measure.
    Measure { x: f64 },
}

impl Event {
    /// A plain quarter note.
    pub fn note(x: f64, y: i32) -> Self {
        Event::Note {
            x,
            y,
            duration: Duration::Quarter,
            accidental: None,
        }
    }

    /// A quarter rest.
    pub fn rest(x: f64) -> Self {
        Event::Rest {
            x,
            duration: Duration::Quarter,
        }
    }

    pub fn measure(x: f64) -> Self {
        Event::Measure { x }
    }

    /// Horizontal position of the event.
    pub fn x(&self) -> f64 {
        match *self {
            Event::Note { x, .. } | Event::Rest { x, .. } | Event::Measure { x } => x,
        }
    }

    pub fn is_note(&self) -> bool {
        matches!(self, Event::Note { .. })
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, Event::Rest { .. })
    }

    pub fn is_measure(&self) -> bool {
        matches!(self, Event::Measure { .. })
    }
}

/// Events of one notation line in parse order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub events: Vec<Event>,
}

impl Score {
    /// Create a new empty score.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Number of notes (excluding rests and bars).
    pub fn note_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_note()).count()
    }

    pub fn rest_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_rest()).count()
    }

    /// Number of bar lines, which equals the number of measures.
    pub fn measure_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_measure()).count()
    }
}

impl<'a> IntoIterator for &'a Score {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_only_on_quarters_and_halves() {
        assert!(Duration::Quarter.has_stem());
        assert!(Duration::Half.has_stem());
        assert!(!Duration::Whole.has_stem());
        assert!(!Duration::Eighth.has_stem());
        assert!(!Duration::Sixteenth.has_stem());
    }

    #[test]
    fn accidental_marks() {
        assert_eq!(Accidental::from_marks("^^"), Some(Accidental::DoubleSharp));
        assert_eq!(Accidental::from_marks("="), Some(Accidental::Natural));
        assert_eq!(Accidental::from_marks(""), None);
        assert_eq!(Accidental::from_marks("^_"), None);
    }

    #[test]
    fn score_counts_by_kind() {
        let mut score = Score::new();
        score.push(Event::note(0.0, 10));
        score.push(Event::rest(30.0));
        score.push(Event::measure(60.0));
        assert_eq!(score.len(), 3);
        assert_eq!(
            (score.note_count(), score.rest_count(), score.measure_count()),
            (1, 1, 1)
        );
        let xs: Vec<f64> = score.iter().map(Event::x).collect();
        assert_eq!(xs, vec![0.0, 30.0, 60.0]);
    }
}
