//! Notation parser: converts one line of ABC-subset notation into a Score.
//!
//! Supported: note letters `A`–`G` / `a`–`g` with `,` and `'` octave
//! marks, rests `z`/`Z`, accidental marks (`^`, `_`, `=`) and length
//! modifiers (`2`, `/2`, `3/2`). Measures are separated by `|`. Header
//! lines such as `X:1` or `K:G` are rejected rather than parsed.

use tracing::{debug, trace};
use winnow::combinator::opt;
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use crate::config::StaveConfig;
use crate::model::*;
use crate::pitch::PitchTable;

type PResult<T> = winnow::ModalResult<T>;

/// One raw note or rest token, as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Accidental marks before the letter (may be empty)
    pub accidentals: &'a str,
    /// Note letter, or `z`/`Z` for a rest
    pub letter: char,
    /// Octave marks after the letter (may be empty)
    pub octave: &'a str,
    /// Length modifier: digits and slashes (may be empty). Not used for
    /// spacing or duration yet.
    pub length: &'a str,
}

impl Token<'_> {
    pub fn is_rest(&self) -> bool {
        matches!(self.letter, 'z' | 'Z')
    }

    /// Letter plus octave marks, the key into the pitch table.
    pub fn pitch(&self) -> String {
        format!("{}{}", self.letter, self.octave)
    }
}

// ─── Token grammar ───────────────────────────────────────────────────

fn accidental_marks<'i>(input: &mut &'i str) -> PResult<&'i str> {
    take_while(0.., ['^', '_', '=']).parse_next(input)
}

fn letter(input: &mut &str) -> PResult<char> {
    one_of(|c: char| matches!(c, 'A'..='G' | 'a'..='g' | 'z' | 'Z')).parse_next(input)
}

fn octave_marks<'i>(input: &mut &'i str) -> PResult<&'i str> {
    take_while(0.., ['\'', ',']).parse_next(input)
}

fn length<'i>(input: &mut &'i str) -> PResult<&'i str> {
    take_while(0.., |c: char| c == '/' || c.is_ascii_digit()).parse_next(input)
}

fn token<'i>(input: &mut &'i str) -> PResult<Token<'i>> {
    let accidentals = accidental_marks(input)?;
    let letter = letter(input)?;
    let octave = octave_marks(input)?;
    let length = length(input)?;
    Ok(Token {
        accidentals,
        letter,
        octave,
        length,
    })
}

/// Extract the note and rest tokens from a measure, left to right.
///
/// Anything that doesn't start a token (spaces, chord brackets, stray
/// punctuation) is skipped one character at a time.
pub fn tokenize(measure: &str) -> Vec<Token<'_>> {
    let mut input = measure;
    let mut tokens = Vec::new();

    while !input.is_empty() {
        match opt(token).parse_next(&mut input) {
            Ok(Some(tok)) => tokens.push(tok),
            Ok(None) => {
                let mut chars = input.chars();
                if let Some(skipped) = chars.next() {
                    trace!(%skipped, "skipping unrecognized character");
                }
                input = chars.as_str();
            }
            Err(_) => break,
        }
    }

    tokens
}

// ─── Lines ───────────────────────────────────────────────────────────

/// Whether `line` is an ABC header field (a letter followed by `:`).
pub fn is_header(line: &str) -> bool {
    let mut chars = line.chars();
    matches!((chars.next(), chars.next()), (Some(c), Some(':')) if c.is_ascii_alphabetic())
}

/// `line` without its `%` comment, if any.
pub fn strip_comment(line: &str) -> &str {
    line.split_once('%').map_or(line, |(code, _)| code)
}

/// Parse a notation line into events.
///
/// Returns `None` for header lines. Every note, rest and bar advances the
/// running x by `x_spacing`, whatever its duration; each measure, even an
/// empty one, is closed by a bar event.
pub fn parse_line(line: &str, x_start: f64, x_spacing: f64, y_spacing: i32) -> Option<Score> {
    if is_header(line) {
        debug!(line, "header line not parsed");
        return None;
    }

    let pitches = PitchTable::new(y_spacing);
    let mut score = Score::new();
    let mut x = x_start;

    for measure in line.split('|') {
        for tok in tokenize(measure) {
            let event = if tok.is_rest() {
                Event::rest(x)
            } else {
                Event::Note {
                    x,
                    y: pitches.offset(&tok.pitch()),
                    duration: Duration::Quarter,
                    accidental: Accidental::from_marks(tok.accidentals),
                }
            };
            trace!(?event, length = tok.length, "token");
            score.push(event);
            x += x_spacing;
        }
        score.push(Event::measure(x));
        x += x_spacing;
    }

    debug!(
        notes = score.note_count(),
        rests = score.rest_count(),
        measures = score.measure_count(),
        "parsed notation line"
    );
    Some(score)
}

/// [`parse_line`] with start, spacing and pitch step taken from `config`.
pub fn parse_with_config(line: &str, config: &StaveConfig) -> Option<Score> {
    parse_line(line, config.x_start, config.x_spacing, config.y_spacing)
}
